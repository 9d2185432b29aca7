/*
[INPUT]:  Terminal input from the operator
[OUTPUT]: Menu-driven order placement and account queries
[POS]:    CLI layer - interactive shell modules
[UPDATE]: When adding shell flows or prompt helpers
*/

pub mod menu;
pub mod prompts;
pub mod shell;

pub use shell::run_shell;

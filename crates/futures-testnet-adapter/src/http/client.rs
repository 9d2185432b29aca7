/*
[INPUT]:  HTTP configuration (base URL, timeouts, recvWindow, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::signature::{RequestSigner, encode_query};
use crate::http::{FuturesError, Result};

/// Base URL for the USDⓈ-M futures test network
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Milliseconds a signed request stays valid after its timestamp
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: 5000,
        }
    }
}

/// API key/secret pair for signed requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
struct Signing {
    api_key: String,
    signer: RequestSigner,
}

/// Main HTTP client for the futures testnet API
#[derive(Debug)]
pub struct FuturesClient {
    http_client: Client,
    base_url: Url,
    recv_window: u64,
    signing: Option<Signing>,
}

impl FuturesClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, TESTNET_BASE_URL)
    }

    /// Create a new client against an explicit base URL (mock servers in tests)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            recv_window: config.recv_window,
            signing: None,
        })
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) -> Result<()> {
        let signer = RequestSigner::new(&credentials.api_secret)?;
        self.signing = Some(Signing {
            api_key: credentials.api_key,
            signer,
        });
        Ok(())
    }

    /// Builder-style variant of [`set_credentials`](Self::set_credentials)
    pub fn with_credentials(mut self, credentials: Credentials) -> Result<Self> {
        self.set_credentials(credentials)?;
        Ok(self)
    }

    pub fn has_credentials(&self) -> bool {
        self.signing.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, endpoint: &str, query: &str) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Request builder for endpoints that need no authentication
    pub(crate) fn public_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let url = self.url(endpoint, &encode_query(params))?;
        Ok(self.http_client.request(method, url))
    }

    /// Request builder for USER_DATA / TRADE endpoints.
    ///
    /// Every parameter travels in the query string, followed by `recvWindow`,
    /// `timestamp` and the HMAC `signature`.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let signing = self
            .signing
            .as_ref()
            .ok_or(FuturesError::MissingCredentials)?;

        let timestamp = Utc::now().timestamp_millis();
        let query = signing
            .signer
            .signed_query(params, self.recv_window, timestamp);
        let url = self.url(endpoint, &query)?;

        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, signing.api_key.as_str()))
    }

    /// Send a request and decode a JSON body, mapping rejections to [`FuturesError::Api`]
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), body = %body, "exchange rejected request");
            return Err(FuturesError::from_response_body(status, &body));
        }

        serde_json::from_str(&body).map_err(|err| {
            FuturesError::InvalidResponse(format!("{err}; body: {body}"))
        })
    }
}

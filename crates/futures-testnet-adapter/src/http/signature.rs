/*
[INPUT]:  Query parameters and API secret
[OUTPUT]: Signed query strings (timestamp, recvWindow, signature)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{FuturesError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings for USER_DATA / TRADE endpoints
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a signer keyed by the API secret
    pub fn new(api_secret: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .map_err(|err| FuturesError::Config(format!("invalid API secret: {err}")))?;
        Ok(Self { mac })
    }

    /// HMAC-SHA256 of the payload, hex encoded
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build the full signed query string.
    ///
    /// Format: "{params}&recvWindow={recv_window}&timestamp={timestamp}&signature={hex}"
    pub fn signed_query(
        &self,
        params: &[(&str, String)],
        recv_window: u64,
        timestamp: i64,
    ) -> String {
        let mut pairs: Vec<(&str, String)> = params.to_vec();
        pairs.push(("recvWindow", recv_window.to_string()));
        pairs.push(("timestamp", timestamp.to_string()));

        let payload = encode_query(&pairs);
        let signature = self.sign(&payload);
        format!("{payload}&signature={signature}")
    }
}

/// Form-encode parameters, preserving their order
pub fn encode_query(params: &[(&str, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published example pair from the exchange's API documentation.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    #[test]
    fn test_sign_matches_documented_example() {
        let signer = RequestSigner::new(DOC_SECRET).unwrap();
        let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        assert_eq!(
            signer.sign(payload),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signed_query_appends_window_timestamp_and_signature() {
        let signer = RequestSigner::new("secret").unwrap();
        let params = vec![("symbol", "BTCUSDT".to_string())];

        let query = signer.signed_query(&params, 5000, 1_700_000_000_000);
        let (payload, signature) = query.rsplit_once("&signature=").unwrap();

        assert_eq!(payload, "symbol=BTCUSDT&recvWindow=5000&timestamp=1700000000000");
        assert_eq!(signature, signer.sign(payload));
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = RequestSigner::new("super-secret").unwrap();
        assert!(!format!("{signer:?}").contains("super-secret"));
    }
}

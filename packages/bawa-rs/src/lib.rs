//! Pure REST client for the Bawa WhatsApp gateway
//!
//! A minimal client for the Bawa `send-text` API with no domain-specific
//! logic. Callers are expected to pass an already-canonicalized phone number
//! (country-code-prefixed digit string); the client only appends the
//! WhatsApp JID suffix and performs the HTTP call.
//!
//! # Example
//!
//! ```rust,ignore
//! use bawa::BawaClient;
//!
//! let client = BawaClient::from_env()?;
//! let response = client.send_text("252612345678", "Salaan!").await?;
//! println!("gateway said: {response}");
//! ```

pub mod error;

pub use error::{BawaError, Result};

use reqwest::{header, Client};
use tracing::{debug, error};

/// Default production endpoint of the Bawa API.
pub const DEFAULT_BASE_URL: &str = "https://bawa.app/api/v1";

/// Domain suffix turning a phone number into a WhatsApp JID.
pub const WHATSAPP_DOMAIN: &str = "s.whatsapp.net";

/// Fixed client identifier sent with every request.
const USER_AGENT: &str = "BloodDonationApp/1.0";

/// Per-request timeout. The gateway is slow on bad days but a hung
/// connection must not stall a whole notification run.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the WhatsApp JID for a canonical phone number.
pub fn whatsapp_jid(phone: &str) -> String {
    format!("{}@{}", phone, WHATSAPP_DOMAIN)
}

/// Bawa gateway API client.
#[derive(Debug, Clone)]
pub struct BawaClient {
    http_client: Client,
    base_url: String,
    token: String,
    instance_id: String,
}

impl BawaClient {
    /// Create a new client with the given service credentials.
    pub fn new(token: impl Into<String>, instance_id: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            instance_id: instance_id.into(),
        })
    }

    /// Create from the `BAWA_TOKEN`, `BAWA_INSTANCE_ID` and optional
    /// `BAWA_BASE_URL` environment variables.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("BAWA_TOKEN")
            .map_err(|_| BawaError::Config("BAWA_TOKEN not set".into()))?;
        let instance_id = std::env::var("BAWA_INSTANCE_ID")
            .map_err(|_| BawaError::Config("BAWA_INSTANCE_ID not set".into()))?;

        let mut client = Self::new(token, instance_id)?;
        if let Ok(url) = std::env::var("BAWA_BASE_URL") {
            client = client.with_base_url(url);
        }
        Ok(client)
    }

    /// Set a custom base URL (staging, proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a text message to a canonical phone number.
    ///
    /// Issues `GET {base_url}/send-text` with the credentials, the JID and
    /// the URL-encoded message body. Any non-2xx response is an error; a 2xx
    /// response body is parsed as JSON and passed through opaquely.
    pub async fn send_text(&self, phone: &str, message: &str) -> Result<serde_json::Value> {
        let jid = whatsapp_jid(phone);
        let url = format!("{}/send-text", self.base_url);

        debug!(jid = %jid, "Sending WhatsApp text via Bawa");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("token", self.token.as_str()),
                ("instance_id", self.instance_id.as_str()),
                ("jid", jid.as_str()),
                ("msg", message),
            ])
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status, %body, "Bawa send-text failed");
            return Err(BawaError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| BawaError::Parse(format!("Invalid JSON from gateway: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_jid() {
        assert_eq!(whatsapp_jid("252612345678"), "252612345678@s.whatsapp.net");
    }

    #[test]
    fn test_client_defaults_to_production_url() {
        let client = BawaClient::new("token", "instance").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_overrides() {
        let client = BawaClient::new("token", "instance")
            .unwrap()
            .with_base_url("http://localhost:9090/api/v1");
        assert_eq!(client.base_url(), "http://localhost:9090/api/v1");
    }

    #[test]
    fn test_api_error_exposes_status() {
        let err = BawaError::Api {
            status: 429,
            body: "slow down".into(),
        };
        assert_eq!(err.status(), Some(429));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    #[ignore] // Requires live Bawa credentials
    async fn test_send_text_live() {
        let client = BawaClient::from_env().expect("BAWA_* env vars not set");
        let phone = std::env::var("TEST_BAWA_PHONE").expect("TEST_BAWA_PHONE not set");

        let result = client.send_text(&phone, "Badbaado test message").await;
        assert!(result.is_ok());
    }
}

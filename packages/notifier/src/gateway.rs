//! Gateway trait seam.
//!
//! The dispatch loop only ever talks to [`MessageGateway`], so tests run
//! against [`crate::testing::MockGateway`] and production wires in
//! [`BawaGateway`].

use async_trait::async_trait;

use crate::error::Result;

/// One-shot text delivery to a canonical phone number.
///
/// Implementations perform a single call and report its outcome; retry and
/// continue-on-failure policy belongs to the dispatch loop.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Send `message` to `phone` (canonical digit string, no JID suffix).
    ///
    /// Returns the gateway's response body, passed through opaquely.
    async fn send_text(&self, phone: &str, message: &str) -> Result<serde_json::Value>;
}

/// Production gateway backed by [`bawa::BawaClient`].
#[derive(Debug, Clone)]
pub struct BawaGateway {
    client: bawa::BawaClient,
}

impl BawaGateway {
    pub fn new(client: bawa::BawaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageGateway for BawaGateway {
    async fn send_text(&self, phone: &str, message: &str) -> Result<serde_json::Value> {
        Ok(self.client.send_text(phone, message).await?)
    }
}

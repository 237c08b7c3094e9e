//! Testing utilities including a mock gateway.
//!
//! Useful for testing dispatch behavior without a network or real gateway
//! credentials.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{NotifyError, Result};
use crate::gateway::MessageGateway;

/// Record of one send accepted by the mock.
#[derive(Debug, Clone)]
pub struct SentText {
    pub phone: String,
    pub message: String,
}

/// A mock gateway for testing.
///
/// Records every accepted send and can be told to fail for specific
/// canonical phone numbers with a synthetic gateway error.
#[derive(Default, Clone)]
pub struct MockGateway {
    sent: Arc<RwLock<Vec<SentText>>>,
    failing_phones: Arc<RwLock<HashSet<String>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail sends to this canonical phone number.
    pub fn failing_for(self, phone: impl Into<String>) -> Self {
        self.failing_phones.write().unwrap().insert(phone.into());
        self
    }

    /// All sends accepted so far, in order.
    pub fn sent(&self) -> Vec<SentText> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

#[async_trait]
impl MessageGateway for MockGateway {
    async fn send_text(&self, phone: &str, message: &str) -> Result<serde_json::Value> {
        if self.failing_phones.read().unwrap().contains(phone) {
            return Err(NotifyError::Gateway(bawa::BawaError::Api {
                status: 500,
                body: "mock gateway failure".to_string(),
            }));
        }

        self.sent.write().unwrap().push(SentText {
            phone: phone.to_string(),
            message: message.to_string(),
        });
        Ok(serde_json::json!({"status": "sent"}))
    }
}

//! The bulk dispatch loop.
//!
//! Sends one composed message to a list of recipients, strictly in order,
//! one gateway call at a time with a courtesy delay between calls. A
//! failure for one recipient is recorded and the loop moves on; the caller
//! gets the full per-recipient picture in the [`DispatchReport`].
//!
//! Dispatch calls hold no shared mutable state, so independent events can
//! be notified concurrently by spawning one task per call.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{NotifyError, Result};
use crate::gateway::MessageGateway;
use crate::message::compose;
use crate::phone::normalize_phone;
use crate::types::{BloodRequest, MessageKind, Recipient};

/// Inter-send delays, per notification class.
///
/// Donor alerts go to the largest audiences, so they get the longest delay
/// to stay under the gateway's rate limit.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub donor_delay: Duration,
    pub admin_delay: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            donor_delay: Duration::from_secs(2),
            admin_delay: Duration::from_secs(1),
        }
    }
}

impl DispatchConfig {
    /// Config with custom delays.
    pub fn with_delays(donor_delay: Duration, admin_delay: Duration) -> Self {
        Self {
            donor_delay,
            admin_delay,
        }
    }

    fn delay_for(&self, kind: MessageKind) -> Duration {
        match kind {
            MessageKind::DonorAlert => self.donor_delay,
            MessageKind::AdminAlert | MessageKind::RequesterConfirmation => self.admin_delay,
        }
    }
}

/// Delivery record for one recipient. Created exactly once per recipient
/// per dispatch call, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub recipient_id: Uuid,
    /// Canonical number the send went to, or the raw number when
    /// normalization itself failed.
    pub phone: String,
    pub display_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchOutcome {
    fn delivered(recipient: &Recipient, phone: String, response: serde_json::Value) -> Self {
        Self {
            recipient_id: recipient.id,
            phone,
            display_name: recipient.display_name.clone(),
            success: true,
            response: Some(response),
            error: None,
        }
    }

    fn failed(recipient: &Recipient, error: String) -> Self {
        Self {
            recipient_id: recipient.id,
            phone: recipient.phone.clone(),
            display_name: recipient.display_name.clone(),
            success: false,
            response: None,
            error: Some(error),
        }
    }
}

/// Ordered per-recipient outcomes of one dispatch call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub outcomes: Vec<DispatchOutcome>,
}

impl DispatchReport {
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn is_all_delivered(&self) -> bool {
        self.success_count() == self.total_count()
    }

    /// Outcomes for recipients that could not be reached.
    pub fn failures(&self) -> impl Iterator<Item = &DispatchOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }
}

/// Bulk notification dispatch engine.
///
/// Holds only static configuration; every dispatch call is self-contained
/// and leaves nothing behind.
#[derive(Clone)]
pub struct NotificationService {
    gateway: Arc<dyn MessageGateway>,
    config: DispatchConfig,
}

impl NotificationService {
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self::with_config(gateway, DispatchConfig::default())
    }

    pub fn with_config(gateway: Arc<dyn MessageGateway>, config: DispatchConfig) -> Self {
        Self { gateway, config }
    }

    /// Notify every recipient in input order.
    ///
    /// The body is composed once and reused. A normalization or gateway
    /// failure for one recipient is recorded in its outcome and the loop
    /// continues with the next; this call itself never fails.
    pub async fn dispatch(
        &self,
        recipients: &[Recipient],
        kind: MessageKind,
        request: &BloodRequest,
    ) -> DispatchReport {
        let body = compose(kind, request);
        let total = recipients.len();

        info!(total, kind = ?kind, event = ?request.event, "Starting notification dispatch");

        let mut outcomes = Vec::with_capacity(total);
        for (index, recipient) in recipients.iter().enumerate() {
            info!(
                "[{}/{}] Notifying {} ({})",
                index + 1,
                total,
                recipient.display_name,
                recipient.phone
            );

            let outcome = match self.send_one(recipient, &body).await {
                Ok((phone, response)) => {
                    info!("Successfully notified {}", recipient.display_name);
                    DispatchOutcome::delivered(recipient, phone, response)
                }
                Err(e) => {
                    error!("Failed to notify {}: {}", recipient.phone, e);
                    DispatchOutcome::failed(recipient, e.to_string())
                }
            };
            outcomes.push(outcome);

            // Rate-limiting courtesy between calls, skipped after the last
            if index + 1 < total {
                tokio::time::sleep(self.config.delay_for(kind)).await;
            }
        }

        let report = DispatchReport { outcomes };
        info!(
            successful = report.success_count(),
            total,
            "Notification summary"
        );
        report
    }

    /// [`dispatch`](Self::dispatch) racing a cancellation signal.
    ///
    /// Cancellation wins at the loop's suspension points (the inter-send
    /// delay and the gateway call) and discards any partial report.
    pub async fn dispatch_with_cancel(
        &self,
        recipients: &[Recipient],
        kind: MessageKind,
        request: &BloodRequest,
        cancel: CancellationToken,
    ) -> Result<DispatchReport> {
        tokio::select! {
            report = self.dispatch(recipients, kind, request) => Ok(report),
            _ = cancel.cancelled() => Err(NotifyError::Cancelled),
        }
    }

    /// Alert eligible donors about an approved request.
    ///
    /// Eligibility (cooldown, active status, matching blood type) has
    /// already been decided by the caller.
    pub async fn notify_eligible_donors(
        &self,
        donors: &[Recipient],
        request: &BloodRequest,
    ) -> DispatchReport {
        self.dispatch(donors, MessageKind::DonorAlert, request).await
    }

    /// Ask admins to review a newly submitted request.
    pub async fn notify_admins_new_request(
        &self,
        admins: &[Recipient],
        request: &BloodRequest,
    ) -> DispatchReport {
        self.dispatch(admins, MessageKind::AdminAlert, request).await
    }

    /// Confirm approval to the requester's own contact number.
    ///
    /// Single send, so unlike [`dispatch`](Self::dispatch) there is nothing
    /// to isolate: errors propagate to the caller.
    pub async fn send_approval_confirmation(
        &self,
        request: &BloodRequest,
    ) -> Result<serde_json::Value> {
        let body = compose(MessageKind::RequesterConfirmation, request);
        let phone = normalize_phone(&request.phone)?;

        info!("Sending approval confirmation to {}", phone);
        let response = self.gateway.send_text(&phone, &body).await?;
        info!("Approval confirmation sent to requester");
        Ok(response)
    }

    async fn send_one(
        &self,
        recipient: &Recipient,
        body: &str,
    ) -> Result<(String, serde_json::Value)> {
        let phone = normalize_phone(&recipient.phone)?;
        let response = self.gateway.send_text(&phone, body).await?;
        Ok((phone, response))
    }
}

//! Bulk Notification Dispatch Engine
//!
//! Turns a list of recipients and a blood-request event into a sequence of
//! WhatsApp gateway calls: each send isolated from the others' failures,
//! rate-limited between calls, and aggregated into a per-recipient
//! [`DispatchReport`].
//!
//! # Design
//!
//! - One unreachable or malformed recipient never aborts delivery to the
//!   rest; its failure is recorded in the report instead.
//! - Recipients are processed strictly in input order, one at a time, with
//!   a configurable delay between gateway calls.
//! - The engine carries no cross-call state: every dispatch call composes,
//!   sends and reports from scratch.
//! - The gateway sits behind the [`MessageGateway`] trait, so tests run
//!   against [`testing::MockGateway`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notifier::{BawaGateway, NotificationService};
//!
//! let client = bawa::BawaClient::from_env()?;
//! let service = NotificationService::new(Arc::new(BawaGateway::new(client)));
//!
//! let report = service.notify_eligible_donors(&donors, &request).await;
//! tracing::info!(
//!     "{}/{} donors notified",
//!     report.success_count(),
//!     report.total_count()
//! );
//! ```
//!
//! # Modules
//!
//! - [`dispatch`] - The dispatch loop, config, outcomes and report
//! - [`message`] - Somali message templates and display-label tables
//! - [`phone`] - Contact number canonicalization
//! - [`gateway`] - Gateway trait seam and the Bawa-backed implementation
//! - [`testing`] - Mock gateway for tests

pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod message;
pub mod phone;
pub mod testing;
pub mod types;

pub use dispatch::{DispatchConfig, DispatchOutcome, DispatchReport, NotificationService};
pub use error::{NotifyError, Result};
pub use gateway::{BawaGateway, MessageGateway};
pub use message::{blood_type_label, compose, urgency_label};
pub use phone::normalize_phone;
pub use types::{BloodRequest, MessageKind, Recipient, RecipientRole, RequestEvent};

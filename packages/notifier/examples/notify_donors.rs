//! Donor notification walkthrough
//!
//! Sends a donor alert for a sample approved blood request to two sample
//! donors through the real Bawa gateway, then prints the per-recipient
//! report. Needs live credentials:
//!
//! ```bash
//! BAWA_TOKEN=... BAWA_INSTANCE_ID=... cargo run --example notify_donors
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use notifier::{
    BawaGateway, BloodRequest, NotificationService, Recipient, RecipientRole, RequestEvent,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = bawa::BawaClient::from_env()?;
    let service = NotificationService::new(Arc::new(BawaGateway::new(client)));

    let request = BloodRequest {
        full_name: "Amina Hassan".to_string(),
        gender: Some("female".to_string()),
        phone: "0615551234".to_string(),
        hospital: "Banadir Hospital".to_string(),
        location: "Hodan, Muqdisho".to_string(),
        blood_type: "O_NEGATIVE".to_string(),
        urgency: "HIGH".to_string(),
        age: 34,
        created_at: Utc::now(),
        event: RequestEvent::Approved,
    };

    let donors = vec![
        Recipient {
            id: Uuid::new_v4(),
            display_name: "Ayaan Warsame".to_string(),
            phone: "0612345678".to_string(),
            role: RecipientRole::Donor,
            blood_type: Some("O_NEGATIVE".to_string()),
            location: Some("Hodan, Muqdisho".to_string()),
        },
        Recipient {
            id: Uuid::new_v4(),
            display_name: "Bashir Cali".to_string(),
            phone: "612333444".to_string(),
            role: RecipientRole::Donor,
            blood_type: Some("O_NEGATIVE".to_string()),
            location: Some("Wadajir, Muqdisho".to_string()),
        },
    ];

    let report = service.notify_eligible_donors(&donors, &request).await;

    println!(
        "{}/{} donors notified",
        report.success_count(),
        report.total_count()
    );
    for outcome in &report.outcomes {
        match &outcome.error {
            None => println!("  ok   {} ({})", outcome.display_name, outcome.phone),
            Some(err) => println!("  FAIL {} ({}): {err}", outcome.display_name, outcome.phone),
        }
    }

    Ok(())
}

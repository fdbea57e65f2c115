use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Local};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod page;

use analytics_cell::TracingEventTracker;
use booking_form_cell::{
    BookingRequest, BookingSubmissionService, FormSnapshot, SuccessBanner, FIELD_DEPARTMENT,
    FIELD_GENDER, FIELD_PATIENT_AGE, FIELD_PATIENT_NAME, FIELD_PREFERRED_DATE, FIELD_SYMPTOMS,
};
use shared_config::AppConfig;
use theme_cell::{FilePreferenceStore, ThemeService};

use page::{ConsoleBanner, ConsoleButton, ConsoleDocumentRoot, ConsoleForm, ConsoleViewport};

/// Runs the booking page behavior against console collaborators: theme init
/// and toggle, one rejected submission, one successful submission, then the
/// banner's auto-dismiss.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting booking page simulator");

    let config = AppConfig::from_env();

    // Theme: load the persisted flag, then flip it once.
    let theme = ThemeService::new(
        Arc::new(FilePreferenceStore::new(&config.theme_preference_path)),
        Arc::new(ConsoleDocumentRoot),
    );
    let current = theme.init()?;
    info!("Theme initialized to {} (icon {:?})", current, theme.icon());
    theme.toggle()?;

    // Booking form wiring.
    let button = Arc::new(ConsoleButton::new("Book Appointment"));
    let banner = Arc::new(SuccessBanner::new(
        Arc::new(ConsoleBanner),
        config.banner_auto_dismiss(),
    ));
    let controller = BookingSubmissionService::new(
        &config,
        button,
        Arc::clone(&banner),
        Arc::new(ConsoleViewport),
        Arc::new(ConsoleForm),
    )
    .with_tracker(Arc::new(TracingEventTracker::from_config(&config)));

    // An incomplete form is rejected synchronously.
    let incomplete = BookingRequest::from_snapshot(
        &FormSnapshot::new()
            .with(FIELD_PATIENT_NAME, "Jane Doe")
            .with(FIELD_PATIENT_AGE, "130"),
    );
    if let Err(e) = controller.submit(&incomplete).await {
        info!("Rejected submission: {}", e);
    }

    // A complete form runs the full simulated booking.
    let tomorrow = Local::now().date_naive() + ChronoDuration::days(1);
    let complete = BookingRequest::from_snapshot(
        &FormSnapshot::new()
            .with(FIELD_PATIENT_NAME, "Jane Doe")
            .with(FIELD_PATIENT_AGE, "30")
            .with(FIELD_GENDER, "F")
            .with(FIELD_DEPARTMENT, "Cardiology")
            .with(FIELD_PREFERRED_DATE, &tomorrow.format("%Y-%m-%d").to_string())
            .with(FIELD_SYMPTOMS, "Occasional chest pain"),
    );
    controller.submit(&complete).await?;
    info!("Submission state: {}", controller.state());

    // Let the banner dismiss itself before tearing down.
    tokio::time::sleep(config.banner_auto_dismiss() + Duration::from_millis(100)).await;
    info!("Submission state: {}", controller.state());

    controller.shutdown();
    info!("Booking page simulator finished");
    Ok(())
}

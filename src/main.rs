mod config;
mod data;
mod error;
mod gateway;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::{
    config::Config,
    error::AppError,
    gateway::{sendgrid::SendGridGateway, twilio::TwilioGateway},
    service::retry::CallRetryService,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http = startup::setup_http_client()?;

    let telephony = Arc::new(TwilioGateway::new(&config, http.clone()));
    let email = Arc::new(SendGridGateway::new(&config, http));
    let state = Arc::new(AppState::new(db, telephony, email, &config));

    info!("Starting call delivery worker");

    let mut slots = scheduler::call_attempts::start_scheduler(state.clone()).await?;

    // Slot registrations are in-process; re-drive orders that were still
    // awaiting delivery when the last process exited.
    {
        let retry = CallRetryService::from_state(&state, &slots);
        let restored = retry.reschedule_pending(Utc::now()).await?;
        info!(restored, "Re-registered call slots after startup");
    }

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {e}")))?;

    info!("Shutting down");
    slots.shutdown().await?;

    Ok(())
}

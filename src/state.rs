use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::{Config, RetryPolicy},
    gateway::{EmailGateway, TelephonyGateway},
};

/// Shared worker state handed to scheduled jobs.
///
/// Gateways are trait objects so scheduled jobs stay provider-agnostic;
/// the concrete clients are chosen once in `main`.
pub struct AppState {
    pub db: DatabaseConnection,
    pub telephony: Arc<dyn TelephonyGateway>,
    pub email: Arc<dyn EmailGateway>,
    pub policy: RetryPolicy,
    pub app_url: String,
    pub support_email: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        telephony: Arc<dyn TelephonyGateway>,
        email: Arc<dyn EmailGateway>,
        config: &Config,
    ) -> Self {
        Self {
            db,
            telephony,
            email,
            policy: config.retry.clone(),
            app_url: config.app_url.clone(),
            support_email: config.support_email.clone(),
        }
    }
}

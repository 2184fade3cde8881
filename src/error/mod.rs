//! Error types for the call delivery worker.
//!
//! `AppError` is the top-level error type aggregating configuration,
//! database, scheduler, and gateway transport errors. Most variants use
//! `#[from]` for automatic conversion at the `?` boundary.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Gateway transport errors (`ReqwestErr`) are expected during normal
/// operation and are caught and logged by the retry service; database and
/// scheduler errors propagate and fail the invocation that hit them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest (telephony/email gateways).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error while registering or running one-shot jobs.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

//! Wall-clock scheduling of deferred call attempts.
//!
//! The retry service registers attempt invocations through the
//! `SlotScheduler` trait; the production implementation backs them with
//! in-process one-shot jobs. Registrations do not survive a restart, which
//! is why startup runs a recovery pass over orders still awaiting delivery.

pub mod call_attempts;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Registers a deferred invocation of the attempt executor for an order at
/// a wall-clock time.
#[async_trait]
pub trait SlotScheduler: Send + Sync {
    async fn schedule_at(&self, at: DateTime<Utc>, order_id: i32) -> Result<(), AppError>;
}

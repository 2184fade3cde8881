//! Recording scheduler double for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::scheduler::SlotScheduler;

/// Records every registered slot instead of deferring anything; tests
/// drive the executor by hand at the recorded times.
pub struct RecordingSlotScheduler {
    slots: Mutex<Vec<(DateTime<Utc>, i32)>>,
}

impl RecordingSlotScheduler {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
        }
    }

    /// All slots registered so far, in registration order.
    pub fn scheduled(&self) -> Vec<(DateTime<Utc>, i32)> {
        self.slots.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlotScheduler for RecordingSlotScheduler {
    async fn schedule_at(&self, at: DateTime<Utc>, order_id: i32) -> Result<(), AppError> {
        self.slots.lock().unwrap().push((at, order_id));
        Ok(())
    }
}

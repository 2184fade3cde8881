use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{
    error::AppError, scheduler::SlotScheduler, service::retry::CallRetryService, state::AppState,
};

/// Starts the job scheduler that backs call attempt slots.
///
/// # Arguments
/// - `state`: Shared worker state handed to every fired job
///
/// # Returns
/// A handle used both to register slots (via `SlotScheduler`) and to shut
/// the scheduler down on exit.
pub async fn start_scheduler(state: Arc<AppState>) -> Result<CallAttemptScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    scheduler.start().await?;

    info!("Call attempt scheduler started");

    Ok(CallAttemptScheduler { scheduler, state })
}

/// Registers one-shot jobs that run the attempt executor at a wall-clock
/// time. Each fired job builds a fresh `CallRetryService` from the shared
/// state and hands itself back in, so a failed attempt can register its
/// own follow-up slot.
#[derive(Clone)]
pub struct CallAttemptScheduler {
    scheduler: JobScheduler,
    state: Arc<AppState>,
}

impl CallAttemptScheduler {
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

#[async_trait]
impl SlotScheduler for CallAttemptScheduler {
    async fn schedule_at(&self, at: DateTime<Utc>, order_id: i32) -> Result<(), AppError> {
        // Slots are computed strictly in the future; a slot that slipped
        // into the past while being registered fires immediately.
        let delay = (at - Utc::now())
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);

        let state = self.state.clone();
        let chain = self.clone();

        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let state = state.clone();
            let chain = chain.clone();

            Box::pin(async move {
                let service = CallRetryService::from_state(&state, &chain);
                if let Err(e) = service.execute_attempt(order_id).await {
                    error!(order_id, error = %e, "Call attempt invocation failed");
                }
            })
        })?;

        self.scheduler.add(job).await?;

        Ok(())
    }
}

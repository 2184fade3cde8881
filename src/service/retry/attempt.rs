//! The attempt executor: one invocation per fired call slot.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use entity::call_attempt::CallStatus;
use entity::order::OrderStatus;

use crate::{
    data::{call_attempt::CallAttemptRepository, order::OrderRepository},
    error::AppError,
    gateway::CallPlacement,
    model::{call_attempt::CreateCallAttemptParams, order::AttemptUpdate},
};

use super::CallRetryService;

impl<'a> CallRetryService<'a> {
    /// Executes one retry attempt for an order at the current time.
    pub async fn execute_attempt(&self, order_id: i32) -> Result<(), AppError> {
        self.execute_attempt_at(order_id, Utc::now()).await
    }

    /// Executes one retry attempt against an explicit reference time.
    ///
    /// Every invocation re-reads the order and re-checks the terminal
    /// conditions before acting, so duplicate or late slot firings are
    /// safe no-ops. Gateway failures drive continuation (the next slot is
    /// registered); only database and scheduler errors propagate.
    pub async fn execute_attempt_at(
        &self,
        order_id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(order) = repo.get_by_id(order_id).await? else {
            warn!(order_id, "Order not found for retry");
            return Ok(());
        };

        let max_attempts = self.policy.max_attempts();

        if order.call_attempts >= max_attempts {
            info!(
                order_id,
                attempts = order.call_attempts,
                "Order has reached maximum retry attempts"
            );
            return self.fail_exhausted(order_id, now).await;
        }

        if !order.is_awaiting_delivery() {
            info!(
                order_id,
                status = ?order.status,
                "Order no longer awaits delivery, skipping retry"
            );
            return Ok(());
        }

        // The first attempt anchors the retry window.
        let first_attempt = order.first_call_attempt_date.unwrap_or(now);

        let days_since_first = (now - first_attempt).num_days();
        if days_since_first >= self.policy.max_days as i64 {
            info!(order_id, days_since_first, "Order exceeded the retry window");
            return self.fail_exhausted(order_id, now).await;
        }

        let retry_day = days_since_first as i32;
        let daily_attempts = if retry_day == order.retry_day {
            order.daily_attempts + 1
        } else {
            1
        };

        info!(
            order_id,
            attempt = order.call_attempts + 1,
            max_attempts,
            day = retry_day + 1,
            daily_attempt = daily_attempts,
            "Executing call attempt"
        );

        let placement = match self
            .telephony
            .place_call(&order.recipient_phone_number, &order.message, order.id)
            .await
        {
            Ok(placement) => placement,
            Err(e) => {
                warn!(order_id, error = %e, "Telephony gateway error while placing call");
                CallPlacement::failed()
            }
        };

        let update = AttemptUpdate {
            call_attempts: order.call_attempts + 1,
            daily_attempts,
            retry_day,
            first_call_attempt_date: first_attempt,
            last_call_attempt_at: now,
            status: if placement.ok {
                OrderStatus::InProgress
            } else {
                order.status
            },
        };

        let recorded = repo
            .record_attempt(order.id, order.call_attempts, update)
            .await?;
        if !recorded {
            info!(
                order_id,
                "Attempt already recorded by a concurrent invocation, skipping"
            );
            return Ok(());
        }

        CallAttemptRepository::new(self.db)
            .create(CreateCallAttemptParams {
                order_id: order.id,
                attempt_number: order.call_attempts + 1,
                attempted_at: now,
                status: if placement.ok {
                    CallStatus::InProgress
                } else {
                    CallStatus::Failed
                },
                call_ref: placement.call_ref.clone(),
            })
            .await?;

        if placement.ok {
            // The call is ringing; completion arrives through the
            // provider's status and recording callbacks.
            info!(
                order_id,
                call_ref = placement.call_ref.as_deref().unwrap_or_default(),
                attempt = order.call_attempts + 1,
                "Call initiated"
            );
            return Ok(());
        }

        warn!(
            order_id,
            attempt = order.call_attempts + 1,
            max_attempts,
            "Call attempt failed"
        );

        if order.call_attempts + 1 < max_attempts {
            let next = self.next_slot(now)?;
            self.scheduler.schedule_at(next, order.id).await?;
            info!(order_id, next = %next, "Next retry scheduled");
            return Ok(());
        }

        // That failure was the last allowed attempt; resolve now instead
        // of waiting for a later slot to notice.
        self.fail_exhausted(order_id, now).await
    }

    /// Transitions an exhausted order to Failed and runs the fallback
    /// sequence. The transition is conditional on the order still awaiting
    /// delivery, so under duplicate slot firings only one invocation runs
    /// the sequence.
    async fn fail_exhausted(&self, order_id: i32, now: DateTime<Utc>) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        if !repo.mark_failed_if_active(order_id, now).await? {
            info!(order_id, "Order already resolved, fallback skipped");
            return Ok(());
        }

        let Some(order) = repo.get_by_id(order_id).await? else {
            warn!(order_id, "Order disappeared before fallback handling");
            return Ok(());
        };

        self.run_fallback_sequence(&order, now).await
    }
}

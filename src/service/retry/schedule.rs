//! Slot computation and registration.
//!
//! Call slots form a fixed grid: `call_hours` each day for `max_days`
//! days, counted from the order's creation day on the process reference
//! clock. Initial scheduling registers every future slot at once; the
//! next-slot variant registers a single follow-up after a failed attempt.

use chrono::{DateTime, Days, NaiveDate, Utc};
use tracing::info;

use crate::{data::order::OrderRepository, error::AppError};

use super::CallRetryService;

impl<'a> CallRetryService<'a> {
    /// Registers all future call slots for an order (called when the order
    /// is created).
    ///
    /// Slots already in the past are skipped, so an order created after the
    /// last hour of day 0 simply starts with fewer registrations; no
    /// catch-up attempts are scheduled.
    ///
    /// # Arguments
    /// - `order_id`: Order to schedule
    /// - `now`: Reference time; day 0 is this day
    ///
    /// # Returns
    /// - `Ok(count)`: Number of slots registered
    /// - `Err(AppError)`: Scheduler registration error
    pub async fn schedule_all(&self, order_id: i32, now: DateTime<Utc>) -> Result<u32, AppError> {
        let today = now.date_naive();
        let total = self.policy.max_attempts();
        let mut registered = 0;

        for day in 0..self.policy.max_days {
            let date = add_days(today, day as u64)?;

            for (index, &hour) in self.policy.call_hours.iter().enumerate() {
                let slot = slot_on(date, hour)?;

                if slot > now {
                    self.scheduler.schedule_at(slot, order_id).await?;
                    registered += 1;

                    info!(
                        order_id,
                        slot = %slot,
                        "Scheduled retry {}/{} (day {}/{}, time {}/{})",
                        day * self.policy.calls_per_day + index as u32 + 1,
                        total,
                        day + 1,
                        self.policy.max_days,
                        index + 1,
                        self.policy.calls_per_day
                    );
                }
            }
        }

        Ok(registered)
    }

    /// Finds the next call slot strictly after `now`: the first remaining
    /// hour today, or the first hour tomorrow when none remain.
    pub fn next_slot(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
        let today = now.date_naive();

        for &hour in &self.policy.call_hours {
            let slot = slot_on(today, hour)?;
            if slot > now {
                return Ok(slot);
            }
        }

        let first_hour = self
            .policy
            .call_hours
            .first()
            .copied()
            .ok_or_else(|| AppError::InternalError("Retry policy has no call hours".to_string()))?;

        slot_on(add_days(today, 1)?, first_hour)
    }

    /// Re-registers the next slot for every order still awaiting delivery.
    ///
    /// One-shot slot registrations live in process memory and are lost on
    /// restart; this runs once at startup so no live order is left without
    /// a pending invocation. Orders whose window already expired get one
    /// slot too - the fired executor resolves them through the exhaustion
    /// path.
    pub async fn reschedule_pending(&self, now: DateTime<Utc>) -> Result<u32, AppError> {
        let orders = OrderRepository::new(self.db).get_awaiting_delivery().await?;
        let mut registered = 0;

        for order in orders {
            let slot = self.next_slot(now)?;
            self.scheduler.schedule_at(slot, order.id).await?;
            registered += 1;

            info!(order_id = order.id, slot = %slot, "Re-registered retry slot after restart");
        }

        Ok(registered)
    }
}

fn slot_on(date: NaiveDate, hour: u32) -> Result<DateTime<Utc>, AppError> {
    date.and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::InternalError(format!("Invalid call hour: {hour}")))
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, AppError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::InternalError("Date out of range".to_string()))
}

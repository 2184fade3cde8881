use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use entity::call_attempt::CallStatus;

use crate::{
    data::{call_attempt::CallAttemptRepository, order::OrderRepository},
    error::AppError,
    model::{
        call_attempt::call_status_from_provider,
        order::{CreateOrderParams, Order},
    },
    service::retry::CallRetryService,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending order and registers its call slots.
    ///
    /// # Arguments
    /// - `params`: Order creation data
    /// - `retry`: Retry service used to register the initial slot grid
    /// - `now`: Reference time anchoring day 0 of the slot grid
    ///
    /// # Returns
    /// - `Ok(Order)`: The created order
    /// - `Err(AppError)`: Database or scheduler error
    pub async fn create(
        &self,
        params: CreateOrderParams,
        retry: &CallRetryService<'_>,
        now: DateTime<Utc>,
    ) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db).create(params).await?;
        let registered = retry.schedule_all(order.id, now).await?;

        info!(
            order_id = order.id,
            registered, "Order created and call slots registered"
        );

        Ok(order)
    }

    /// Applies a provider status callback to the matching call attempt.
    ///
    /// An in-progress status means the recipient answered; the order is
    /// marked connected, and completion is finalized later by the
    /// recording callback.
    pub async fn record_call_status(
        &self,
        call_ref: &str,
        provider_status: &str,
        duration_seconds: Option<i32>,
    ) -> Result<(), AppError> {
        let attempts = CallAttemptRepository::new(self.db);

        let Some(attempt) = attempts.find_by_call_ref(call_ref).await? else {
            warn!(call_ref, "No call attempt found for status callback");
            return Ok(());
        };

        let status = call_status_from_provider(provider_status);
        attempts
            .set_status(attempt.id, status, duration_seconds)
            .await?;

        if status == CallStatus::InProgress {
            OrderRepository::new(self.db)
                .mark_call_connected(attempt.order_id)
                .await?;
        }

        info!(
            call_ref,
            order_id = attempt.order_id,
            ?status,
            "Call status updated"
        );

        Ok(())
    }

    /// Stores a finished call recording and completes the order.
    pub async fn complete_with_recording(
        &self,
        call_ref: &str,
        recording_url: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let attempts = CallAttemptRepository::new(self.db);

        let Some(attempt) = attempts.find_by_call_ref(call_ref).await? else {
            warn!(call_ref, "No call attempt found for recording callback");
            return Ok(());
        };

        attempts.set_recording(attempt.id, recording_url).await?;
        OrderRepository::new(self.db)
            .complete_with_recording(attempt.order_id, recording_url, now)
            .await?;

        info!(order_id = attempt.order_id, "Order completed with recording");

        Ok(())
    }
}

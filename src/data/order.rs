use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::order::{Column, OrderStatus};
use entity::payment::PaymentStatus;

use crate::model::order::{AttemptUpdate, CreateOrderParams, Order};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending order.
    ///
    /// # Returns
    /// - `Ok(Order)`: The created order
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            buyer_id: ActiveValue::Set(params.buyer_id),
            recipient_phone_number: ActiveValue::Set(params.recipient_phone_number),
            recipient_name: ActiveValue::Set(params.recipient_name),
            recipient_email: ActiveValue::Set(params.recipient_email),
            message: ActiveValue::Set(params.message),
            is_anonymous: ActiveValue::Set(params.is_anonymous),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(OrderStatus::Pending),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            call_attempts: ActiveValue::Set(0),
            retry_day: ActiveValue::Set(0),
            daily_attempts: ActiveValue::Set(0),
            fallback_sms_sent: ActiveValue::Set(false),
            fallback_email_sent: ActiveValue::Set(false),
            call_connected: ActiveValue::Set(false),
            preferred_call_time: ActiveValue::Set(params.preferred_call_time),
            recipient_timezone: ActiveValue::Set(params.recipient_timezone),
            recipient_state: ActiveValue::Set(params.recipient_state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(order))
    }

    /// Gets an order by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Order))`: The order
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let order = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        Ok(order.map(Order::from_entity))
    }

    /// Gets all orders still waiting on phone delivery (status Pending or
    /// InProgress), ordered by creation time. Used by startup recovery to
    /// re-register lost call slots.
    pub async fn get_awaiting_delivery(&self) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .filter(Column::Status.is_in([OrderStatus::Pending, OrderStatus::InProgress]))
            .order_by_asc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }

    /// Records one executed call attempt as a single conditional update.
    ///
    /// The update only applies while the order still holds the pre-read
    /// attempt count and an awaiting-delivery status; a concurrent
    /// invocation that already recorded an attempt (or an external status
    /// change) makes this a no-op.
    ///
    /// # Arguments
    /// - `order_id`: Order to update
    /// - `expected_attempts`: The `call_attempts` value read before the call
    /// - `update`: Counter, window, and status values to write
    ///
    /// # Returns
    /// - `Ok(true)`: The attempt was recorded
    /// - `Ok(false)`: Another invocation won the race, nothing was written
    /// - `Err(DbErr)`: Database error
    pub async fn record_attempt(
        &self,
        order_id: i32,
        expected_attempts: i32,
        update: AttemptUpdate,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(Column::CallAttempts, Expr::value(update.call_attempts))
            .col_expr(Column::DailyAttempts, Expr::value(update.daily_attempts))
            .col_expr(Column::RetryDay, Expr::value(update.retry_day))
            .col_expr(
                Column::FirstCallAttemptDate,
                Expr::value(update.first_call_attempt_date),
            )
            .col_expr(
                Column::LastCallAttemptAt,
                Expr::value(update.last_call_attempt_at),
            )
            .col_expr(Column::Status, Expr::value(update.status))
            .col_expr(Column::UpdatedAt, Expr::value(update.last_call_attempt_at))
            .filter(Column::Id.eq(order_id))
            .filter(Column::CallAttempts.eq(expected_attempts))
            .filter(Column::Status.is_in([OrderStatus::Pending, OrderStatus::InProgress]))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Transitions an order to Failed if it is still awaiting delivery.
    ///
    /// This is the exhaustion gate: only the invocation whose update
    /// applies runs the fallback sequence, so the sequence runs at most
    /// once per order even under duplicate slot firings.
    ///
    /// # Returns
    /// - `Ok(true)`: This caller performed the transition
    /// - `Ok(false)`: The order was already resolved or failed
    /// - `Err(DbErr)`: Database error
    pub async fn mark_failed_if_active(
        &self,
        order_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(Column::Status, Expr::value(OrderStatus::Failed))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(order_id))
            .filter(Column::Status.is_in([OrderStatus::Pending, OrderStatus::InProgress]))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the recipient SMS fallback as delivered.
    pub async fn set_fallback_sms_sent(&self, order_id: i32) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(Column::FallbackSmsSent, Expr::value(true))
            .filter(Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the recipient email fallback as delivered.
    pub async fn set_fallback_email_sent(&self, order_id: i32) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(Column::FallbackEmailSent, Expr::value(true))
            .filter(Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records the refund on the order after the payment row was flipped.
    pub async fn set_payment_refunded(
        &self,
        order_id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(Column::PaymentStatus, Expr::value(PaymentStatus::Refunded))
            .col_expr(Column::Status, Expr::value(OrderStatus::Failed))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks that a placed call was answered. Set from the provider's
    /// status callback, not from the attempt executor.
    pub async fn mark_call_connected(&self, order_id: i32) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(Column::CallConnected, Expr::value(true))
            .filter(Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Completes an order once the call recording arrives.
    pub async fn complete_with_recording(
        &self,
        order_id: i32,
        recording_url: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(
                Column::CallRecordingUrl,
                Expr::value(recording_url.to_string()),
            )
            .col_expr(Column::Status, Expr::value(OrderStatus::Completed))
            .col_expr(Column::CompletedAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

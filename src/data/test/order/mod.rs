use crate::data::order::OrderRepository;
use crate::model::order::{AttemptUpdate, CreateOrderParams};
use chrono::Utc;
use entity::order::OrderStatus;
use entity::payment::PaymentStatus;
use sea_orm::{sea_query::Expr, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod complete_with_recording;
mod get_by_id;
mod mark_failed_if_active;
mod record_attempt;
mod set_fallback_flags;
mod set_payment_refunded;

/// Sets an order's status directly, simulating an external transition
/// (manual assignment, cancellation, completion).
async fn set_status(
    db: &sea_orm::DatabaseConnection,
    order_id: i32,
    status: OrderStatus,
) -> Result<(), DbErr> {
    entity::prelude::Order::update_many()
        .col_expr(entity::order::Column::Status, Expr::value(status))
        .filter(entity::order::Column::Id.eq(order_id))
        .exec(db)
        .await?;

    Ok(())
}

fn sample_params(buyer_id: i32) -> CreateOrderParams {
    CreateOrderParams {
        buyer_id,
        recipient_phone_number: "+5215512345678".to_string(),
        recipient_name: "Ana".to_string(),
        recipient_email: Some("ana@example.com".to_string()),
        message: "Congratulations on the new job".to_string(),
        is_anonymous: false,
        price: 349.0,
        preferred_call_time: None,
        recipient_timezone: Some("America/Mexico_City".to_string()),
        recipient_state: None,
    }
}

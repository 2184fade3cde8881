use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::payment::PaymentStatus;

use crate::factory::helpers::next_id;

/// Creates a completed payment for an order, ready to be refunded.
pub async fn create_completed_payment(
    db: &DatabaseConnection,
    order_id: i32,
    buyer_id: i32,
    amount: f64,
) -> Result<entity::payment::Model, DbErr> {
    create_payment(db, order_id, buyer_id, amount, PaymentStatus::Completed).await
}

/// Creates a payment in an arbitrary status.
pub async fn create_payment(
    db: &DatabaseConnection,
    order_id: i32,
    buyer_id: i32,
    amount: f64,
    status: PaymentStatus,
) -> Result<entity::payment::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::payment::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        buyer_id: ActiveValue::Set(buyer_id),
        amount: ActiveValue::Set(amount),
        payment_method: ActiveValue::Set("mercadopago".to_string()),
        external_payment_id: ActiveValue::Set(format!("MP-{id:08}")),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::order::OrderStatus;
use entity::payment::PaymentStatus;

use crate::factory::helpers::next_id;

/// Creates a pending order with a recipient email on file.
pub async fn create_order(
    db: &DatabaseConnection,
    buyer_id: i32,
) -> Result<entity::order::Model, DbErr> {
    let id = next_id();

    base_order(buyer_id, id, Some(format!("recipient{id}@example.com")))
        .insert(db)
        .await
}

/// Creates a pending order whose recipient has no email address, so the
/// email fallback step has nothing to send to.
pub async fn create_order_without_email(
    db: &DatabaseConnection,
    buyer_id: i32,
) -> Result<entity::order::Model, DbErr> {
    let id = next_id();

    base_order(buyer_id, id, None).insert(db).await
}

fn base_order(buyer_id: i32, id: u64, recipient_email: Option<String>) -> entity::order::ActiveModel {
    let now = Utc::now();

    entity::order::ActiveModel {
        buyer_id: ActiveValue::Set(buyer_id),
        recipient_phone_number: ActiveValue::Set(format!("+52155000{id:05}")),
        recipient_name: ActiveValue::Set(format!("Recipient {id}")),
        recipient_email: ActiveValue::Set(recipient_email),
        message: ActiveValue::Set("You have something to hear".to_string()),
        is_anonymous: ActiveValue::Set(false),
        price: ActiveValue::Set(499.0),
        status: ActiveValue::Set(OrderStatus::Pending),
        payment_status: ActiveValue::Set(PaymentStatus::Completed),
        call_attempts: ActiveValue::Set(0),
        retry_day: ActiveValue::Set(0),
        daily_attempts: ActiveValue::Set(0),
        fallback_sms_sent: ActiveValue::Set(false),
        fallback_email_sent: ActiveValue::Set(false),
        call_connected: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

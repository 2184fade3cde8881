//! Domain models for payment data operations.

use chrono::{DateTime, Utc};
use entity::payment::PaymentStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub buyer_id: i32,
    pub amount: f64,
    pub payment_method: String,
    pub external_payment_id: String,
    pub status: PaymentStatus,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            buyer_id: entity.buyer_id,
            amount: entity.amount,
            payment_method: entity.payment_method,
            external_payment_id: entity.external_payment_id,
            status: entity.status,
            failure_reason: entity.failure_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

use sea_orm::entity::prelude::*;

use super::payment::PaymentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub buyer_id: i32,
    pub messenger_id: Option<i32>,
    pub recipient_phone_number: String,
    pub recipient_name: String,
    pub recipient_email: Option<String>,
    pub message: String,
    pub is_anonymous: bool,
    pub price: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub call_attempts: i32,
    pub retry_day: i32,
    pub daily_attempts: i32,
    pub first_call_attempt_date: Option<DateTimeUtc>,
    pub last_call_attempt_at: Option<DateTimeUtc>,
    pub fallback_sms_sent: bool,
    pub fallback_email_sent: bool,
    pub call_connected: bool,
    pub call_recording_url: Option<String>,
    pub preferred_call_time: Option<String>,
    pub recipient_timezone: Option<String>,
    pub recipient_state: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "assigned")]
    Assigned,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BuyerId",
        to = "super::user::Column::Id"
    )]
    Buyer,
    #[sea_orm(has_many = "super::call_attempt::Entity")]
    CallAttempt,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buyer.def()
    }
}

impl Related<super::call_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CallAttempt.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

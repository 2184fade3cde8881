//! Domain models for order data operations.

use chrono::{DateTime, Utc};
use entity::{order::OrderStatus, payment::PaymentStatus};

/// A purchased request to deliver a personalized message to a recipient by
/// phone, together with its retry-window bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub buyer_id: i32,
    /// Messenger assigned to deliver the message manually, if any.
    pub messenger_id: Option<i32>,
    pub recipient_phone_number: String,
    pub recipient_name: String,
    /// Optional address for the email fallback; absent means the email
    /// fallback step is skipped.
    pub recipient_email: Option<String>,
    /// The message text read to the recipient on the call.
    pub message: String,
    pub is_anonymous: bool,
    /// Amount refunded to the buyer if delivery fails.
    pub price: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Outbound call attempts made so far, capped at the policy maximum.
    pub call_attempts: i32,
    /// Day index within the retry window (0-based).
    pub retry_day: i32,
    /// Attempts made on the current retry day.
    pub daily_attempts: i32,
    /// Set on the first attempt; anchors the retry window.
    pub first_call_attempt_date: Option<DateTime<Utc>>,
    pub last_call_attempt_at: Option<DateTime<Utc>>,
    pub fallback_sms_sent: bool,
    pub fallback_email_sent: bool,
    pub call_connected: bool,
    pub call_recording_url: Option<String>,
    /// Recipient locale hints captured at checkout. Stored for reference;
    /// slot computation runs on the process reference clock.
    pub preferred_call_time: Option<String>,
    pub recipient_timezone: Option<String>,
    pub recipient_state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            buyer_id: entity.buyer_id,
            messenger_id: entity.messenger_id,
            recipient_phone_number: entity.recipient_phone_number,
            recipient_name: entity.recipient_name,
            recipient_email: entity.recipient_email,
            message: entity.message,
            is_anonymous: entity.is_anonymous,
            price: entity.price,
            status: entity.status,
            payment_status: entity.payment_status,
            call_attempts: entity.call_attempts,
            retry_day: entity.retry_day,
            daily_attempts: entity.daily_attempts,
            first_call_attempt_date: entity.first_call_attempt_date,
            last_call_attempt_at: entity.last_call_attempt_at,
            fallback_sms_sent: entity.fallback_sms_sent,
            fallback_email_sent: entity.fallback_email_sent,
            call_connected: entity.call_connected,
            call_recording_url: entity.call_recording_url,
            preferred_call_time: entity.preferred_call_time,
            recipient_timezone: entity.recipient_timezone,
            recipient_state: entity.recipient_state,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            completed_at: entity.completed_at,
        }
    }

    /// Whether the order is still waiting on phone delivery. Orders resolved
    /// by other means (assigned, completed, cancelled) are never retried.
    pub fn is_awaiting_delivery(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::InProgress)
    }
}

/// Parameters for creating a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub buyer_id: i32,
    pub recipient_phone_number: String,
    pub recipient_name: String,
    pub recipient_email: Option<String>,
    pub message: String,
    pub is_anonymous: bool,
    pub price: f64,
    pub preferred_call_time: Option<String>,
    pub recipient_timezone: Option<String>,
    pub recipient_state: Option<String>,
}

/// State written by the attempt executor after one call attempt.
///
/// Applied as a single conditional update guarded by the pre-read attempt
/// count, so two invocations racing on the same order record only one
/// attempt between them.
#[derive(Debug, Clone)]
pub struct AttemptUpdate {
    pub call_attempts: i32,
    pub daily_attempts: i32,
    pub retry_day: i32,
    pub first_call_attempt_date: DateTime<Utc>,
    pub last_call_attempt_at: DateTime<Utc>,
    pub status: OrderStatus,
}

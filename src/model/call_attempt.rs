//! Domain models for call attempt audit records.

use chrono::{DateTime, Utc};
use entity::call_attempt::CallStatus;

/// One outbound call placement toward an order's recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct CallAttempt {
    pub id: i32,
    pub order_id: i32,
    pub attempt_number: i32,
    pub attempted_at: DateTime<Utc>,
    pub status: CallStatus,
    /// Provider-side call identifier, when the gateway accepted the call.
    pub call_ref: Option<String>,
    pub duration_seconds: Option<i32>,
    pub recording_url: Option<String>,
}

impl CallAttempt {
    pub fn from_entity(entity: entity::call_attempt::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            attempt_number: entity.attempt_number,
            attempted_at: entity.attempted_at,
            status: entity.status,
            call_ref: entity.call_ref,
            duration_seconds: entity.duration_seconds,
            recording_url: entity.recording_url,
        }
    }
}

/// Parameters for recording a new call attempt.
#[derive(Debug, Clone)]
pub struct CreateCallAttemptParams {
    pub order_id: i32,
    pub attempt_number: i32,
    pub attempted_at: DateTime<Utc>,
    pub status: CallStatus,
    pub call_ref: Option<String>,
}

/// Maps a telephony provider status string onto the audit status enum.
/// Unknown strings land on `Queued`, matching how the provider reports
/// not-yet-dispatched calls.
pub fn call_status_from_provider(status: &str) -> CallStatus {
    match status {
        "ringing" => CallStatus::Ringing,
        "in-progress" => CallStatus::InProgress,
        "completed" => CallStatus::Completed,
        "failed" => CallStatus::Failed,
        "no-answer" => CallStatus::NoAnswer,
        "busy" => CallStatus::Busy,
        "canceled" => CallStatus::Cancelled,
        _ => CallStatus::Queued,
    }
}

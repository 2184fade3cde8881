//! Outbound delivery gateways.
//!
//! The worker talks to telephony and email providers through the traits in
//! this module; the retry service never sees a concrete provider. The
//! production implementations (`twilio`, `sendgrid`) are thin HTTP clients.
//! A provider that reports a failed call or rejected message is an expected
//! outcome and is surfaced in the return value, not as an error; `Err` is
//! reserved for transport faults, which callers treat the same way.

pub mod sendgrid;
pub mod twilio;


use async_trait::async_trait;

use crate::error::AppError;

/// Result of asking the telephony provider to place a call.
#[derive(Debug, Clone)]
pub struct CallPlacement {
    /// Whether the provider accepted the call for dialing.
    pub ok: bool,
    /// Provider-side call identifier, present when accepted.
    pub call_ref: Option<String>,
}

impl CallPlacement {
    pub fn failed() -> Self {
        Self {
            ok: false,
            call_ref: None,
        }
    }
}

/// Places outbound calls and sends SMS.
#[async_trait]
pub trait TelephonyGateway: Send + Sync {
    /// Places a call that reads `message` to `to_number`. The order id is
    /// passed through so the provider callback can be correlated.
    async fn place_call(
        &self,
        to_number: &str,
        message: &str,
        order_id: i32,
    ) -> Result<CallPlacement, AppError>;

    /// Sends a plain-text SMS. Returns whether the provider accepted it.
    async fn send_sms(&self, to_number: &str, body: &str) -> Result<bool, AppError>;
}

/// Sends transactional email.
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Sends an HTML email. Returns whether the provider accepted it.
    async fn send_email(&self, to: &str, subject: &str, html_body: &str)
        -> Result<bool, AppError>;
}

//! Call retry orchestration.
//!
//! Given an order awaiting delivery, attempt outbound contact on a fixed
//! daily schedule, track attempt counts, and on exhaustion run the
//! fallback sequence (recipient SMS/email, buyer notification, refund).
//!
//! The service is organized into separate modules by concern:
//! - `schedule` - slot computation and registration (initial and next-slot)
//! - `attempt` - the attempt executor, one invocation per fired slot
//! - `fallback` - the exhaustion fallback sequence
//!
//! Invocations are idempotent: every entry re-reads the order and
//! re-checks the terminal conditions, and state is written through
//! conditional updates, so at-least-once slot delivery is safe.

mod attempt;
mod fallback;
mod schedule;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::{
    config::RetryPolicy,
    gateway::{EmailGateway, TelephonyGateway},
    scheduler::SlotScheduler,
    state::AppState,
};

pub struct CallRetryService<'a> {
    db: &'a DatabaseConnection,
    telephony: &'a dyn TelephonyGateway,
    email: &'a dyn EmailGateway,
    scheduler: &'a dyn SlotScheduler,
    policy: &'a RetryPolicy,
    app_url: &'a str,
    support_email: &'a str,
}

impl<'a> CallRetryService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        telephony: &'a dyn TelephonyGateway,
        email: &'a dyn EmailGateway,
        scheduler: &'a dyn SlotScheduler,
        policy: &'a RetryPolicy,
        app_url: &'a str,
        support_email: &'a str,
    ) -> Self {
        Self {
            db,
            telephony,
            email,
            scheduler,
            policy,
            app_url,
            support_email,
        }
    }

    /// Builds the service from shared worker state, as fired jobs do. The
    /// scheduler is passed separately so a job can hand its own scheduler
    /// back in for follow-up registrations.
    pub fn from_state(state: &'a AppState, scheduler: &'a dyn SlotScheduler) -> Self {
        Self {
            db: &state.db,
            telephony: state.telephony.as_ref(),
            email: state.email.as_ref(),
            scheduler,
            policy: &state.policy,
            app_url: &state.app_url,
            support_email: &state.support_email,
        }
    }
}

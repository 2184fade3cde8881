//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations for each domain in the worker.
//! They use SeaORM entity models internally and return domain models to
//! keep the data layer separate from the business logic layer. Conditional
//! updates (attempt recording, the failed transition) go through
//! `update_many` with guard filters so concurrent invocations for the same
//! order serialize on the database row instead of an in-process lock.

pub mod call_attempt;
pub mod order;
pub mod payment;

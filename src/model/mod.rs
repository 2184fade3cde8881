//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data
//! layer boundary so the service layer never handles ActiveModels directly.

pub mod call_attempt;
pub mod order;
pub mod payment;

pub mod prelude;

pub mod call_attempt;
pub mod order;
pub mod payment;
pub mod user;

pub use super::call_attempt::Entity as CallAttempt;
pub use super::order::Entity as Order;
pub use super::payment::Entity as Payment;
pub use super::user::Entity as User;

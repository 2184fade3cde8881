//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a buyer and a pending order for them.
///
/// # Returns
/// - `Ok((buyer, order))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_buyer(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::order::Model), DbErr> {
    let buyer = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::create_order(db, buyer.id).await?;

    Ok((buyer, order))
}

/// Creates a buyer, a pending order, and a completed payment for it.
///
/// This is the usual starting state for retry tests: the order was paid
/// for and is waiting on phone delivery.
///
/// # Returns
/// - `Ok((buyer, order, payment))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_paid_order(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::order::Model,
        entity::payment::Model,
    ),
    DbErr,
> {
    let buyer = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::create_order(db, buyer.id).await?;
    let payment =
        crate::factory::payment::create_completed_payment(db, order.id, buyer.id, order.price)
            .await?;

    Ok((buyer, order, payment))
}

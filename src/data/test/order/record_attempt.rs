use super::*;

fn first_attempt_update(now: chrono::DateTime<Utc>) -> AttemptUpdate {
    AttemptUpdate {
        call_attempts: 1,
        daily_attempts: 1,
        retry_day: 0,
        first_call_attempt_date: now,
        last_call_attempt_at: now,
        status: OrderStatus::Pending,
    }
}

/// Tests recording the first attempt against a fresh order.
///
/// Expected: Ok(true) with counters and window anchors written
#[tokio::test]
async fn records_attempt_when_count_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
    let now = Utc::now();

    let repo = OrderRepository::new(db);
    let recorded = repo
        .record_attempt(order.id, 0, first_attempt_update(now))
        .await?;

    assert!(recorded);

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.call_attempts, 1);
    assert_eq!(updated.daily_attempts, 1);
    assert_eq!(updated.retry_day, 0);
    assert_eq!(
        updated.first_call_attempt_date.map(|t| t.timestamp()),
        Some(now.timestamp())
    );
    assert_eq!(
        updated.last_call_attempt_at.map(|t| t.timestamp()),
        Some(now.timestamp())
    );

    Ok(())
}

/// Tests that a stale pre-read attempt count makes the update a no-op.
///
/// A concurrent invocation already recorded an attempt, so the second
/// write (still expecting count 0) must not apply.
///
/// Expected: Ok(false), state unchanged
#[tokio::test]
async fn skips_write_on_stale_attempt_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
    let now = Utc::now();

    let repo = OrderRepository::new(db);
    let first = repo
        .record_attempt(order.id, 0, first_attempt_update(now))
        .await?;
    let second = repo
        .record_attempt(order.id, 0, first_attempt_update(now))
        .await?;

    assert!(first);
    assert!(!second);

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.call_attempts, 1);

    Ok(())
}

/// Tests that attempts are not recorded against resolved orders.
///
/// Expected: Ok(false) once the order was cancelled externally
#[tokio::test]
async fn skips_write_when_order_resolved() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
    set_status(db, order.id, OrderStatus::Cancelled).await?;

    let repo = OrderRepository::new(db);
    let recorded = repo
        .record_attempt(order.id, 0, first_attempt_update(Utc::now()))
        .await?;

    assert!(!recorded);

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.call_attempts, 0);
    assert_eq!(updated.status, OrderStatus::Cancelled);

    Ok(())
}

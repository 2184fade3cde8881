use super::*;

/// Tests the exhaustion transition on a pending order.
///
/// Expected: Ok(true) and status Failed
#[tokio::test]
async fn fails_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = OrderRepository::new(db);
    let won = repo.mark_failed_if_active(order.id, Utc::now()).await?;

    assert!(won);

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.status, OrderStatus::Failed);

    Ok(())
}

/// Tests that only the first transition wins.
///
/// A duplicate late invocation must observe the Failed status and skip
/// its fallback run.
///
/// Expected: first Ok(true), second Ok(false)
#[tokio::test]
async fn second_transition_loses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = OrderRepository::new(db);
    let first = repo.mark_failed_if_active(order.id, Utc::now()).await?;
    let second = repo.mark_failed_if_active(order.id, Utc::now()).await?;

    assert!(first);
    assert!(!second);

    Ok(())
}

/// Tests that externally resolved orders are never failed.
///
/// Expected: Ok(false) and status untouched
#[tokio::test]
async fn does_not_fail_completed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
    set_status(db, order.id, OrderStatus::Completed).await?;

    let repo = OrderRepository::new(db);
    let won = repo.mark_failed_if_active(order.id, Utc::now()).await?;

    assert!(!won);

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);

    Ok(())
}

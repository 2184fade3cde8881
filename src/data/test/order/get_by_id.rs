use super::*;

/// Tests retrieving an order by ID.
///
/// Expected: Ok(Some(order)) matching the created row
#[tokio::test]
async fn returns_order_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, created) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.get_by_id(created.id).await?;

    assert!(order.is_some());
    let order = order.unwrap();
    assert_eq!(order.id, created.id);
    assert_eq!(order.recipient_phone_number, created.recipient_phone_number);
    assert_eq!(order.message, created.message);

    Ok(())
}

/// Tests retrieving a nonexistent order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo.get_by_id(4242).await?;

    assert!(order.is_none());

    Ok(())
}

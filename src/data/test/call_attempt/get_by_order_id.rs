use super::*;

/// Tests listing an order's attempts oldest first.
///
/// Expected: attempts ordered by attempt_number
#[tokio::test]
async fn lists_attempts_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, buyer.id).await?;
    let other = factory::order::create_order(db, buyer.id).await?;

    let repo = CallAttemptRepository::new(db);
    repo.create(attempt_params(order.id, 2, None)).await?;
    repo.create(attempt_params(order.id, 1, None)).await?;
    repo.create(attempt_params(other.id, 1, None)).await?;

    let attempts = repo.get_by_order_id(order.id).await?;

    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].attempt_number, 1);
    assert_eq!(attempts[1].attempt_number, 2);

    Ok(())
}

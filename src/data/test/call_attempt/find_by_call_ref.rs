use super::*;

/// Tests correlating a provider callback to its attempt.
///
/// Expected: Ok(Some(attempt)) for a known reference, Ok(None) otherwise
#[tokio::test]
async fn finds_attempt_by_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = CallAttemptRepository::new(db);
    repo.create(attempt_params(order.id, 1, None)).await?;
    let created = repo
        .create(attempt_params(order.id, 2, Some("CA00000777")))
        .await?;

    let found = repo.find_by_call_ref("CA00000777").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    let missing = repo.find_by_call_ref("CA99999999").await?;
    assert!(missing.is_none());

    Ok(())
}

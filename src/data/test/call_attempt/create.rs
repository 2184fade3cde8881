use super::*;

/// Tests recording a call attempt audit row.
///
/// Expected: Ok with the stored attempt
#[tokio::test]
async fn creates_attempt_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = CallAttemptRepository::new(db);
    let attempt = repo
        .create(attempt_params(order.id, 1, Some("CA00000001")))
        .await?;

    assert_eq!(attempt.order_id, order.id);
    assert_eq!(attempt.attempt_number, 1);
    assert_eq!(attempt.status, CallStatus::InProgress);
    assert_eq!(attempt.call_ref, Some("CA00000001".to_string()));
    assert!(attempt.duration_seconds.is_none());
    assert!(attempt.recording_url.is_none());

    Ok(())
}

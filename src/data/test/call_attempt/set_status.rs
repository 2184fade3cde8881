use super::*;

/// Tests applying a provider-reported status with duration.
///
/// Expected: status and duration updated
#[tokio::test]
async fn updates_status_and_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = CallAttemptRepository::new(db);
    let attempt = repo
        .create(attempt_params(order.id, 1, Some("CA00000010")))
        .await?;

    repo.set_status(attempt.id, CallStatus::Completed, Some(42))
        .await?;

    let updated = repo.find_by_call_ref("CA00000010").await?.unwrap();
    assert_eq!(updated.status, CallStatus::Completed);
    assert_eq!(updated.duration_seconds, Some(42));

    Ok(())
}

/// Tests that a status update without duration leaves it untouched.
///
/// Expected: status updated, duration still None
#[tokio::test]
async fn keeps_duration_when_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = CallAttemptRepository::new(db);
    let attempt = repo
        .create(attempt_params(order.id, 1, Some("CA00000011")))
        .await?;

    repo.set_status(attempt.id, CallStatus::NoAnswer, None).await?;

    let updated = repo.find_by_call_ref("CA00000011").await?.unwrap();
    assert_eq!(updated.status, CallStatus::NoAnswer);
    assert!(updated.duration_seconds.is_none());

    Ok(())
}

/// Tests storing the recording URL on an attempt.
///
/// Expected: recording URL set
#[tokio::test]
async fn stores_recording_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = CallAttemptRepository::new(db);
    let attempt = repo
        .create(attempt_params(order.id, 1, Some("CA00000012")))
        .await?;

    repo.set_recording(attempt.id, "https://recordings.example/rec-9.mp3")
        .await?;

    let updated = repo.find_by_call_ref("CA00000012").await?.unwrap();
    assert_eq!(
        updated.recording_url,
        Some("https://recordings.example/rec-9.mp3".to_string())
    );

    Ok(())
}

use super::*;

/// Tests completing an order once its recording arrives.
///
/// Expected: status Completed, recording URL and completion time stored
#[tokio::test]
async fn completes_order_with_recording_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;
    let now = Utc::now();

    let repo = OrderRepository::new(db);
    repo.complete_with_recording(order.id, "https://recordings.example/rec-1.mp3", now)
        .await?;

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(
        updated.call_recording_url,
        Some("https://recordings.example/rec-1.mp3".to_string())
    );
    assert_eq!(
        updated.completed_at.map(|t| t.timestamp()),
        Some(now.timestamp())
    );

    Ok(())
}

/// Tests marking an order connected from the status callback path.
///
/// Expected: call_connected set without touching the status
#[tokio::test]
async fn marks_call_connected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = OrderRepository::new(db);
    repo.mark_call_connected(order.id).await?;

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert!(updated.call_connected);
    assert_eq!(updated.status, OrderStatus::Pending);

    Ok(())
}

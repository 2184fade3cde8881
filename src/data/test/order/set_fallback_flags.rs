use super::*;

/// Tests that the two fallback flags are set independently.
///
/// Expected: each setter flips only its own flag
#[tokio::test]
async fn sets_flags_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order) = factory::helpers::create_order_with_buyer(db).await?;

    let repo = OrderRepository::new(db);

    repo.set_fallback_sms_sent(order.id).await?;
    let after_sms = repo.get_by_id(order.id).await?.unwrap();
    assert!(after_sms.fallback_sms_sent);
    assert!(!after_sms.fallback_email_sent);

    repo.set_fallback_email_sent(order.id).await?;
    let after_email = repo.get_by_id(order.id).await?.unwrap();
    assert!(after_email.fallback_sms_sent);
    assert!(after_email.fallback_email_sent);

    Ok(())
}

use super::*;

/// Tests recording the refund on the order.
///
/// Expected: payment status Refunded and order status Failed
#[tokio::test]
async fn records_refund_on_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_buyer, order, _payment) = factory::helpers::create_paid_order(db).await?;

    let repo = OrderRepository::new(db);
    repo.set_payment_refunded(order.id, Utc::now()).await?;

    let updated = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(updated.payment_status, PaymentStatus::Refunded);
    assert_eq!(updated.status, OrderStatus::Failed);

    Ok(())
}

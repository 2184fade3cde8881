use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use entity::payment::{Column, PaymentStatus};

use crate::model::payment::Payment;

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the completed payment for an order, if one exists.
    ///
    /// Only completed payments are refundable; pending or failed payments
    /// mean there is nothing to return to the buyer.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))`: The completed payment
    /// - `Ok(None)`: No completed payment for this order
    /// - `Err(DbErr)`: Database error
    pub async fn get_completed_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(Column::OrderId.eq(order_id))
            .filter(Column::Status.eq(PaymentStatus::Completed))
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Flips a payment to Refunded.
    pub async fn mark_refunded(&self, payment_id: i32, now: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::Payment::update_many()
            .col_expr(Column::Status, Expr::value(PaymentStatus::Refunded))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(payment_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

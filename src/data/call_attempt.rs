use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::call_attempt::{CallStatus, Column};

use crate::model::call_attempt::{CallAttempt, CreateCallAttemptParams};

pub struct CallAttemptRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallAttemptRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new call attempt audit row.
    pub async fn create(&self, params: CreateCallAttemptParams) -> Result<CallAttempt, DbErr> {
        let attempt = entity::call_attempt::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            attempt_number: ActiveValue::Set(params.attempt_number),
            attempted_at: ActiveValue::Set(params.attempted_at),
            status: ActiveValue::Set(params.status),
            call_ref: ActiveValue::Set(params.call_ref),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CallAttempt::from_entity(attempt))
    }

    /// Gets all attempts for an order, oldest first.
    pub async fn get_by_order_id(&self, order_id: i32) -> Result<Vec<CallAttempt>, DbErr> {
        let attempts = entity::prelude::CallAttempt::find()
            .filter(Column::OrderId.eq(order_id))
            .order_by_asc(Column::AttemptNumber)
            .all(self.db)
            .await?;

        Ok(attempts.into_iter().map(CallAttempt::from_entity).collect())
    }

    /// Finds the attempt carrying a provider call reference.
    ///
    /// # Returns
    /// - `Ok(Some(CallAttempt))`: The attempt that placed this call
    /// - `Ok(None)`: No attempt with this reference
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_call_ref(&self, call_ref: &str) -> Result<Option<CallAttempt>, DbErr> {
        let attempt = entity::prelude::CallAttempt::find()
            .filter(Column::CallRef.eq(call_ref))
            .one(self.db)
            .await?;

        Ok(attempt.map(CallAttempt::from_entity))
    }

    /// Updates the provider-reported status (and duration, when known) of
    /// an attempt.
    pub async fn set_status(
        &self,
        id: i32,
        status: CallStatus,
        duration_seconds: Option<i32>,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::CallAttempt::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .filter(Column::Id.eq(id));

        if let Some(duration) = duration_seconds {
            update = update.col_expr(Column::DurationSeconds, Expr::value(duration));
        }

        update.exec(self.db).await?;

        Ok(())
    }

    /// Stores the recording URL for an attempt.
    pub async fn set_recording(&self, id: i32, recording_url: &str) -> Result<(), DbErr> {
        entity::prelude::CallAttempt::update_many()
            .col_expr(Column::RecordingUrl, Expr::value(recording_url.to_string()))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

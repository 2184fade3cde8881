use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CallAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(CallAttempt::Id))
                    .col(integer(CallAttempt::OrderId))
                    .col(integer(CallAttempt::AttemptNumber))
                    .col(
                        timestamp(CallAttempt::AttemptedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(CallAttempt::Status))
                    .col(string_null(CallAttempt::CallRef))
                    .col(integer_null(CallAttempt::DurationSeconds))
                    .col(string_null(CallAttempt::RecordingUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_call_attempt_order_id")
                            .from(CallAttempt::Table, CallAttempt::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CallAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CallAttempt {
    Table,
    Id,
    OrderId,
    AttemptNumber,
    AttemptedAt,
    Status,
    CallRef,
    DurationSeconds,
    RecordingUrl,
}

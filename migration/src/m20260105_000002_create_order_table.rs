use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::BuyerId))
                    .col(integer_null(Order::MessengerId))
                    .col(string(Order::RecipientPhoneNumber))
                    .col(string(Order::RecipientName))
                    .col(text(Order::Message))
                    .col(boolean(Order::IsAnonymous).default(false))
                    .col(double(Order::Price))
                    .col(string(Order::Status))
                    .col(string(Order::PaymentStatus))
                    .col(integer(Order::CallAttempts).default(0))
                    .col(timestamp_null(Order::LastCallAttemptAt))
                    .col(boolean(Order::CallConnected).default(false))
                    .col(string_null(Order::CallRecordingUrl))
                    .col(
                        timestamp(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Order::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_buyer_id")
                            .from(Order::Table, Order::BuyerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    BuyerId,
    MessengerId,
    RecipientPhoneNumber,
    RecipientName,
    Message,
    IsAnonymous,
    Price,
    Status,
    PaymentStatus,
    CallAttempts,
    LastCallAttemptAt,
    CallConnected,
    CallRecordingUrl,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

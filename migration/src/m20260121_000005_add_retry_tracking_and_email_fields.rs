use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Columns added after the initial order table: the retry window bookkeeping
// and the optional recipient email used for the email fallback. One
// ALTER TABLE per column so the migration also runs on Sqlite.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(integer(Order::RetryDay).default(0))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(integer(Order::DailyAttempts).default(0))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(timestamp_null(Order::FirstCallAttemptDate))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(boolean(Order::FallbackSmsSent).default(false))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(boolean(Order::FallbackEmailSent).default(false))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(string_null(Order::RecipientEmail))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Order::RetryDay,
            Order::DailyAttempts,
            Order::FirstCallAttemptDate,
            Order::FallbackSmsSent,
            Order::FallbackEmailSent,
            Order::RecipientEmail,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Order::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Order {
    Table,
    RetryDay,
    DailyAttempts,
    FirstCallAttemptDate,
    FallbackSmsSent,
    FallbackEmailSent,
    RecipientEmail,
}

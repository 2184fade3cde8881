use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Recipient locale hints captured at checkout. Slot computation runs on the
// process reference clock and does not consult these yet.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(string_null(Order::PreferredCallTime))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(string_null(Order::RecipientTimezone))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Order::Table)
                    .add_column(string_null(Order::RecipientState))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Order::PreferredCallTime,
            Order::RecipientTimezone,
            Order::RecipientState,
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
    PreferredCallTime,
    RecipientTimezone,
    RecipientState,
}

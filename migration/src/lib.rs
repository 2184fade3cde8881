pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_order_table;
mod m20260105_000003_create_payment_table;
mod m20260110_000004_create_call_attempt_table;
mod m20260121_000005_add_retry_tracking_and_email_fields;
mod m20260121_000006_add_timezone_and_preferred_call_time;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_order_table::Migration),
            Box::new(m20260105_000003_create_payment_table::Migration),
            Box::new(m20260110_000004_create_call_attempt_table::Migration),
            Box::new(m20260121_000005_add_retry_tracking_and_email_fields::Migration),
            Box::new(m20260121_000006_add_timezone_and_preferred_call_time::Migration),
        ]
    }
}

use chrono::{DateTime, Days, NaiveDate, Utc};
use entity::order::OrderStatus;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    config::RetryPolicy,
    gateway::mock::{MockEmailGateway, MockTelephonyGateway},
    scheduler::mock::RecordingSlotScheduler,
};

use super::CallRetryService;


const APP_URL: &str = "https://callboard.example";
const SUPPORT_EMAIL: &str = "support@callboard.example";

/// Everything a retry test needs: an in-memory database, a recording
/// scheduler, and scripted gateways. Tests drive the executor by hand at
/// explicit reference times instead of waiting on real slots.
struct Harness {
    db: DatabaseConnection,
    telephony: MockTelephonyGateway,
    email: MockEmailGateway,
    scheduler: RecordingSlotScheduler,
    policy: RetryPolicy,
}

impl Harness {
    async fn new(telephony: MockTelephonyGateway) -> Self {
        let test = TestBuilder::new()
            .with_order_tables()
            .build()
            .await
            .unwrap();

        Self {
            db: test.db.unwrap(),
            telephony,
            email: MockEmailGateway::new(),
            scheduler: RecordingSlotScheduler::new(),
            policy: RetryPolicy::default(),
        }
    }

    fn service(&self) -> CallRetryService<'_> {
        CallRetryService::new(
            &self.db,
            &self.telephony,
            &self.email,
            &self.scheduler,
            &self.policy,
            APP_URL,
            SUPPORT_EMAIL,
        )
    }
}

/// Reference time grid for tests; `at(0, 9, 0)` is 09:00 on day 0 of the
/// retry window.
fn at(day: u64, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .checked_add_days(Days::new(day))
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
}

async fn fetch_order(db: &DatabaseConnection, order_id: i32) -> entity::order::Model {
    entity::prelude::Order::find_by_id(order_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
}

/// Seeds retry progress directly, as if earlier slots had already fired.
async fn set_retry_state(
    db: &DatabaseConnection,
    order_id: i32,
    call_attempts: i32,
    retry_day: i32,
    daily_attempts: i32,
    first_attempt: DateTime<Utc>,
) -> Result<(), DbErr> {
    entity::prelude::Order::update_many()
        .col_expr(
            entity::order::Column::CallAttempts,
            Expr::value(call_attempts),
        )
        .col_expr(entity::order::Column::RetryDay, Expr::value(retry_day))
        .col_expr(
            entity::order::Column::DailyAttempts,
            Expr::value(daily_attempts),
        )
        .col_expr(
            entity::order::Column::FirstCallAttemptDate,
            Expr::value(first_attempt),
        )
        .filter(entity::order::Column::Id.eq(order_id))
        .exec(db)
        .await?;

    Ok(())
}

async fn set_status(
    db: &DatabaseConnection,
    order_id: i32,
    status: OrderStatus,
) -> Result<(), DbErr> {
    entity::prelude::Order::update_many()
        .col_expr(entity::order::Column::Status, Expr::value(status))
        .filter(entity::order::Column::Id.eq(order_id))
        .exec(db)
        .await?;

    Ok(())
}

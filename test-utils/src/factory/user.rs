use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a user with a unique email address.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    let id = next_id();

    entity::user::ActiveModel {
        email: ActiveValue::Set(format!("buyer{id}@example.com")),
        name: ActiveValue::Set(format!("Buyer {id}")),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

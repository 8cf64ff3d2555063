//! Factories for rank and auto-role entities.
//!
//! Both tables only hold a role ID, so plain functions are enough.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers `role_id` as a rank.
///
/// # Returns
/// - `Ok(entity::rank::Model)` - Created rank entity
/// - `Err(DbErr)` - Database error during insert, e.g. a duplicate role
pub async fn create_rank(
    db: &DatabaseConnection,
    role_id: impl Into<String>,
) -> Result<entity::rank::Model, DbErr> {
    entity::rank::ActiveModel {
        role_id: ActiveValue::Set(role_id.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Registers `role_id` as an auto-role.
pub async fn create_auto_role(
    db: &DatabaseConnection,
    role_id: impl Into<String>,
) -> Result<entity::auto_role::Model, DbErr> {
    entity::auto_role::ActiveModel {
        role_id: ActiveValue::Set(role_id.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

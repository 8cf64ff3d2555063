//! Infraction and mute repositories.
//!
//! A mute row is the timed part of a Mute infraction and shares its UUID. Creating a
//! mute infraction inserts both rows; deleting an infraction removes its mute first.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::infraction::{CreateInfractionParam, Infraction, InfractionKind, Mute},
};

/// Repository providing database operations for infractions.
pub struct InfractionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfractionRepository<'a> {
    /// Creates a new InfractionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an infraction with a fresh UUID and, for mutes, its mute row.
    ///
    /// The mute spans from `created_at` to `created_at + mute_duration`. A Mute
    /// infraction without a duration is stored without a mute row.
    ///
    /// # Arguments
    /// - `param` - Target, staff member, kind, reason and optional mute duration
    /// - `created_at` - Timestamp of the infraction and start of the mute
    ///
    /// # Returns
    /// - `Ok((Infraction, Some(Mute)))` - A mute infraction and its mute
    /// - `Ok((Infraction, None))` - Any other infraction
    /// - `Err(AppError::BadRequest)` - The mute would end past the representable date range
    /// - `Err(AppError::DbErr)` - Database error during either insert
    pub async fn create(
        &self,
        param: CreateInfractionParam,
        created_at: DateTime<Utc>,
    ) -> Result<(Infraction, Option<Mute>), AppError> {
        let mute_end = match (param.kind, param.mute_duration) {
            (InfractionKind::Mute, Some(duration)) => Some(
                created_at
                    .checked_add_signed(duration)
                    .ok_or_else(|| AppError::BadRequest("Invalid duration".to_string()))?,
            ),
            _ => None,
        };

        let entity = entity::infraction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            username: ActiveValue::Set(param.username),
            staff_id: ActiveValue::Set(param.staff_id.to_string()),
            staff_username: ActiveValue::Set(param.staff_username),
            kind: ActiveValue::Set(param.kind),
            reason: ActiveValue::Set(param.reason),
            created_at: ActiveValue::Set(created_at),
        }
        .insert(self.db)
        .await?;

        let mute = match mute_end {
            Some(end_at) => {
                let mute = entity::mute::ActiveModel {
                    infraction_id: ActiveValue::Set(entity.id),
                    user_id: ActiveValue::Set(entity.user_id.clone()),
                    start_at: ActiveValue::Set(created_at),
                    end_at: ActiveValue::Set(end_at),
                }
                .insert(self.db)
                .await?;
                Some(Mute::from_entity(mute)?)
            }
            None => None,
        };

        Ok((Infraction::from_entity(entity)?, mute))
    }

    /// Finds an infraction by its UUID.
    ///
    /// # Returns
    /// - `Ok(Some(Infraction))` - Infraction found
    /// - `Ok(None)` - No infraction with that ID
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Infraction>, AppError> {
        let entity = entity::prelude::Infraction::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Infraction::from_entity).transpose()
    }

    /// Gets all infractions of a member, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    ///
    /// # Returns
    /// - `Ok(Vec<Infraction>)` - The member's infractions, empty if none
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<Infraction>, AppError> {
        let entities = entity::prelude::Infraction::find()
            .filter(entity::infraction::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::infraction::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Infraction::from_entity).collect()
    }

    /// Deletes an infraction together with its mute row, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - The infraction existed and was removed
    /// - `Ok(false)` - No infraction with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        entity::prelude::Mute::delete_by_id(id).exec(self.db).await?;

        let result = entity::prelude::Infraction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Repository for active mutes.
pub struct MuteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MuteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored mute, used to fill the mute cache at startup.
    pub async fn get_all(&self) -> Result<Vec<Mute>, AppError> {
        let entities = entity::prelude::Mute::find()
            .order_by_asc(entity::mute::Column::EndAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Mute::from_entity).collect()
    }

    /// Deletes the mute of an infraction. The infraction itself is kept.
    ///
    /// # Returns
    /// - `Ok(true)` - A mute was removed
    /// - `Ok(false)` - The infraction had no mute
    pub async fn delete(&self, infraction_id: Uuid) -> Result<bool, AppError> {
        let result = entity::prelude::Mute::delete_by_id(infraction_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every mute of a member, used when a member is unmuted early.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of mutes removed
    pub async fn delete_by_user(&self, user_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::Mute::delete_many()
            .filter(entity::mute::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

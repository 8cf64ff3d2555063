//! Campaign repository for database operations.
//!
//! A campaign is keyed by the member being promoted, which enforces at most one
//! running campaign per member.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::campaign::{Campaign, CreateCampaignParam},
};

pub struct CampaignRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a campaign whose voting window ends 48 hours after `start_at`.
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The created campaign
    /// - `Err(AppError::DbErr)` - Database error, including an existing campaign for the member
    pub async fn create(&self, param: CreateCampaignParam) -> Result<Campaign, AppError> {
        let end_at = param.end_at();

        let entity = entity::campaign::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            kind: ActiveValue::Set(param.kind),
            initiator_id: ActiveValue::Set(param.initiator_id.to_string()),
            reason: ActiveValue::Set(param.reason),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            minimal_votes: ActiveValue::Set(i32::try_from(param.minimal_votes).unwrap_or(i32::MAX)),
            start_at: ActiveValue::Set(param.start_at),
            end_at: ActiveValue::Set(end_at),
        }
        .insert(self.db)
        .await?;

        Campaign::from_entity(entity)
    }

    /// Finds the campaign running for a member.
    pub async fn find_by_user(&self, user_id: u64) -> Result<Option<Campaign>, AppError> {
        let entity = entity::prelude::Campaign::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Campaign::from_entity).transpose()
    }

    /// Finds the campaign whose vote message has the given ID.
    pub async fn find_by_message(&self, message_id: u64) -> Result<Option<Campaign>, AppError> {
        let entity = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Campaign::from_entity).transpose()
    }

    /// Gets all running campaigns, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Campaign>, AppError> {
        let entities = entity::prelude::Campaign::find()
            .order_by_asc(entity::campaign::Column::StartAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Campaign::from_entity).collect()
    }

    /// Deletes a member's campaign.
    ///
    /// # Returns
    /// - `Ok(true)` - The campaign existed and was removed
    /// - `Ok(false)` - No campaign for that member, e.g. already resolved elsewhere
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Campaign::delete_by_id(user_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

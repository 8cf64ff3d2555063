//! Repository for the rank and auto-role registries.
//!
//! Both tables hold nothing but a role ID and a timestamp, so one repository
//! serves both and dispatches on [`RoleRegistry`].

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::role::{RoleEntry, RoleRegistry},
};

pub struct RoleRegistryRepository<'a> {
    db: &'a DatabaseConnection,
    registry: RoleRegistry,
}

impl<'a> RoleRegistryRepository<'a> {
    /// Creates a repository for the given registry.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `registry` - Table to operate on
    pub fn new(db: &'a DatabaseConnection, registry: RoleRegistry) -> Self {
        Self { db, registry }
    }

    /// Registers a role.
    ///
    /// # Returns
    /// - `Ok(RoleEntry)` - The registered role
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate role
    pub async fn create(&self, role_id: u64) -> Result<RoleEntry, AppError> {
        let now = Utc::now();

        match self.registry {
            RoleRegistry::Rank => {
                let entity = entity::rank::ActiveModel {
                    role_id: ActiveValue::Set(role_id.to_string()),
                    created_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
                RoleEntry::from_rank(entity)
            }
            RoleRegistry::AutoRole => {
                let entity = entity::auto_role::ActiveModel {
                    role_id: ActiveValue::Set(role_id.to_string()),
                    created_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
                RoleEntry::from_auto_role(entity)
            }
        }
    }

    /// Checks whether a role is registered.
    pub async fn exists(&self, role_id: u64) -> Result<bool, AppError> {
        let id = role_id.to_string();

        let found = match self.registry {
            RoleRegistry::Rank => entity::prelude::Rank::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            RoleRegistry::AutoRole => entity::prelude::AutoRole::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    /// Gets all registered roles, oldest first.
    pub async fn get_all(&self) -> Result<Vec<RoleEntry>, AppError> {
        match self.registry {
            RoleRegistry::Rank => entity::prelude::Rank::find()
                .order_by_asc(entity::rank::Column::CreatedAt)
                .all(self.db)
                .await?
                .into_iter()
                .map(RoleEntry::from_rank)
                .collect(),
            RoleRegistry::AutoRole => entity::prelude::AutoRole::find()
                .order_by_asc(entity::auto_role::Column::CreatedAt)
                .all(self.db)
                .await?
                .into_iter()
                .map(RoleEntry::from_auto_role)
                .collect(),
        }
    }

    /// Unregisters a role.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was registered and has been removed
    /// - `Ok(false)` - The role was not registered
    pub async fn delete(&self, role_id: u64) -> Result<bool, AppError> {
        let id = role_id.to_string();

        let result = match self.registry {
            RoleRegistry::Rank => entity::prelude::Rank::delete_by_id(id).exec(self.db).await?,
            RoleRegistry::AutoRole => {
                entity::prelude::AutoRole::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Unregisters several roles at once, used when pruning roles deleted from the guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_many(&self, role_ids: &[u64]) -> Result<u64, AppError> {
        if role_ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

        let result = match self.registry {
            RoleRegistry::Rank => {
                entity::prelude::Rank::delete_many()
                    .filter(entity::rank::Column::RoleId.is_in(ids))
                    .exec(self.db)
                    .await?
            }
            RoleRegistry::AutoRole => {
                entity::prelude::AutoRole::delete_many()
                    .filter(entity::auto_role::Column::RoleId.is_in(ids))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}

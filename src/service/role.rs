//! Rank and auto-role registry service.
//!
//! Registered roles can be deleted from the guild behind the bot's back. Listing a
//! registry therefore checks every entry against the guild's current roles and
//! prunes the entries whose role no longer exists.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::all::{Role, RoleId};

use crate::{data::role::RoleRegistryRepository, error::AppError, model::role::RoleRegistry};

pub struct RoleRegistryService<'a> {
    db: &'a DatabaseConnection,
    registry: RoleRegistry,
}

impl<'a> RoleRegistryService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: RoleRegistry) -> Self {
        Self { db, registry }
    }

    /// Gets the registered roles that still exist in the guild.
    ///
    /// Entries whose role is missing from `guild_roles` are deleted.
    ///
    /// # Arguments
    /// - `guild_roles` - The guild's current roles, usually from the cache
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - Existing registered roles, in registration order
    /// - `Err(AppError)` - Database error
    pub async fn list_existing(
        &self,
        guild_roles: &HashMap<RoleId, Role>,
    ) -> Result<Vec<Role>, AppError> {
        let repo = RoleRegistryRepository::new(self.db, self.registry);

        let mut existing = Vec::new();
        let mut stale = Vec::new();
        for entry in repo.get_all().await? {
            match guild_roles.get(&RoleId::new(entry.role_id)) {
                Some(role) => existing.push(role.clone()),
                None => stale.push(entry.role_id),
            }
        }

        if !stale.is_empty() {
            let removed = repo.delete_many(&stale).await?;
            tracing::info!(
                "Pruned {} {} entries for deleted roles: {:?}",
                removed,
                self.registry.noun(),
                stale
            );
        }

        Ok(existing)
    }

    /// Finds an existing registered role by name, ignoring case.
    pub async fn find_by_name(
        &self,
        name: &str,
        guild_roles: &HashMap<RoleId, Role>,
    ) -> Result<Option<Role>, AppError> {
        let name = name.trim();

        Ok(self
            .list_existing(guild_roles)
            .await?
            .into_iter()
            .find(|role| role.name.eq_ignore_ascii_case(name)))
    }

    /// Registers a role.
    ///
    /// # Returns
    /// - `Ok(())` - The role was registered
    /// - `Err(AppError::Rejected)` - The role is already registered
    pub async fn add(&self, role_id: u64) -> Result<(), AppError> {
        let repo = RoleRegistryRepository::new(self.db, self.registry);

        if repo.exists(role_id).await? {
            return Err(AppError::rejected(
                "Already exists",
                format!(
                    "There already exists {} with that name.",
                    self.registry.with_article()
                ),
            ));
        }

        repo.create(role_id).await?;

        Ok(())
    }

    /// Unregisters a role.
    ///
    /// # Returns
    /// - `Ok(())` - The role was unregistered
    /// - `Err(AppError::NotFound)` - The role was not registered
    pub async fn remove(&self, role_id: u64) -> Result<(), AppError> {
        let deleted = RoleRegistryRepository::new(self.db, self.registry)
            .delete(role_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "That {} could not be found.",
                self.registry.noun()
            )));
        }

        Ok(())
    }
}

//! Infraction bookkeeping and mute lifecycle.
//!
//! This service keeps the mute table and the in-process [`MuteCache`] in step.
//! Discord side effects (kicks, bans, role changes and DMs) are performed by the
//! callers once the database reflects the action.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::infraction::{InfractionRepository, MuteRepository},
    error::AppError,
    model::infraction::{CreateInfractionParam, Infraction, InfractionKind, Mute},
    service::mute_cache::MuteCache,
};

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    mutes: &'a MuteCache,
}

impl<'a> ModerationService<'a> {
    /// Creates a new ModerationService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `mutes` - Shared cache of active mutes
    pub fn new(db: &'a DatabaseConnection, mutes: &'a MuteCache) -> Self {
        Self { db, mutes }
    }

    /// Records an infraction and, for mutes, caches the new mute.
    ///
    /// # Arguments
    /// - `param` - Target, staff member, kind, reason and mute duration
    /// - `now` - Time of the infraction
    ///
    /// # Returns
    /// - `Ok((Infraction, Option<Mute>))` - The stored infraction and its mute
    /// - `Err(AppError::BadRequest)` - A mute without a positive duration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record(
        &self,
        param: CreateInfractionParam,
        now: DateTime<Utc>,
    ) -> Result<(Infraction, Option<Mute>), AppError> {
        let valid_duration = param
            .mute_duration
            .is_some_and(|d| d > chrono::Duration::zero() && now.checked_add_signed(d).is_some());
        if param.kind == InfractionKind::Mute && !valid_duration {
            return Err(AppError::BadRequest("Invalid duration".to_string()));
        }

        let (infraction, mute) = InfractionRepository::new(self.db)
            .create(param, now)
            .await?;

        if let Some(mute) = &mute {
            self.mutes.insert(mute.clone()).await;
        }

        tracing::info!(
            "Recorded {:?} infraction {} for {} by {}",
            infraction.kind,
            infraction.id,
            infraction.user_id,
            infraction.staff_id
        );

        Ok((infraction, mute))
    }

    /// Gets a member's infractions, newest first.
    pub async fn history(&self, user_id: u64) -> Result<Vec<Infraction>, AppError> {
        InfractionRepository::new(self.db).get_by_user(user_id).await
    }

    /// Deletes an infraction and its mute.
    ///
    /// # Returns
    /// - `Ok((Infraction, Option<Mute>))` - The deleted infraction and the mute lifted with it
    /// - `Err(AppError::NotFound)` - No infraction with that ID
    pub async fn delete(&self, id: Uuid) -> Result<(Infraction, Option<Mute>), AppError> {
        let repo = InfractionRepository::new(self.db);

        let infraction = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("That infraction could not be found.".to_string()))?;

        repo.delete(id).await?;
        let lifted = self.mutes.remove(id).await;

        Ok((infraction, lifted))
    }

    /// Ends every mute of a member early.
    ///
    /// # Returns
    /// - `Ok(Vec<Mute>)` - The lifted mutes
    /// - `Err(AppError::Rejected)` - The member is not muted
    pub async fn unmute(&self, user_id: u64) -> Result<Vec<Mute>, AppError> {
        let removed = MuteRepository::new(self.db).delete_by_user(user_id).await?;
        let lifted = self.mutes.remove_user(user_id).await;

        if removed == 0 && lifted.is_empty() {
            return Err(AppError::rejected(
                "User not muted",
                "That user is not currently muted.",
            ));
        }

        Ok(lifted)
    }

    /// Removes the mutes that ended before `now` from the database and the cache.
    ///
    /// A mute whose row cannot be deleted stays cached and is retried next sweep.
    ///
    /// # Returns
    /// - `Ok(Vec<Mute>)` - The mutes that were lifted, for the caller to act on
    pub async fn expire(&self, now: DateTime<Utc>) -> Result<Vec<Mute>, AppError> {
        let repo = MuteRepository::new(self.db);
        let mut lifted = Vec::new();

        for mute in self.mutes.expired(now).await {
            if let Err(e) = repo.delete(mute.infraction_id).await {
                tracing::error!(
                    "Failed to delete expired mute {}: {:?}",
                    mute.infraction_id,
                    e
                );
                continue;
            }

            self.mutes.remove(mute.infraction_id).await;
            lifted.push(mute);
        }

        Ok(lifted)
    }
}

//! In-process cache of active mutes.
//!
//! The mute sweep runs every minute and only needs to know which mutes have ended,
//! so active mutes are kept in memory instead of being queried each time. The cache
//! is filled from the database at startup and updated alongside every mute row
//! change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::infraction::Mute;

/// Shared list of active mutes. Clones share the same list.
#[derive(Clone, Default)]
pub struct MuteCache {
    mutes: Arc<RwLock<Vec<Mute>>>,
}

impl MuteCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache contents, used once at startup.
    pub async fn load(&self, mutes: Vec<Mute>) {
        *self.mutes.write().await = mutes;
    }

    pub async fn insert(&self, mute: Mute) {
        self.mutes.write().await.push(mute);
    }

    /// Removes the mute belonging to an infraction.
    ///
    /// # Returns
    /// - `Some(Mute)` - The removed mute
    /// - `None` - The infraction had no cached mute
    pub async fn remove(&self, infraction_id: Uuid) -> Option<Mute> {
        let mut mutes = self.mutes.write().await;
        let index = mutes.iter().position(|m| m.infraction_id == infraction_id)?;
        Some(mutes.remove(index))
    }

    /// Removes every mute of a member.
    pub async fn remove_user(&self, user_id: u64) -> Vec<Mute> {
        let mut mutes = self.mutes.write().await;
        let (removed, kept): (Vec<Mute>, Vec<Mute>) = mutes.drain(..).partition(|m| m.user_id == user_id);
        *mutes = kept;
        removed
    }

    /// Gets the mutes that ended before `now` without removing them.
    pub async fn expired(&self, now: DateTime<Utc>) -> Vec<Mute> {
        self.mutes
            .read()
            .await
            .iter()
            .filter(|m| m.is_expired(now))
            .cloned()
            .collect()
    }

    /// Whether a member currently has an unexpired mute.
    pub async fn is_muted(&self, user_id: u64, now: DateTime<Utc>) -> bool {
        self.mutes
            .read()
            .await
            .iter()
            .any(|m| m.user_id == user_id && !m.is_expired(now))
    }

    pub async fn len(&self) -> usize {
        self.mutes.read().await.len()
    }
}

//! The member invoking a command or pressing a button, reduced to what
//! permission checks need.

use crate::config::RoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    /// Holds the Administrator permission.
    pub is_admin: bool,
    /// Holds the Staff role.
    pub is_staff: bool,
    /// Holds the Regular or Associate role.
    pub is_promoted: bool,
}

impl Actor {
    /// Builds an actor from a member's role IDs and administrator flag.
    pub fn from_roles(user_id: u64, roles: &[u64], is_admin: bool, config: &RoleConfig) -> Self {
        Self {
            user_id,
            is_admin,
            is_staff: roles.contains(&config.staff),
            is_promoted: roles.contains(&config.regular) || roles.contains(&config.associate),
        }
    }

    /// Staff members and administrators may moderate.
    pub fn can_moderate(&self) -> bool {
        self.is_staff || self.is_admin
    }

    /// Regulars, associates and administrators may create tags.
    pub fn can_create_tags(&self) -> bool {
        self.is_promoted || self.is_admin
    }

    /// Whether this actor may modify something owned by `owner_id`.
    pub fn owns_or_admin(&self, owner_id: u64) -> bool {
        self.user_id == owner_id || self.is_admin
    }
}

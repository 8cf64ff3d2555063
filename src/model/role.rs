//! Roles registered as ranks or auto-roles.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Which role registry an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRegistry {
    /// Self-assignable roles.
    Rank,
    /// Roles granted on join.
    AutoRole,
}

impl RoleRegistry {
    /// Singular display name, e.g. "rank".
    pub fn noun(self) -> &'static str {
        match self {
            RoleRegistry::Rank => "rank",
            RoleRegistry::AutoRole => "auto role",
        }
    }

    /// The noun with its indefinite article, e.g. "an auto role".
    pub fn with_article(self) -> &'static str {
        match self {
            RoleRegistry::Rank => "a rank",
            RoleRegistry::AutoRole => "an auto role",
        }
    }
}

/// A registered role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleEntry {
    pub role_id: u64,
    pub created_at: DateTime<Utc>,
}

impl RoleEntry {
    pub fn from_rank(entity: entity::rank::Model) -> Result<Self, AppError> {
        Ok(Self {
            role_id: parse_u64_from_string(entity.role_id)?,
            created_at: entity.created_at,
        })
    }

    pub fn from_auto_role(entity: entity::auto_role::Model) -> Result<Self, AppError> {
        Ok(Self {
            role_id: parse_u64_from_string(entity.role_id)?,
            created_at: entity.created_at,
        })
    }
}

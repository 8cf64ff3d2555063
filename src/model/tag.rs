//! Tag domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_CONTENT_LENGTH: usize = 2000;
/// Subcommand names of `tag`. A tag with one of these names could never be shown.
pub const RESERVED_NAMES: [&str; 6] = ["show", "list", "create", "edit", "delete", "transfer"];

/// A named text snippet owned by a member.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    /// Lowercased, whitespace-free name.
    pub name: String,
    pub content: String,
    pub owner_id: u64,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Converts an entity model to a tag domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The converted tag
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored owner ID is not a u64
    pub fn from_entity(entity: entity::tag::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            content: entity.content,
            owner_id: parse_u64_from_string(entity.owner_id)?,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParam {
    pub name: String,
    pub content: String,
    pub owner_id: u64,
}

/// Normalizes a tag name for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Checks a tag name and content against the stored limits.
pub fn validate(name: &str, content: &str) -> Result<(), AppError> {
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::rejected(
            "Invalid tag",
            format!("Tag names must be 1 to {} characters long.", MAX_NAME_LENGTH),
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(AppError::rejected(
            "Invalid tag",
            "Tag names cannot contain spaces.",
        ));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(AppError::rejected(
            "Invalid tag",
            format!("`{}` is reserved for a tag subcommand.", name),
        ));
    }
    if content.trim().is_empty() || content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(AppError::rejected(
            "Invalid tag",
            format!(
                "Tag content must be 1 to {} characters long.",
                MAX_CONTENT_LENGTH
            ),
        ));
    }
    Ok(())
}

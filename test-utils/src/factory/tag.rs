//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tag = TagFactory::new(&db)
///     .name("rules")
///     .content("Be nice.")
///     .build()
///     .await?;
/// ```
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    content: String,
    owner_id: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag{id}"`
    /// - content: `"Content of tag {id}"`
    /// - owner_id: `"{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("tag{}", id),
            content: format!("Content of tag {}", id),
            owner_id: id.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tag::Model)` - Created tag entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            content: ActiveValue::Set(self.content),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
///
/// Shorthand for `TagFactory::new(db).build().await`.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

//! Tag repository for database operations.
//!
//! Names are stored exactly as given; callers normalize them with
//! `model::tag::normalize_name` before creating or looking up a tag.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::tag::{CreateTagParam, Tag},
};

/// Repository providing database operations for tags.
pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    /// Creates a new TagRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new tag.
    ///
    /// # Arguments
    /// - `param` - Name, content and owner of the tag
    ///
    /// # Returns
    /// - `Ok(Tag)` - The created tag
    /// - `Err(AppError::DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, param: CreateTagParam) -> Result<Tag, AppError> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(param.name),
            content: ActiveValue::Set(param.content),
            owner_id: ActiveValue::Set(param.owner_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Tag::from_entity(entity)
    }

    /// Finds a tag by its exact stored name.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - Tag found
    /// - `Ok(None)` - No tag with that name
    /// - `Err(AppError)` - Database error or unparsable owner ID
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, AppError> {
        let entity = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(Tag::from_entity).transpose()
    }

    /// Gets all tags ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Tag::from_entity).collect()
    }

    /// Replaces the content of a tag.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The updated tag
    /// - `Err(AppError::DbErr(RecordNotFound))` - No tag with that ID
    pub async fn update_content(&self, id: i32, content: String) -> Result<Tag, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.content = ActiveValue::Set(content);

        let entity = active_model.update(self.db).await?;

        Tag::from_entity(entity)
    }

    /// Reassigns a tag to a new owner.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The updated tag
    /// - `Err(AppError::DbErr(RecordNotFound))` - No tag with that ID
    pub async fn update_owner(&self, id: i32, owner_id: u64) -> Result<Tag, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.owner_id = ActiveValue::Set(owner_id.to_string());

        let entity = active_model.update(self.db).await?;

        Tag::from_entity(entity)
    }

    /// Deletes a tag. Deleting a missing tag is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::tag::ActiveModel, DbErr> {
        let tag = entity::prelude::Tag::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Tag {} not found", id)))?;

        Ok(tag.into())
    }
}

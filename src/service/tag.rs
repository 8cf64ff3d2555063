use sea_orm::DatabaseConnection;

use crate::{
    data::tag::TagRepository,
    error::AppError,
    model::{
        actor::Actor,
        tag::{self, CreateTagParam, Tag},
    },
};

const NOT_FOUND: &str = "The tag you requested could not be found.";
const NOT_OWNER: &str = "Only the owner of a tag or an administrator can modify it.";

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tags ordered by name.
    pub async fn list(&self) -> Result<Vec<Tag>, AppError> {
        TagRepository::new(self.db).get_all().await
    }

    /// Looks up a tag by name, ignoring case.
    ///
    /// Returns `None` for unknown names, used by the inline `$name` trigger.
    pub async fn find(&self, name: &str) -> Result<Option<Tag>, AppError> {
        TagRepository::new(self.db)
            .find_by_name(&tag::normalize_name(name))
            .await
    }

    /// Looks up a tag by name, failing with Not found for unknown names.
    pub async fn get(&self, name: &str) -> Result<Tag, AppError> {
        self.find(name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Creates a tag owned by `actor`.
    ///
    /// Only promoted members and administrators may create tags. The name is stored
    /// lowercased and must be unused.
    pub async fn create(&self, actor: &Actor, name: &str, content: &str) -> Result<Tag, AppError> {
        if !actor.can_create_tags() {
            return Err(AppError::AccessDenied(
                "You need to be a regular, associate or administrator in order to create tags."
                    .to_string(),
            ));
        }

        let name = tag::normalize_name(name);
        tag::validate(&name, content)?;

        let repo = TagRepository::new(self.db);
        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::rejected(
                "Already exists",
                "There already exists a tag with that name.",
            ));
        }

        let tag = repo
            .create(CreateTagParam {
                name,
                content: content.to_string(),
                owner_id: actor.user_id,
            })
            .await?;

        tracing::info!("Tag '{}' created by {}", tag.name, actor.user_id);

        Ok(tag)
    }

    /// Replaces the content of a tag owned by `actor`, or any tag for administrators.
    pub async fn edit(&self, actor: &Actor, name: &str, content: &str) -> Result<Tag, AppError> {
        let existing = self.get_owned(actor, name).await?;
        tag::validate(&existing.name, content)?;

        TagRepository::new(self.db)
            .update_content(existing.id, content.to_string())
            .await
    }

    pub async fn delete(&self, actor: &Actor, name: &str) -> Result<Tag, AppError> {
        let existing = self.get_owned(actor, name).await?;

        TagRepository::new(self.db).delete(existing.id).await?;

        tracing::info!("Tag '{}' deleted by {}", existing.name, actor.user_id);

        Ok(existing)
    }

    /// Hands a tag over to `new_owner_id`.
    pub async fn transfer(
        &self,
        actor: &Actor,
        name: &str,
        new_owner_id: u64,
    ) -> Result<Tag, AppError> {
        let existing = self.get_owned(actor, name).await?;

        TagRepository::new(self.db)
            .update_owner(existing.id, new_owner_id)
            .await
    }

    /// Not found takes precedence over Access denied.
    async fn get_owned(&self, actor: &Actor, name: &str) -> Result<Tag, AppError> {
        let existing = self.get(name).await?;

        if !actor.owns_or_admin(existing.owner_id) {
            return Err(AppError::AccessDenied(NOT_OWNER.to_string()));
        }

        Ok(existing)
    }
}

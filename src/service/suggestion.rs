use sea_orm::DatabaseConnection;

use crate::{
    data::suggestion::SuggestionRepository,
    error::AppError,
    model::suggestion::{CreateSuggestionParam, Suggestion, SuggestionAction, SuggestionState},
};

pub struct SuggestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn submit(&self, param: CreateSuggestionParam) -> Result<Suggestion, AppError> {
        SuggestionRepository::new(self.db).create(param).await
    }

    /// Applies a staff decision to the suggestion posted as `message_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Suggestion))` - The decided suggestion
    /// - `Ok(None)` - Unknown message, or the suggestion was already decided
    pub async fn decide(
        &self,
        message_id: u64,
        action: SuggestionAction,
    ) -> Result<Option<Suggestion>, AppError> {
        let repo = SuggestionRepository::new(self.db);

        let Some(suggestion) = repo.find_by_message_id(message_id).await? else {
            return Ok(None);
        };
        let Some(next) = action.apply(suggestion.state) else {
            return Ok(None);
        };

        let updated = repo.update_state(suggestion.id, next).await?;

        Ok(Some(updated))
    }

    /// Gets the suggestions awaiting a decision, oldest first.
    pub async fn pending(&self) -> Result<Vec<Suggestion>, AppError> {
        SuggestionRepository::new(self.db)
            .get_by_state(SuggestionState::New)
            .await
    }
}

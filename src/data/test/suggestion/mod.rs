use crate::{
    data::suggestion::SuggestionRepository,
    error::AppError,
    model::suggestion::{CreateSuggestionParam, SuggestionState},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_message_id;
mod get_by_state;
mod update_state;

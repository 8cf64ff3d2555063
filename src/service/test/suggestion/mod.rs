use crate::{
    error::AppError,
    model::suggestion::{CreateSuggestionParam, SuggestionAction, SuggestionState},
    service::suggestion::SuggestionService,
};
use test_utils::{builder::TestBuilder, factory};

mod decide;

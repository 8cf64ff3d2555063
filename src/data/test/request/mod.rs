use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{CreateRequestParam, RequestState},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_message_id;
mod update_state;

use crate::{
    error::AppError,
    model::request::{CreateRequestParam, RequestAction, RequestState},
    service::request::{RequestGate, RequestService},
};
use entity::request::RequestState as StoredState;
use test_utils::{builder::TestBuilder, factory};

mod apply;

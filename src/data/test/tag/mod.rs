use crate::{
    data::tag::TagRepository,
    error::AppError,
    model::tag::CreateTagParam,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod get_all;
mod update_owner;

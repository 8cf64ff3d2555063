use crate::{
    data::role::RoleRegistryRepository,
    error::AppError,
    model::role::RoleRegistry,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_many;
mod get_all;

use crate::{
    data::campaign::CampaignRepository,
    error::AppError,
    model::campaign::{CampaignKind, CreateCampaignParam},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_message;
mod find_by_user;
mod get_all;

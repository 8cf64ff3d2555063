use crate::{
    data::infraction::InfractionRepository,
    error::AppError,
    model::infraction::{CreateInfractionParam, InfractionKind},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_id;

fn param(kind: InfractionKind, mute_duration: Option<Duration>) -> CreateInfractionParam {
    CreateInfractionParam {
        user_id: 10,
        username: "target".to_string(),
        staff_id: 20,
        staff_username: "moderator".to_string(),
        kind,
        reason: "Spamming".to_string(),
        mute_duration,
    }
}

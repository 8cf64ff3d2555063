use chrono::{Duration, Utc};

use crate::{
    data::infraction::MuteRepository,
    error::AppError,
    model::infraction::{CreateInfractionParam, InfractionKind},
    service::{moderation::ModerationService, mute_cache::MuteCache},
    util::duration::parse_duration,
};
use test_utils::{builder::TestBuilder, factory};

mod record;

fn param(user_id: u64, kind: InfractionKind, mute_duration: Option<Duration>) -> CreateInfractionParam {
    CreateInfractionParam {
        user_id,
        username: "target".to_string(),
        staff_id: 99,
        staff_username: "moderator".to_string(),
        kind,
        reason: "Spamming".to_string(),
        mute_duration,
    }
}

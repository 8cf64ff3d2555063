use crate::{error::AppError, model::actor::Actor, service::tag::TagService};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod edit;
mod transfer;

fn member(user_id: u64) -> Actor {
    Actor {
        user_id,
        is_admin: false,
        is_staff: false,
        is_promoted: false,
    }
}

fn promoted(user_id: u64) -> Actor {
    Actor {
        is_promoted: true,
        ..member(user_id)
    }
}

fn admin(user_id: u64) -> Actor {
    Actor {
        is_admin: true,
        ..member(user_id)
    }
}

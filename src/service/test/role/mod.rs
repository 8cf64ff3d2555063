use std::collections::HashMap;

use serenity::all::{Role, RoleId};

use crate::{error::AppError, model::role::RoleRegistry, service::role::RoleRegistryService};
use test_utils::{builder::TestBuilder, factory, serenity::create_test_role};

mod add;
mod list_existing;

fn guild_roles(roles: &[(u64, &str)]) -> HashMap<RoleId, Role> {
    roles
        .iter()
        .map(|(id, name)| (RoleId::new(*id), create_test_role(*id, name)))
        .collect()
}

use serenity::all::{Context, GuildId, Ready};

use crate::{bot::status, state::Data};

/// Handle bot ready event
pub async fn handle_ready(data: &Data, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    update_status(data, &ctx);
}

/// Handle cache ready event
pub async fn handle_cache_ready(data: &Data, ctx: Context, guilds: Vec<GuildId>) {
    tracing::debug!("Cache ready with {} guilds", guilds.len());

    update_status(data, &ctx);
}

/// Sets the "Watching N programmers" activity from the cached member list.
pub fn update_status(data: &Data, ctx: &Context) {
    let count = status::programmer_count(&ctx.cache, GuildId::new(data.config.guild));

    ctx.set_activity(Some(status::activity(count)));
}

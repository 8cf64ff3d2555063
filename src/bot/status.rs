use serenity::all::{ActivityData, Cache, GuildId};

/// Non-bot members of the guild, from the cache.
pub fn programmer_count(cache: &Cache, guild_id: GuildId) -> usize {
    cache
        .guild(guild_id)
        .map(|guild| guild.members.values().filter(|m| !m.user.bot).count())
        .unwrap_or(0)
}

/// "Watching N programmers".
pub fn activity(count: usize) -> ActivityData {
    ActivityData::watching(format!("{} programmers", count))
}

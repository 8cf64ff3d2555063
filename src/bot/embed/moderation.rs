//! Moderation embeds.

use chrono::Duration;
use serenity::all::{CreateEmbed, CreateEmbedAuthor, User};

use crate::{
    bot::embed::style::{colors, EmbedStyle},
    model::infraction::{self, Infraction, InfractionKind},
    util::duration::readable_duration,
};

/// Confirmation of a moderation action, authored by the target.
pub fn action_taken(
    target: &User,
    kind: InfractionKind,
    staff_name: &str,
    reason: &str,
    mute_duration: Option<Duration>,
) -> CreateEmbed {
    let title = format!(
        "Successfully {} {}",
        infraction::kind_past_tense(kind),
        target.name
    );

    let embed = CreateEmbed::new()
        .colour(colors::SUCCESS)
        .author(CreateEmbedAuthor::new(title).icon_url(target.face()))
        .field("Staff member", staff_name, true)
        .field("Reason", reason, false);

    match mute_duration {
        Some(duration) => embed.field("Mute duration", readable_duration(duration), false),
        None => embed,
    }
}

/// One entry of a member's infraction history.
pub fn history_line(infraction: &Infraction) -> String {
    format!(
        "**{}** on {} by {}\n{}\n`{}`",
        infraction::kind_title(infraction.kind),
        infraction.created_at.format("%Y-%m-%d %H:%M UTC"),
        infraction.staff_username,
        infraction.reason,
        infraction.id
    )
}

pub fn mute_expired(guild_name: &str) -> CreateEmbed {
    EmbedStyle::Information.embed(
        "Mute expired",
        format!("You are no longer muted in {}.", guild_name),
    )
}

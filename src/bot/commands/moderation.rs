//! Staff moderation commands.

use std::future::Future;

use chrono::{Duration, Utc};
use serenity::all::{Member, RoleId, User};
use uuid::Uuid;

use crate::{
    bot::{
        checks,
        commands::reply,
        embed::{moderation as moderation_embed, EmbedStyle},
        mute::remove_muted_role,
        paginate,
    },
    error::AppError,
    model::infraction::{CreateInfractionParam, InfractionKind},
    service::moderation::ModerationService,
    state::Context,
    util::duration::parse_duration,
};

/// Warn a member.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "Member to warn"] member: Member,
    #[description = "Reason"]
    #[rest]
    reason: String,
) -> Result<(), AppError> {
    punish(ctx, &member, InfractionKind::Warn, reason, None).await
}

/// Kick a member.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Member to kick"] member: Member,
    #[description = "Reason"]
    #[rest]
    reason: String,
) -> Result<(), AppError> {
    member
        .kick_with_reason(ctx, &audit_reason(ctx, &reason))
        .await?;

    punish(ctx, &member, InfractionKind::Kick, reason, None).await
}

/// Ban a member.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Member to ban"] member: Member,
    #[description = "Reason"]
    #[rest]
    reason: String,
) -> Result<(), AppError> {
    member
        .ban_with_reason(ctx.http(), 0, audit_reason(ctx, &reason))
        .await?;

    punish(ctx, &member, InfractionKind::Ban, reason, None).await
}

/// Mute a member for a while, e.g. `1d2h30m`.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "Member to mute"] member: Member,
    #[description = "Duration such as 1d2h30m"] duration: String,
    #[description = "Reason"]
    #[rest]
    reason: String,
) -> Result<(), AppError> {
    let duration = parse_duration(&duration)
        .filter(|d| Utc::now().checked_add_signed(*d).is_some())
        .ok_or_else(|| AppError::BadRequest("Invalid duration".to_string()))?;

    let muted_role = RoleId::new(ctx.data().config.roles.muted);
    with_role_rollback(
        async { member.add_role(ctx, muted_role).await.map_err(AppError::from) },
        record(ctx, &member, InfractionKind::Mute, &reason, Some(duration)),
        async { member.remove_role(ctx, muted_role).await.map_err(AppError::from) },
    )
    .await?;

    announce(ctx, &member, InfractionKind::Mute, &reason, Some(duration)).await
}

/// End a member's mute early.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "Member to unmute"] member: Member,
) -> Result<(), AppError> {
    let data = ctx.data();
    ModerationService::new(&data.db, &data.mutes)
        .unmute(member.user.id.get())
        .await?;

    remove_muted_role(&ctx.serenity_context().http, &data.config, member.user.id.get()).await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            format!("Successfully unmuted {}", member.user.name),
            format!("<@{}> is no longer muted.", member.user.id),
        ),
    )
    .await
}

/// List a member's infractions.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn infractions(
    ctx: Context<'_>,
    #[description = "Member"] user: User,
) -> Result<(), AppError> {
    let data = ctx.data();
    let history = ModerationService::new(&data.db, &data.mutes)
        .history(user.id.get())
        .await?;

    if history.is_empty() {
        return reply(
            ctx,
            EmbedStyle::Information.embed(
                "No infractions",
                format!("<@{}> has no infractions.", user.id),
            ),
        )
        .await;
    }

    let lines = history.iter().map(moderation_embed::history_line).collect();

    paginate::send_paginated(
        ctx,
        &format!("Infractions of {} ({})", user.name, history.len()),
        lines,
    )
    .await
}

/// Delete an infraction by ID.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn delinfraction(
    ctx: Context<'_>,
    #[description = "Infraction ID"] id: String,
) -> Result<(), AppError> {
    let id = Uuid::parse_str(id.trim())
        .map_err(|_| AppError::BadRequest("That is not a valid infraction ID.".to_string()))?;

    let data = ctx.data();
    let (infraction, lifted) = ModerationService::new(&data.db, &data.mutes)
        .delete(id)
        .await?;

    if lifted.is_some() {
        remove_muted_role(&ctx.serenity_context().http, &data.config, infraction.user_id).await?;
    }

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Infraction deleted",
            format!(
                "The infraction `{}` of {} has been deleted.",
                infraction.id, infraction.username
            ),
        ),
    )
    .await
}

/// Records the infraction and replies with the confirmation embed.
async fn punish(
    ctx: Context<'_>,
    member: &Member,
    kind: InfractionKind,
    reason: String,
    mute_duration: Option<Duration>,
) -> Result<(), AppError> {
    record(ctx, member, kind, &reason, mute_duration).await?;
    announce(ctx, member, kind, &reason, mute_duration).await
}

/// Grants a role, then runs `action`. The role is revoked again when `action` fails.
async fn with_role_rollback<T>(
    grant: impl Future<Output = Result<(), AppError>>,
    action: impl Future<Output = Result<T, AppError>>,
    revoke: impl Future<Output = Result<(), AppError>>,
) -> Result<T, AppError> {
    grant.await?;

    match action.await {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(revoke_err) = revoke.await {
                tracing::error!("Failed to revoke role after failed action: {:?}", revoke_err);
            }
            Err(e)
        }
    }
}

async fn record(
    ctx: Context<'_>,
    member: &Member,
    kind: InfractionKind,
    reason: &str,
    mute_duration: Option<Duration>,
) -> Result<(), AppError> {
    let data = ctx.data();
    let staff = ctx.author();

    ModerationService::new(&data.db, &data.mutes)
        .record(
            CreateInfractionParam {
                user_id: member.user.id.get(),
                username: member.user.name.clone(),
                staff_id: staff.id.get(),
                staff_username: staff.name.clone(),
                kind,
                reason: reason.to_string(),
                mute_duration,
            },
            Utc::now(),
        )
        .await?;

    Ok(())
}

async fn announce(
    ctx: Context<'_>,
    member: &Member,
    kind: InfractionKind,
    reason: &str,
    mute_duration: Option<Duration>,
) -> Result<(), AppError> {
    let staff = ctx.author();
    reply(
        ctx,
        moderation_embed::action_taken(&member.user, kind, &staff.name, reason, mute_duration),
    )
    .await
}

fn audit_reason(ctx: Context<'_>, reason: &str) -> String {
    format!("{} - {}", reason, ctx.author().name)
}

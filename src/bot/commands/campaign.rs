//! Promotion campaigns.

use std::time::Duration;

use chrono::Utc;
use serenity::all::{ChannelId, CreateMessage, GuildId, Member, ReactionType, User};

use crate::{
    bot::{
        commands::reply,
        embed::{
            campaign::new_campaign,
            style::{colors, icons, styled},
            EmbedStyle,
        },
    },
    error::{internal::InternalError, AppError},
    model::campaign::{self, CampaignKind, CampaignOutcome, Candidate, CreateCampaignParam},
    service::{
        campaign::CampaignService,
        campaign_resolution::{CampaignResolutionService, VOTE_AGAINST, VOTE_IN_FAVOUR},
    },
    state::Context,
};

const REASON_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum CampaignChoice {
    #[name = "regular"]
    Regular,
    #[name = "associate"]
    Associate,
}

impl From<CampaignChoice> for CampaignKind {
    fn from(choice: CampaignChoice) -> Self {
        match choice {
            CampaignChoice::Regular => CampaignKind::Regular,
            CampaignChoice::Associate => CampaignKind::Associate,
        }
    }
}

/// Start a vote to promote a member.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn campaign(
    ctx: Context<'_>,
    #[description = "Member to promote"] member: Member,
    #[description = "Role to promote to"] kind: CampaignChoice,
) -> Result<(), AppError> {
    let kind = CampaignKind::from(kind);
    let config = &ctx.data().config;
    let service = CampaignService::new(&ctx.data().db);

    let candidate = Candidate {
        user_id: member.user.id.get(),
        is_regular: member.roles.iter().any(|r| r.get() == config.roles.regular),
        is_associate: member.roles.iter().any(|r| r.get() == config.roles.associate),
    };
    service.check_eligibility(&candidate, kind).await?;

    reply(
        ctx,
        styled(
            colors::INFORMATION,
            icons::WAIT,
            "Campaign reason",
            format!(
                "Briefly describe why <@{}> should be promoted to {}? You have 2 minutes to answer.",
                member.user.id,
                campaign::kind_name(kind)
            ),
        ),
    )
    .await?;

    let Some(answer) = ctx
        .author()
        .await_reply(ctx)
        .channel_id(ctx.channel_id())
        .timeout(REASON_TIMEOUT)
        .await
    else {
        return reply(
            ctx,
            EmbedStyle::Warning.embed(
                "Campaign cancelled",
                "You waited too long, causing the campaign to automatically be cancelled.",
            ),
        )
        .await;
    };

    let mut param = CreateCampaignParam {
        user_id: candidate.user_id,
        kind,
        initiator_id: ctx.author().id.get(),
        reason: answer.content.clone(),
        message_id: 0,
        minimal_votes: campaign::minimal_votes(eligible_voters(ctx)?),
        start_at: Utc::now(),
    };

    let channel_id = ChannelId::new(config.channels.campaigns);
    let message = channel_id
        .send_message(ctx, CreateMessage::new().embed(new_campaign(&param.preview())))
        .await?;
    message
        .react(ctx, ReactionType::Unicode(VOTE_IN_FAVOUR.to_string()))
        .await?;
    message
        .react(ctx, ReactionType::Unicode(VOTE_AGAINST.to_string()))
        .await?;

    param.message_id = message.id.get();
    if let Err(e) = service.start(param).await {
        if let Err(delete_err) = message.delete(ctx).await {
            tracing::error!("Failed to delete orphaned vote message: {:?}", delete_err);
        }
        return Err(e);
    }

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Started campaign",
            format!(
                "The campaign for <@{}> has been started in <#{}>.",
                candidate.user_id, channel_id
            ),
        ),
    )
    .await
}

/// Accept a running campaign.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn acceptcampaign(
    ctx: Context<'_>,
    #[description = "Member in campaign"] user: User,
) -> Result<(), AppError> {
    resolve_by_admin(ctx, &user, CampaignOutcome::accepted_by_admin()).await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Accepted campaign",
            format!("The campaign for <@{}> has been accepted.", user.id),
        ),
    )
    .await
}

/// Cancel a running campaign.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn cancelcampaign(
    ctx: Context<'_>,
    #[description = "Member in campaign"] user: User,
) -> Result<(), AppError> {
    resolve_by_admin(ctx, &user, CampaignOutcome::cancelled_by_admin()).await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Cancelled campaign",
            format!("The campaign for <@{}> has been cancelled.", user.id),
        ),
    )
    .await
}

async fn resolve_by_admin(
    ctx: Context<'_>,
    user: &User,
    outcome: CampaignOutcome,
) -> Result<(), AppError> {
    let data = ctx.data();
    let campaign = CampaignService::new(&data.db).require(user.id.get()).await?;

    let resolved = CampaignResolutionService::new(
        &data.db,
        ctx.serenity_context().http.clone(),
        &data.config,
    )
    .resolve(&campaign, outcome)
    .await?;

    if !resolved {
        return Err(AppError::rejected(
            "User not in campaign",
            "There is no vote in progress for that user.",
        ));
    }

    Ok(())
}

/// Members whose votes count, from the guild cache.
fn eligible_voters(ctx: Context<'_>) -> Result<usize, AppError> {
    let roles = &ctx.data().config.roles;
    let guild_id = GuildId::new(ctx.data().config.guild);

    let guild = ctx
        .cache()
        .guild(guild_id)
        .ok_or(InternalError::UnknownGuild(guild_id.get()))?;

    Ok(guild
        .members
        .values()
        .filter(|m| {
            let role_ids: Vec<u64> = m.roles.iter().map(|r| r.get()).collect();
            campaign::is_eligible_voter(m.user.bot, &role_ids, roles)
        })
        .count())
}

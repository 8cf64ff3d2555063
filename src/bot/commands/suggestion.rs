use serenity::all::{ChannelId, CreateMessage, EditMessage, ReactionType};

use crate::{
    bot::{
        checks,
        commands::reply,
        embed::{suggestion as suggestion_embed, EmbedStyle},
        paginate,
    },
    error::AppError,
    model::suggestion::{CreateSuggestionParam, SuggestionState},
    service::suggestion::SuggestionService,
    state::Context,
};

pub const UPVOTE: &str = "⬆️";
pub const DOWNVOTE: &str = "⬇️";

/// Suggest something for the server.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn suggest(
    ctx: Context<'_>,
    #[description = "Your suggestion"]
    #[rest]
    content: String,
) -> Result<(), AppError> {
    let initiator_id = ctx.author().id.get();
    let channel_id = ChannelId::new(ctx.data().config.channels.suggestions);

    let mut message = channel_id
        .send_message(
            ctx,
            CreateMessage::new()
                .embed(suggestion_embed::suggestion(
                    initiator_id,
                    &content,
                    SuggestionState::New,
                    None,
                ))
                .components(suggestion_embed::buttons()),
        )
        .await?;

    let stored = SuggestionService::new(&ctx.data().db)
        .submit(CreateSuggestionParam {
            initiator_id,
            message_id: message.id.get(),
            content: content.clone(),
        })
        .await;
    let suggestion = match stored {
        Ok(suggestion) => suggestion,
        Err(e) => {
            if let Err(delete_err) = message.delete(ctx).await {
                tracing::error!("Failed to delete orphaned suggestion message: {:?}", delete_err);
            }
            return Err(e);
        }
    };

    message
        .edit(
            ctx,
            EditMessage::new().embed(suggestion_embed::suggestion(
                initiator_id,
                &content,
                SuggestionState::New,
                Some(suggestion.id),
            )),
        )
        .await?;
    message
        .react(ctx, ReactionType::Unicode(UPVOTE.to_string()))
        .await?;
    message
        .react(ctx, ReactionType::Unicode(DOWNVOTE.to_string()))
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Suggestion sent",
            format!("Your suggestion has been posted in <#{}>.", channel_id),
        ),
    )
    .await
}

/// List suggestions awaiting a decision.
#[poise::command(prefix_command, slash_command, guild_only, check = "checks::is_staff")]
pub async fn suggestions(ctx: Context<'_>) -> Result<(), AppError> {
    let pending = SuggestionService::new(&ctx.data().db).pending().await?;

    if pending.is_empty() {
        return reply(
            ctx,
            EmbedStyle::Information.embed(
                "No pending suggestions",
                "Every suggestion has been decided.",
            ),
        )
        .await;
    }

    let lines = pending
        .iter()
        .map(|s| format!("**#{}** by <@{}>: {}", s.id, s.initiator_id, s.content))
        .collect();

    paginate::send_paginated(
        ctx,
        &format!("Pending suggestions ({})", pending.len()),
        lines,
    )
    .await
}

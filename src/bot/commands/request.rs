//! Patron requests.

use serenity::all::{ChannelId, CreateMessage};

use crate::{
    bot::{
        commands::reply,
        embed::{request as request_embed, EmbedStyle},
    },
    error::AppError,
    model::request::{CreateRequestParam, RequestState},
    service::request::RequestService,
    state::Context,
};

/// Send a request to the staff. Patrons only.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn request(
    ctx: Context<'_>,
    #[description = "What you would like"]
    #[rest]
    description: String,
) -> Result<(), AppError> {
    let data = ctx.data();

    let is_patron = match ctx.author_member().await {
        Some(member) => member.roles.iter().any(|r| r.get() == data.config.roles.patron),
        None => false,
    };
    RequestService::check_submission(&data.requests, is_patron)?;

    let initiator_id = ctx.author().id.get();
    let message = ChannelId::new(data.config.channels.requests)
        .send_message(
            ctx,
            CreateMessage::new()
                .embed(request_embed::request(
                    initiator_id,
                    &description,
                    RequestState::Pending,
                ))
                .components(request_embed::buttons(RequestState::Pending)),
        )
        .await?;

    let stored = RequestService::new(&data.db)
        .submit(CreateRequestParam {
            initiator_id,
            message_id: message.id.get(),
            description,
        })
        .await;

    if let Err(e) = stored {
        if let Err(delete_err) = message.delete(ctx).await {
            tracing::error!("Failed to delete orphaned request message: {:?}", delete_err);
        }
        return Err(e);
    }

    reply(
        ctx,
        EmbedStyle::Success.embed("Request sent!", "Your request has been sent to the staff."),
    )
    .await
}

/// Open or close request submissions.
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn togglerequests(ctx: Context<'_>) -> Result<(), AppError> {
    let open = ctx.data().requests.toggle();

    tracing::info!(
        "Requests {} by {}",
        if open { "enabled" } else { "disabled" },
        ctx.author().id
    );

    let embed = if open {
        EmbedStyle::Success.embed("Enabled requests", "Members can now send requests.")
    } else {
        EmbedStyle::Success.embed("Disabled requests", "Requests are no longer accepted.")
    };

    reply(ctx, embed).await
}

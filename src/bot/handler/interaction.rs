//! Button presses on request and suggestion messages.

use serenity::all::{
    ChannelId, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, EditMessage,
    Interaction, MessageId, UserId,
};

use crate::{
    bot::{
        checks,
        embed::{request as request_embed, suggestion as suggestion_embed},
        error::CommandFailure,
    },
    error::AppError,
    model::{
        actor::Actor,
        request::{Request, RequestAction, RequestState},
        suggestion::SuggestionAction,
    },
    service::{request::RequestService, suggestion::SuggestionService},
    state::Data,
};

/// Handle interaction creation
///
/// Only component interactions with a request or suggestion ID are handled here.
/// Slash commands are dispatched by the framework, and pagination buttons by
/// their collector.
pub async fn handle_interaction_create(data: &Data, ctx: Context, interaction: Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };

    let custom_id = component.data.custom_id.as_str();
    let suggestion_action = SuggestionAction::from_custom_id(custom_id);
    let request_action = RequestAction::from_custom_id(custom_id);
    if suggestion_action.is_none() && request_action.is_none() {
        return;
    }

    let actor = component
        .member
        .as_ref()
        .map(|member| checks::actor_for(&ctx.cache, member, &data.config.roles));
    if !may_press(actor) {
        respond_ephemeral(&ctx, &component, CommandFailure::AccessDenied(None).embed()).await;
        return;
    }

    let result = match (suggestion_action, request_action) {
        (Some(action), _) => handle_suggestion(data, &ctx, &component, action).await,
        (_, Some(action)) => handle_request(data, &ctx, &component, action).await,
        (None, None) => Ok(()),
    };

    if let Err(e) = result {
        let failure = CommandFailure::from_app_error(&e);
        if failure == CommandFailure::Other {
            tracing::error!("Failed to handle button '{}': {:?}", custom_id, e);
        }
        respond_ephemeral(&ctx, &component, failure.embed()).await;
    }
}

/// Request and suggestion buttons are for staff and administrators. Presses
/// outside a guild carry no member and are refused.
fn may_press(actor: Option<Actor>) -> bool {
    actor.is_some_and(|actor| actor.can_moderate())
}

async fn handle_suggestion(
    data: &Data,
    ctx: &Context,
    component: &ComponentInteraction,
    action: SuggestionAction,
) -> Result<(), AppError> {
    let decided = SuggestionService::new(&data.db)
        .decide(component.message.id.get(), action)
        .await?;

    let Some(suggestion) = decided else {
        acknowledge(ctx, component).await?;
        return Ok(());
    };

    let embed = suggestion_embed::suggestion(
        suggestion.initiator_id,
        &suggestion.content,
        suggestion.state,
        Some(suggestion.id),
    );
    update_message(ctx, component, embed, vec![]).await?;

    tracing::info!(
        "Suggestion #{} set to {:?} by {}",
        suggestion.id,
        suggestion.state,
        component.user.id
    );

    if let Some(notice) = suggestion_embed::decision_notice(suggestion.state, &suggestion.content)
    {
        send_dm(ctx, suggestion.initiator_id, notice).await;
    }

    Ok(())
}

async fn handle_request(
    data: &Data,
    ctx: &Context,
    component: &ComponentInteraction,
    action: RequestAction,
) -> Result<(), AppError> {
    let transition = RequestService::new(&data.db)
        .apply(&data.requests, component.message.id.get(), action)
        .await?;

    let Some(transition) = transition else {
        acknowledge(ctx, component).await?;
        return Ok(());
    };
    let request = &transition.request;

    update_message(
        ctx,
        component,
        request_embed::request(request.initiator_id, &request.description, request.state),
        request_embed::buttons(request.state),
    )
    .await?;

    if let Some(notice) = request_embed::state_notice(request.state) {
        send_dm(ctx, request.initiator_id, notice).await;
    }

    match request.state {
        RequestState::Active => update_active_request_info(data, ctx, Some(request)).await,
        RequestState::Finished => update_active_request_info(data, ctx, None).await,
        RequestState::Pending | RequestState::Denied => {}
    }

    Ok(())
}

/// Mirrors the active request in the information channel.
async fn update_active_request_info(data: &Data, ctx: &Context, active: Option<&Request>) {
    let embed = match active {
        Some(request) => {
            let requester = match UserId::new(request.initiator_id).to_user(ctx).await {
                Ok(user) => user.name,
                Err(_) => format!("<@{}>", request.initiator_id),
            };
            request_embed::active_request_info(Some((request, requester.as_str())))
        }
        None => request_embed::active_request_info(None),
    };

    let channel_id = ChannelId::new(data.config.channels.information);
    let message_id = MessageId::new(data.config.messages.active_request);

    if let Err(e) = ctx
        .http
        .edit_message(channel_id, message_id, &EditMessage::new().embed(embed), vec![])
        .await
    {
        tracing::error!("Failed to update active request message: {:?}", e);
    }
}

async fn update_message(
    ctx: &Context,
    component: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), AppError> {
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components),
            ),
        )
        .await?;

    Ok(())
}

async fn acknowledge(ctx: &Context, component: &ComponentInteraction) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    Ok(())
}

async fn respond_ephemeral(ctx: &Context, component: &ComponentInteraction, embed: CreateEmbed) {
    if let Err(e) = component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await
    {
        tracing::error!("Failed to send ephemeral response: {:?}", e);
    }
}

/// DMs a member. Closed DMs are only logged.
async fn send_dm(ctx: &Context, user_id: u64, embed: CreateEmbed) {
    let result = match UserId::new(user_id).create_dm_channel(ctx).await {
        Ok(dm) => dm
            .send_message(ctx, CreateMessage::new().embed(embed))
            .await
            .map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::warn!("Failed to DM {}: {}", user_id, e);
    }
}

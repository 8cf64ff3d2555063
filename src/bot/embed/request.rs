//! Request embeds and buttons.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::embed::style::{colors, icons, styled, EmbedStyle},
    model::request::{Request, RequestAction, RequestState},
};

/// Embed of a request in the given state.
pub fn request(initiator_id: u64, description: &str, state: RequestState) -> CreateEmbed {
    let base = match state {
        RequestState::Pending => styled(colors::INFORMATION, icons::NEW_REQUEST, "New request", ""),
        RequestState::Active => styled(colors::ACTIVE, icons::ACTIVE_REQUEST, "Active request", ""),
        RequestState::Finished => EmbedStyle::Success.embed("Finished request", ""),
        RequestState::Denied => styled(colors::ERROR, icons::DENIED_REQUEST, "Denied request", ""),
    };

    base.field("Initiator", format!("<@{}>", initiator_id), true)
        .field("Description", description, false)
}

/// Buttons shown under a request in the given state.
pub fn buttons(state: RequestState) -> Vec<CreateActionRow> {
    match state {
        RequestState::Pending => vec![CreateActionRow::Buttons(vec![
            CreateButton::new(RequestAction::Deny.custom_id())
                .label("Deny")
                .style(ButtonStyle::Danger),
            CreateButton::new(RequestAction::Accept.custom_id())
                .label("Accept")
                .style(ButtonStyle::Success),
        ])],
        RequestState::Active => vec![CreateActionRow::Buttons(vec![CreateButton::new(
            RequestAction::Finish.custom_id(),
        )
        .label("Finish")
        .style(ButtonStyle::Primary)])],
        RequestState::Finished | RequestState::Denied => vec![],
    }
}

/// Contents of the information channel's active-request message.
pub fn active_request_info(active: Option<(&Request, &str)>) -> CreateEmbed {
    match active {
        Some((request, requester)) => {
            styled(
                colors::ACTIVE,
                icons::ACTIVE_REQUEST,
                "Active request",
                request.description.clone(),
            )
            .footer(CreateEmbedFooter::new(format!("Requested by {}", requester)))
        }
        None => EmbedStyle::Information.embed(
            "No active request",
            "There is currently no active request.",
        ),
    }
}

/// DM sent to the initiator after a state change.
pub fn state_notice(state: RequestState) -> Option<CreateEmbed> {
    let embed = match state {
        RequestState::Denied => EmbedStyle::Error.embed(
            "Request denied",
            "Your request has been denied by the staff.",
        ),
        RequestState::Active => EmbedStyle::Success.embed(
            "Request accepted",
            "Your request has been accepted and is now being worked on.",
        ),
        RequestState::Finished => EmbedStyle::Success.embed(
            "Request finished",
            "Your request has been finished. Thanks for your support!",
        ),
        RequestState::Pending => return None,
    };

    Some(embed)
}

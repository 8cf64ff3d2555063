use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::embed::style::EmbedStyle,
    model::suggestion::{SuggestionAction, SuggestionState},
};

/// Embed of a suggestion. `id` is absent until the suggestion is stored.
pub fn suggestion(
    initiator_id: u64,
    content: &str,
    state: SuggestionState,
    id: Option<i32>,
) -> CreateEmbed {
    let embed = match state {
        SuggestionState::New => EmbedStyle::Information.embed("New suggestion", content),
        SuggestionState::Approved => EmbedStyle::Success.embed("Approved suggestion", content),
        SuggestionState::Rejected => EmbedStyle::Error.embed("Rejected suggestion", content),
    }
    .field("Author", format!("<@{}>", initiator_id), true);

    match id {
        Some(id) => embed.footer(CreateEmbedFooter::new(format!("Suggestion #{}", id))),
        None => embed,
    }
}

pub fn buttons() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(SuggestionAction::APPROVE_ID)
            .label("Approve")
            .style(ButtonStyle::Success),
        CreateButton::new(SuggestionAction::REJECT_ID)
            .label("Reject")
            .style(ButtonStyle::Danger),
    ])]
}

/// DM sent to the author once staff decided.
pub fn decision_notice(state: SuggestionState, content: &str) -> Option<CreateEmbed> {
    match state {
        SuggestionState::Approved => Some(EmbedStyle::Success.embed(
            "Suggestion approved",
            format!("Your suggestion has been approved:\n>>> {}", content),
        )),
        SuggestionState::Rejected => Some(EmbedStyle::Error.embed(
            "Suggestion rejected",
            format!("Your suggestion has been rejected:\n>>> {}", content),
        )),
        SuggestionState::New => None,
    }
}

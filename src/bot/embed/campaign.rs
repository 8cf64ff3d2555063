//! Campaign vote embeds.

use serenity::all::CreateEmbed;

use crate::{
    bot::embed::style::{colors, icons, styled},
    model::campaign::{self, Campaign, CampaignOutcome},
};

/// Embed of a running vote.
pub fn new_campaign(campaign: &Campaign) -> CreateEmbed {
    with_fields(
        styled(colors::INFORMATION, icons::NEW_CAMPAIGN, "New campaign", ""),
        campaign,
        &format!(
            "This campaign needs to receive {} votes in favour in order to succeed.",
            campaign.minimal_votes
        ),
    )
}

/// Embed of a decided vote, with the outcome in the Voting field.
pub fn resolved_campaign(campaign: &Campaign, outcome: &CampaignOutcome) -> CreateEmbed {
    let base = match outcome {
        CampaignOutcome::Accepted { .. } => styled(
            colors::SUCCESS,
            icons::ACCEPTED_CAMPAIGN,
            "Accepted campaign",
            "",
        ),
        CampaignOutcome::Denied { .. } => styled(
            colors::ERROR,
            icons::DENIED_CAMPAIGN,
            "Denied campaign",
            "",
        ),
    };

    with_fields(base, campaign, outcome.reason())
}

fn with_fields(embed: CreateEmbed, campaign: &Campaign, voting: &str) -> CreateEmbed {
    embed
        .field("Initiator", format!("<@{}>", campaign.initiator_id), true)
        .field("Member", format!("<@{}>", campaign.user_id), true)
        .field("Type", campaign::kind_title(campaign.kind), true)
        .field("Reason", campaign.reason.clone(), false)
        .field("Voting", voting, false)
}

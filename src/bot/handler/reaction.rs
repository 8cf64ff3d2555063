use chrono::Utc;
use serenity::all::{Context, Reaction, ReactionType};

use crate::{
    service::{
        campaign::CampaignService,
        campaign_resolution::{CampaignResolutionService, VOTE_IN_FAVOUR},
    },
    state::Data,
};

/// Handle a reaction being added
///
/// Votes in favour on a campaign message trigger a tally so a campaign is
/// accepted as soon as it reaches its threshold.
pub async fn handle_reaction_add(data: &Data, ctx: Context, reaction: Reaction) {
    if reaction.channel_id.get() != data.config.channels.campaigns {
        return;
    }
    if !matches!(&reaction.emoji, ReactionType::Unicode(e) if e == VOTE_IN_FAVOUR) {
        return;
    }

    let campaign = match CampaignService::new(&data.db)
        .find_by_message(reaction.message_id.get())
        .await
    {
        Ok(Some(campaign)) => campaign,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to find campaign for reaction: {:?}", e);
            return;
        }
    };

    if let Err(e) = CampaignResolutionService::new(&data.db, ctx.http.clone(), &data.config)
        .tally(&campaign, Utc::now())
        .await
    {
        tracing::error!(
            "Failed to tally campaign for {}: {:?}",
            campaign.user_id,
            e
        );
    }
}

//! Resolves campaigns: tallies votes and applies the outcome on Discord.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, EditMessage, GuildId, Message, MessageId, ReactionType, RoleId, UserId},
    http::Http,
};

use crate::{
    bot::embed::campaign::resolved_campaign,
    config::Config,
    error::AppError,
    model::campaign::{self, Campaign, CampaignKind, CampaignOutcome},
    service::campaign::CampaignService,
};

/// Emoji counted as a vote in favour.
pub const VOTE_IN_FAVOUR: &str = "✅";
pub const VOTE_AGAINST: &str = "❌";

/// What a tally found at a campaign's vote message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VoteMessage {
    /// The message exists and carries this many votes in favour.
    Votes(u64),
    Deleted,
}

pub struct CampaignResolutionService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
    config: &'a Config,
}

impl<'a> CampaignResolutionService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, config: &'a Config) -> Self {
        Self { db, http, config }
    }

    /// Applies `outcome` to `campaign`.
    ///
    /// The row is removed first; when another caller already removed it nothing
    /// else happens. Discord failures after that point are logged and skipped so
    /// the remaining steps still run.
    ///
    /// # Returns
    /// - `Ok(true)` - This call resolved the campaign
    /// - `Ok(false)` - The campaign was already resolved
    /// - `Err(AppError)` - The row could not be removed
    pub async fn resolve(
        &self,
        campaign: &Campaign,
        outcome: CampaignOutcome,
    ) -> Result<bool, AppError> {
        if !CampaignService::new(self.db).take(campaign.user_id).await? {
            return Ok(false);
        }

        let channel_id = ChannelId::new(self.config.channels.campaigns);
        let message_id = MessageId::new(campaign.message_id);

        let edit = EditMessage::new().embed(resolved_campaign(campaign, &outcome));
        if let Err(e) = self
            .http
            .edit_message(channel_id, message_id, &edit, vec![])
            .await
        {
            tracing::warn!(
                "Failed to edit vote message {} for campaign of {}: {}",
                message_id,
                campaign.user_id,
                e
            );
        }

        if let Err(e) = self
            .http
            .delete_message_reactions(channel_id, message_id)
            .await
        {
            tracing::warn!("Failed to clear reactions on vote message {}: {}", message_id, e);
        }

        if outcome.is_accepted() {
            self.promote(campaign).await;
        }

        tracing::info!(
            "Campaign for {} ({}) resolved: {}",
            campaign.user_id,
            campaign::kind_name(campaign.kind),
            outcome.reason()
        );

        Ok(true)
    }

    /// Counts the votes on a campaign's message and resolves it when decided.
    ///
    /// A vote message that no longer exists denies the campaign.
    pub async fn tally(&self, campaign: &Campaign, now: DateTime<Utc>) -> Result<bool, AppError> {
        let channel_id = ChannelId::new(self.config.channels.campaigns);

        let found = match self
            .http
            .get_message(channel_id, MessageId::new(campaign.message_id))
            .await
        {
            Ok(message) => VoteMessage::Votes(count_in_favour(&message)),
            Err(e) if is_not_found(&e) => VoteMessage::Deleted,
            Err(e) => return Err(e.into()),
        };

        match tally_outcome(campaign, found, now) {
            Some(outcome) => self.resolve(campaign, outcome).await,
            None => Ok(false),
        }
    }

    /// Tallies every running campaign. Failures are logged per campaign.
    pub async fn tally_all(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let campaigns = CampaignService::new(self.db).get_all().await?;
        let mut resolved = 0;

        for campaign in &campaigns {
            match self.tally(campaign, now).await {
                Ok(true) => resolved += 1,
                Ok(false) => {}
                Err(e) => tracing::error!(
                    "Failed to tally campaign for {}: {:?}",
                    campaign.user_id,
                    e
                ),
            }
        }

        Ok(resolved)
    }

    async fn promote(&self, campaign: &Campaign) {
        let guild_id = GuildId::new(self.config.guild);
        let user_id = UserId::new(campaign.user_id);
        let regular = RoleId::new(self.config.roles.regular);
        let reason = Some("Campaign accepted");

        let result = match campaign.kind {
            CampaignKind::Regular => {
                self.http
                    .add_member_role(guild_id, user_id, regular, reason)
                    .await
            }
            CampaignKind::Associate => {
                let associate = RoleId::new(self.config.roles.associate);
                if let Err(e) = self
                    .http
                    .remove_member_role(guild_id, user_id, regular, reason)
                    .await
                {
                    tracing::warn!("Failed to remove regular role from {}: {}", user_id, e);
                }
                self.http
                    .add_member_role(guild_id, user_id, associate, reason)
                    .await
            }
        };

        if let Err(e) = result {
            tracing::error!(
                "Failed to grant {} role to {}: {:?}",
                campaign::kind_name(campaign.kind),
                user_id,
                e
            );
        }
    }
}

fn tally_outcome(
    campaign: &Campaign,
    found: VoteMessage,
    now: DateTime<Utc>,
) -> Option<CampaignOutcome> {
    match found {
        VoteMessage::Deleted => Some(CampaignOutcome::message_deleted()),
        VoteMessage::Votes(in_favour) => campaign.verdict(in_favour, now),
    }
}

/// Votes in favour on a vote message, excluding the bot's own reaction.
pub fn count_in_favour(message: &Message) -> u64 {
    votes_in_favour(
        message
            .reactions
            .iter()
            .map(|r| (&r.reaction_type, r.count, r.me)),
    )
}

/// Counts the ✅ reaction given `(emoji, count, includes_bot)` triples.
fn votes_in_favour<'r>(reactions: impl IntoIterator<Item = (&'r ReactionType, u64, bool)>) -> u64 {
    reactions
        .into_iter()
        .find(|(emoji, _, _)| matches!(emoji, ReactionType::Unicode(e) if e == VOTE_IN_FAVOUR))
        .map(|(_, count, includes_bot)| campaign::in_favour(count, includes_bot))
        .unwrap_or(0)
}

fn is_not_found(error: &serenity::Error) -> bool {
    match error {
        serenity::Error::Http(e) => is_not_found_status(e.status_code().map(|s| s.as_u16())),
        _ => false,
    }
}

fn is_not_found_status(status: Option<u16>) -> bool {
    status == Some(404)
}

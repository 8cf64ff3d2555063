//! Campaign domain models, vote threshold and verdict rules.

use chrono::{DateTime, Duration, Utc};

pub use entity::campaign::CampaignKind;

use crate::{config::RoleConfig, error::AppError, util::parse::parse_u64_from_string};

/// How long a campaign collects votes before it is denied.
pub const VOTING_PERIOD_HOURS: i64 = 48;

/// A running promotion vote.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    /// Member being promoted; at most one campaign per member.
    pub user_id: u64,
    pub kind: CampaignKind,
    pub initiator_id: u64,
    pub reason: String,
    /// Vote message in the campaigns channel.
    pub message_id: u64,
    /// Votes in favour needed for acceptance.
    pub minimal_votes: u32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Campaign {
    /// Converts an entity model to a campaign domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The converted campaign
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored Discord ID is not a u64
    pub fn from_entity(entity: entity::campaign::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            kind: entity.kind,
            initiator_id: parse_u64_from_string(entity.initiator_id)?,
            reason: entity.reason,
            message_id: parse_u64_from_string(entity.message_id)?,
            minimal_votes: entity.minimal_votes.max(0) as u32,
            start_at: entity.start_at,
            end_at: entity.end_at,
        })
    }

    /// Decides the campaign given the current votes in favour.
    ///
    /// Acceptance wins over expiry, so a campaign reaching its threshold in the
    /// same sweep that it expires is still accepted.
    ///
    /// # Returns
    /// - `Some(CampaignOutcome)` - The campaign is decided
    /// - `None` - Voting continues
    pub fn verdict(&self, in_favour: u64, now: DateTime<Utc>) -> Option<CampaignOutcome> {
        if in_favour >= u64::from(self.minimal_votes) {
            return Some(CampaignOutcome::accepted_by_vote(self.minimal_votes));
        }
        if now >= self.end_at {
            return Some(CampaignOutcome::denied_by_timeout());
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct CreateCampaignParam {
    pub user_id: u64,
    pub kind: CampaignKind,
    pub initiator_id: u64,
    pub reason: String,
    pub message_id: u64,
    pub minimal_votes: u32,
    pub start_at: DateTime<Utc>,
}

impl CreateCampaignParam {
    pub fn end_at(&self) -> DateTime<Utc> {
        self.start_at + Duration::hours(VOTING_PERIOD_HOURS)
    }

    /// The campaign as it will be stored, used to render the vote message before
    /// its ID is known.
    pub fn preview(&self) -> Campaign {
        Campaign {
            user_id: self.user_id,
            kind: self.kind,
            initiator_id: self.initiator_id,
            reason: self.reason.clone(),
            message_id: self.message_id,
            minimal_votes: self.minimal_votes,
            start_at: self.start_at,
            end_at: self.end_at(),
        }
    }
}

/// The member a campaign is requested for, reduced to the roles that matter.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub user_id: u64,
    pub is_regular: bool,
    pub is_associate: bool,
}

impl Candidate {
    pub fn holds(&self, kind: CampaignKind) -> bool {
        match kind {
            CampaignKind::Regular => self.is_regular,
            CampaignKind::Associate => self.is_associate,
        }
    }
}

/// How a campaign ended and the text shown in the Voting field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignOutcome {
    Accepted { reason: String },
    Denied { reason: String },
}

impl CampaignOutcome {
    pub fn accepted_by_vote(minimal_votes: u32) -> Self {
        CampaignOutcome::Accepted {
            reason: format!(
                "This campaign received {} votes and has thus been accepted.",
                minimal_votes
            ),
        }
    }

    pub fn accepted_by_admin() -> Self {
        CampaignOutcome::Accepted {
            reason: "This campaign was accepted by an administrator.".to_string(),
        }
    }

    pub fn denied_by_timeout() -> Self {
        CampaignOutcome::Denied {
            reason: format!(
                "This campaign was denied because it didn't receive enough votes within {} hours.",
                VOTING_PERIOD_HOURS
            ),
        }
    }

    pub fn message_deleted() -> Self {
        CampaignOutcome::Denied {
            reason: "This campaign was denied because its vote message was deleted.".to_string(),
        }
    }

    pub fn cancelled_by_admin() -> Self {
        CampaignOutcome::Denied {
            reason: "This campaign was cancelled by an administrator.".to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, CampaignOutcome::Accepted { .. })
    }

    pub fn reason(&self) -> &str {
        match self {
            CampaignOutcome::Accepted { reason } | CampaignOutcome::Denied { reason } => reason,
        }
    }
}

/// Votes in favour needed for `eligible_voters` promoted members: half, rounded up,
/// and never less than one.
pub fn minimal_votes(eligible_voters: usize) -> u32 {
    let half = eligible_voters.div_ceil(2);
    u32::try_from(half).unwrap_or(u32::MAX).max(1)
}

/// Whether a member counts towards the electorate: a human holding the
/// Associate, Regular or Staff role.
pub fn is_eligible_voter(is_bot: bool, role_ids: &[u64], roles: &RoleConfig) -> bool {
    !is_bot
        && role_ids
            .iter()
            .any(|id| *id == roles.associate || *id == roles.regular || *id == roles.staff)
}

/// Votes in favour given the ✅ reaction count, excluding the bot's own reaction.
pub fn in_favour(count: u64, includes_bot: bool) -> u64 {
    if includes_bot {
        count.saturating_sub(1)
    } else {
        count
    }
}

/// Lowercase name used in prompts, e.g. "regular".
pub fn kind_name(kind: CampaignKind) -> &'static str {
    match kind {
        CampaignKind::Regular => "regular",
        CampaignKind::Associate => "associate",
    }
}

/// Capitalized name used in embeds, e.g. "Regular".
pub fn kind_title(kind: CampaignKind) -> &'static str {
    match kind {
        CampaignKind::Regular => "Regular",
        CampaignKind::Associate => "Associate",
    }
}

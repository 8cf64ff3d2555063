use sea_orm::DatabaseConnection;

use crate::{
    data::campaign::CampaignRepository,
    error::AppError,
    model::campaign::{self, Campaign, CampaignKind, Candidate, CreateCampaignParam},
};

pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a campaign of `kind` may be started for `candidate`.
    ///
    /// Rejections are checked in order: already holding the role, being an
    /// associate when Regular is requested, and an existing campaign.
    pub async fn check_eligibility(
        &self,
        candidate: &Candidate,
        kind: CampaignKind,
    ) -> Result<(), AppError> {
        if candidate.holds(kind) {
            return Err(AppError::rejected(
                "User already promoted",
                format!(
                    "The user is already promoted to {}.",
                    campaign::kind_name(kind)
                ),
            ));
        }

        if candidate.is_associate && kind == CampaignKind::Regular {
            return Err(AppError::rejected(
                "User already associate",
                "The user is already an associate, which ranks above regular.",
            ));
        }

        if CampaignRepository::new(self.db)
            .find_by_user(candidate.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::rejected(
                "User already in campaign",
                "There is already a vote in progress for that user.",
            ));
        }

        Ok(())
    }

    pub async fn start(&self, param: CreateCampaignParam) -> Result<Campaign, AppError> {
        let campaign = CampaignRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Campaign started for {} ({}) by {}, needs {} votes",
            campaign.user_id,
            campaign::kind_name(campaign.kind),
            campaign.initiator_id,
            campaign.minimal_votes
        );

        Ok(campaign)
    }

    /// Gets the campaign running for a member, failing with "User not in campaign".
    pub async fn require(&self, user_id: u64) -> Result<Campaign, AppError> {
        CampaignRepository::new(self.db)
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::rejected(
                    "User not in campaign",
                    "There is no vote in progress for that user.",
                )
            })
    }

    pub async fn find_by_message(&self, message_id: u64) -> Result<Option<Campaign>, AppError> {
        CampaignRepository::new(self.db)
            .find_by_message(message_id)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Campaign>, AppError> {
        CampaignRepository::new(self.db).get_all().await
    }

    /// Removes a member's campaign so it can be resolved.
    ///
    /// Only the caller that actually removes the row gets `true`, so a campaign
    /// reached concurrently by a reaction and the scheduled tally resolves once.
    pub async fn take(&self, user_id: u64) -> Result<bool, AppError> {
        CampaignRepository::new(self.db).delete(user_id).await
    }
}

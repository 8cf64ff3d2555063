use chrono::Utc;

use crate::{
    error::AppError,
    model::campaign::{CampaignKind, Candidate, CreateCampaignParam},
    service::campaign::CampaignService,
};
use test_utils::{builder::TestBuilder, factory};

mod check_eligibility;

fn candidate(user_id: u64) -> Candidate {
    Candidate {
        user_id,
        is_regular: false,
        is_associate: false,
    }
}

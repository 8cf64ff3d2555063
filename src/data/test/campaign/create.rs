use super::*;

/// Tests starting a campaign.
///
/// Verifies the voting window is set to 48 hours after the start.
///
/// Expected: Ok with campaign stored
#[tokio::test]
async fn creates_campaign_with_voting_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_at = Utc::now();
    let repo = CampaignRepository::new(db);
    let campaign = repo
        .create(CreateCampaignParam {
            user_id: 10,
            kind: CampaignKind::Associate,
            initiator_id: 20,
            reason: "Great mentor".to_string(),
            message_id: 30,
            minimal_votes: 3,
            start_at,
        })
        .await?;

    assert_eq!(campaign.user_id, 10);
    assert_eq!(campaign.kind, CampaignKind::Associate);
    assert_eq!(campaign.minimal_votes, 3);
    assert_eq!(campaign.end_at - campaign.start_at, Duration::hours(48));
    assert_eq!(entity::prelude::Campaign::find().count(db).await?, 1);

    Ok(())
}

/// Tests starting a second campaign for the same member.
///
/// Expected: Err from the primary key constraint
#[tokio::test]
async fn fails_for_member_already_in_campaign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::campaign::CampaignFactory::new(db)
        .user_id("10")
        .build()
        .await?;

    let result = CampaignRepository::new(db)
        .create(CreateCampaignParam {
            user_id: 10,
            kind: CampaignKind::Regular,
            initiator_id: 20,
            reason: String::new(),
            message_id: 31,
            minimal_votes: 1,
            start_at: Utc::now(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

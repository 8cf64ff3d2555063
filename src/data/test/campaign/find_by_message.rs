use super::*;

/// Tests resolving a reaction's message to its campaign.
///
/// Expected: Ok(Some) with the campaign owning the message
#[tokio::test]
async fn finds_campaign_by_vote_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_campaign(db).await?;
    let target = factory::campaign::CampaignFactory::new(db)
        .message_id("777")
        .build()
        .await?;

    let repo = CampaignRepository::new(db);
    let found = repo.find_by_message(777).await?.unwrap();

    assert_eq!(found.user_id.to_string(), target.user_id);
    assert!(repo.find_by_message(778).await?.is_none());

    Ok(())
}

use super::*;

/// Expected: Ok(Some) for the promoted member, Ok(None) for anyone else
#[tokio::test]
async fn finds_campaign_by_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::campaign::CampaignFactory::new(db)
        .user_id("10")
        .kind(CampaignKind::Associate)
        .build()
        .await?;

    let repo = CampaignRepository::new(db);

    let found = repo.find_by_user(10).await?;
    assert_eq!(found.map(|c| c.kind), Some(CampaignKind::Associate));
    assert!(repo.find_by_user(11).await?.is_none());

    Ok(())
}

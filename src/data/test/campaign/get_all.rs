use super::*;

/// Expected: Ok with every running campaign
#[tokio::test]
async fn returns_all_campaigns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_campaign(db).await?;
    factory::create_campaign(db).await?;

    let campaigns = CampaignRepository::new(db).get_all().await?;

    assert_eq!(campaigns.len(), 2);

    Ok(())
}

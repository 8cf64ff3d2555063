use super::*;

/// Tests removing a resolved campaign.
///
/// Expected: Ok(true) first, Ok(false) once the row is gone
#[tokio::test]
async fn deletes_campaign_once() -> Result<(), AppError> {
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

    let repo = CampaignRepository::new(db);

    assert!(repo.delete(10).await?);
    assert!(!repo.delete(10).await?);
    assert_eq!(entity::prelude::Campaign::find().count(db).await?, 0);

    Ok(())
}

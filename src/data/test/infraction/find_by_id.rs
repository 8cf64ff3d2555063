use super::*;

/// Expected: Ok(Some) for a stored UUID, Ok(None) for an unknown one
#[tokio::test]
async fn finds_infraction_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_infraction(db, "10").await?;

    let repo = InfractionRepository::new(db);

    assert_eq!(repo.find_by_id(created.id).await?.map(|i| i.id), Some(created.id));
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

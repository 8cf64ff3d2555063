use super::*;

/// Tests unregistering a rank.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_registered_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db, "42").await?;

    let repo = RoleRegistryRepository::new(db, RoleRegistry::Rank);
    let deleted = repo.delete(42).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Rank::find().count(db).await?, 0);

    Ok(())
}

/// Tests unregistering a role that is not a rank.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RoleRegistryRepository::new(db, RoleRegistry::Rank)
        .delete(42)
        .await?;

    assert!(!deleted);

    Ok(())
}

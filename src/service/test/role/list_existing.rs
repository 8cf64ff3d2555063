use super::*;

/// Tests listing ranks while one of the registered roles was deleted from the guild.
///
/// Verifies that only existing roles are returned and the stale row is pruned.
///
/// Expected: Ok with one role, stale row deleted
#[tokio::test]
async fn prunes_deleted_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db, "100").await?;
    factory::create_rank(db, "200").await?;

    let roles = guild_roles(&[(100, "Rust")]);
    let service = RoleRegistryService::new(db, RoleRegistry::Rank);

    let existing = service.list_existing(&roles).await?;
    assert_eq!(existing.len(), 1);
    assert_eq!(existing[0].name, "Rust");

    let result = service.remove(200).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests finding a rank by name ignoring case.
///
/// Expected: Ok(Some) for a registered rank, Ok(None) for an unregistered role
#[tokio::test]
async fn finds_rank_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_rank(db, "100").await?;

    let roles = guild_roles(&[(100, "Rust"), (300, "Staff")]);
    let service = RoleRegistryService::new(db, RoleRegistry::Rank);

    let found = service.find_by_name("rust", &roles).await?;
    assert_eq!(found.map(|r| r.id.get()), Some(100));
    assert!(service.find_by_name("staff", &roles).await?.is_none());

    Ok(())
}

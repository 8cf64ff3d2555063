use super::*;

/// Tests registering an auto-role twice.
///
/// Expected: Ok first, then Err(Rejected) naming the auto role
#[tokio::test]
async fn rejects_duplicate_auto_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutoRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoleRegistryService::new(db, RoleRegistry::AutoRole);
    service.add(500).await?;

    let result = service.add(500).await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref description, .. })
            if description == "There already exists an auto role with that name."
    ));

    Ok(())
}

/// Tests that ranks and auto-roles are kept in separate registries.
///
/// Expected: Ok, the same role ID can be both
#[tokio::test]
async fn registries_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rank)
        .with_table(entity::prelude::AutoRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RoleRegistryService::new(db, RoleRegistry::Rank).add(500).await?;
    RoleRegistryService::new(db, RoleRegistry::AutoRole).add(500).await?;

    RoleRegistryService::new(db, RoleRegistry::Rank).remove(500).await?;

    let roles = guild_roles(&[(500, "Member")]);
    let auto_roles = RoleRegistryService::new(db, RoleRegistry::AutoRole)
        .list_existing(&roles)
        .await?;
    assert_eq!(auto_roles.len(), 1);

    Ok(())
}

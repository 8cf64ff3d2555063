use super::*;

/// Tests pruning several auto-roles at once.
///
/// Expected: Ok with only the listed roles removed
#[tokio::test]
async fn deletes_listed_roles_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutoRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_auto_role(db, "1").await?;
    factory::create_auto_role(db, "2").await?;
    factory::create_auto_role(db, "3").await?;

    let repo = RoleRegistryRepository::new(db, RoleRegistry::AutoRole);
    let removed = repo.delete_many(&[1, 3]).await?;

    assert_eq!(removed, 2);
    assert!(repo.exists(2).await?);
    assert!(!repo.exists(1).await?);

    Ok(())
}

/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn ignores_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutoRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_auto_role(db, "1").await?;

    let removed = RoleRegistryRepository::new(db, RoleRegistry::AutoRole)
        .delete_many(&[])
        .await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::AutoRole::find().count(db).await?, 1);

    Ok(())
}

use super::*;

/// Expected: Ok with every registered auto-role
#[tokio::test]
async fn returns_all_auto_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutoRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_auto_role(db, "1").await?;
    factory::create_auto_role(db, "2").await?;

    let repo = RoleRegistryRepository::new(db, RoleRegistry::AutoRole);
    let mut ids: Vec<u64> = repo.get_all().await?.iter().map(|e| e.role_id).collect();
    ids.sort();

    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

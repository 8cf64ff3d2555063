use super::*;

/// Tests ending a member's mutes early.
///
/// Expected: Ok with only that member's mutes removed
#[tokio::test]
async fn deletes_only_members_mutes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_mute(db, "10").await?;
    factory::create_mute(db, "10").await?;
    factory::create_mute(db, "11").await?;

    let repo = MuteRepository::new(db);
    let removed = repo.delete_by_user(10).await?;

    assert_eq!(removed, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, 11);

    Ok(())
}

use super::*;

/// Tests deleting a mute infraction.
///
/// Verifies the mute row is removed along with the infraction.
///
/// Expected: Ok(true) with both rows removed
#[tokio::test]
async fn deletes_infraction_and_mute() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (infraction, _) = factory::create_mute(db, "10").await?;

    let deleted = InfractionRepository::new(db).delete(infraction.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Infraction::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(false) for an unknown UUID
#[tokio::test]
async fn reports_unknown_infraction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_infraction(db, "10").await?;

    let deleted = InfractionRepository::new(db).delete(Uuid::new_v4()).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Infraction::find().count(db).await?, 1);

    Ok(())
}

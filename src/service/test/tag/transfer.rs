use super::*;

/// Tests that an administrator can transfer any tag and delete it afterwards.
///
/// Expected: Ok with the new owner stored, then the tag gone
#[tokio::test]
async fn admin_transfers_then_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db)
        .name("docs")
        .owner_id("7")
        .build()
        .await?;

    let service = TagService::new(db);
    let tag = service.transfer(&admin(1), "docs", 9).await?;
    assert_eq!(tag.owner_id, 9);

    service.delete(&member(9), "docs").await?;
    assert!(service.find("docs").await?.is_none());

    Ok(())
}

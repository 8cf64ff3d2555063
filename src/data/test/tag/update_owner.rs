use super::*;

/// Tests transferring a tag to another member.
///
/// Expected: Ok with the new owner stored
#[tokio::test]
async fn reassigns_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tag::TagFactory::new(db)
        .owner_id("111")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    let tag = repo.update_owner(created.id, 222).await?;

    assert_eq!(tag.owner_id, 222);

    let stored = entity::prelude::Tag::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.owner_id, "222");

    Ok(())
}

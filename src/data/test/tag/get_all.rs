use super::*;

/// Tests listing all tags.
///
/// Expected: Ok with tags ordered by name
#[tokio::test]
async fn returns_tags_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db).name("zebra").build().await?;
    factory::tag::TagFactory::new(db).name("apple").build().await?;
    factory::tag::TagFactory::new(db).name("mango").build().await?;

    let repo = TagRepository::new(db);
    let tags = repo.get_all().await?;

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["apple", "mango", "zebra"]);

    Ok(())
}

/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tags = TagRepository::new(db).get_all().await?;

    assert!(tags.is_empty());

    Ok(())
}

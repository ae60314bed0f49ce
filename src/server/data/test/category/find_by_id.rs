use super::*;

/// Tests finding an existing and a missing category.
///
/// Expected: Some for the created category, None for an unknown ID
#[tokio::test]
async fn finds_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MissionCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::mission_category::MissionCategoryFactory::new(db)
        .title("Fitness")
        .build()
        .await?;

    let repo = MissionCategoryRepository::new(db);
    let found = repo.find_by_id(category.id).await?;

    assert_eq!(found.map(|c| c.title), Some("Fitness".to_string()));
    assert!(repo.find_by_id(category.id + 100).await?.is_none());

    Ok(())
}

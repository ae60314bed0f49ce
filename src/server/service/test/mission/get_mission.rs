use super::*;

/// Tests loading a mission without participation.
///
/// Expected: Ok with category title and no progress
#[tokio::test]
async fn loads_public_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::mission_category::MissionCategoryFactory::new(db)
        .title("Reading")
        .build()
        .await?;
    let mission = factory::create_mission(db, category.id).await?;

    let detail = MissionService::new(db).get_mission(mission.id).await?;

    assert_eq!(detail.mission.id, mission.id);
    assert_eq!(detail.category_title, "Reading");
    assert!(detail.progress.is_none());

    Ok(())
}

/// Tests loading a mission that does not exist.
///
/// Expected: Err(MissionNotFound)
#[tokio::test]
async fn fails_for_missing_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MissionService::new(db).get_mission(3).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::MissionNotFound(3)))
    ));

    Ok(())
}

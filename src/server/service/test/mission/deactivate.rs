use super::*;

/// Tests deactivating a mission.
///
/// Verifies that the mission leaves the home listing but can still be loaded.
///
/// Expected: Ok, absent from list_home, status INACTIVE
#[tokio::test]
async fn removes_mission_from_home() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let mission = factory::create_mission(db, category.id).await?;
    let kept = factory::create_mission(db, category.id).await?;

    let service = MissionService::new(db);
    service.deactivate(mission.id).await?;

    let home: Vec<i32> = service.list_home().await?.iter().map(|m| m.id).collect();
    assert_eq!(home, vec![kept.id]);

    let detail = service.get_mission(mission.id).await?;
    assert_eq!(detail.mission.status, Status::Inactive);

    Ok(())
}

/// Tests deactivating an already inactive mission.
///
/// Expected: Ok both times
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let mission = factory::create_mission(db, category.id).await?;

    let service = MissionService::new(db);
    service.deactivate(mission.id).await?;
    service.deactivate(mission.id).await?;

    Ok(())
}

/// Tests deactivating a mission that does not exist.
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

    let result = MissionService::new(db).deactivate(8).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::MissionNotFound(8)))
    ));

    Ok(())
}

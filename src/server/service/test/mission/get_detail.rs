use super::*;

/// Tests the detail view of a joined mission.
///
/// Verifies the category title, day budget, logged count and on-track flag for a
/// five-day mission with three logged days.
///
/// Expected: budget 5, logged 3, on track
#[tokio::test]
async fn includes_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::mission_category::MissionCategoryFactory::new(db)
        .title("Fitness")
        .build()
        .await?;
    let mission = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 1, 1),
        date(2024, 1, 5),
    )
    .await?;
    factory::create_mission_user(db, user.id, mission.id).await?;
    factory::create_schedules(db, user.id, mission.id, date(2024, 1, 1), 3).await?;

    let detail = MissionService::new(db)
        .get_detail(user.id, mission.id)
        .await?;

    assert_eq!(detail.category_title, "Fitness");
    let progress = detail.progress.unwrap();
    assert_eq!(progress.day_budget, 5);
    assert_eq!(progress.logged_days, 3);
    assert!(progress.on_track);

    Ok(())
}

/// Tests the detail view once the full budget is logged.
///
/// Expected: logged 5, not on track (5 < 5 is false)
#[tokio::test]
async fn full_budget_is_not_on_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let mission = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 1, 1),
        date(2024, 1, 5),
    )
    .await?;
    factory::create_mission_user(db, user.id, mission.id).await?;
    factory::create_schedules(db, user.id, mission.id, date(2024, 1, 1), 5).await?;

    let detail = MissionService::new(db)
        .get_detail(user.id, mission.id)
        .await?;

    let progress = detail.progress.unwrap();
    assert_eq!(progress.logged_days, 5);
    assert!(!progress.on_track);

    Ok(())
}

/// Tests the detail view without a participation row.
///
/// Expected: Err(MissionNotFound) even though the mission exists
#[tokio::test]
async fn fails_when_not_joined() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let result = MissionService::new(db)
        .get_detail(user.id, mission.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::MissionNotFound(id))) if id == mission.id
    ));

    Ok(())
}

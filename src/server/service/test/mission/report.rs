use super::*;

/// Tests reporting a mission.
///
/// Expected: Ok
#[tokio::test]
async fn reports_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    MissionService::new(db).report(user.id, mission.id).await?;

    Ok(())
}

/// Tests reporting the same mission twice.
///
/// Expected: Err(AlreadyReported) on the second call
#[tokio::test]
async fn rejects_second_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let service = MissionService::new(db);
    service.report(user.id, mission.id).await?;
    let result = service.report(user.id, mission.id).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::AlreadyReported))
    ));

    Ok(())
}

/// Tests that another user may report the same mission.
///
/// Expected: Ok for the second reporter
#[tokio::test]
async fn allows_other_reporters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_mission_report(db, other.id, mission.id).await?;

    MissionService::new(db).report(user.id, mission.id).await?;

    Ok(())
}

/// Tests reporting a mission that does not exist.
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

    let user = factory::create_user(db).await?;

    let result = MissionService::new(db).report(user.id, 5).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::MissionNotFound(5)))
    ));

    Ok(())
}

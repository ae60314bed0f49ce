use super::*;

/// Tests joining a mission.
///
/// Expected: Ok and a participation row for the user
#[tokio::test]
async fn joins_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let service = MissionService::new(db);
    service.join(user.id, mission.id).await?;

    let detail = service.get_detail(user.id, mission.id).await?;
    assert_eq!(detail.mission.id, mission.id);

    Ok(())
}

/// Tests joining the same mission twice.
///
/// Verifies that the first join succeeds and the second is rejected.
///
/// Expected: Err(AlreadyJoined) on the second call
#[tokio::test]
async fn rejects_second_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;

    let service = MissionService::new(db);
    service.join(user.id, mission.id).await?;
    let result = service.join(user.id, mission.id).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::AlreadyJoined))
    ));

    Ok(())
}

/// Tests joining a mission that does not exist.
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

    let result = MissionService::new(db).join(user.id, 404).await;

    assert!(matches!(
        result,
        Err(AppError::MissionErr(MissionError::MissionNotFound(404)))
    ));

    Ok(())
}

/// Tests that two users can join the same mission.
///
/// Expected: Ok for both
#[tokio::test]
async fn allows_different_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let service = MissionService::new(db);
    service.join(user.id, mission.id).await?;
    service.join(other.id, mission.id).await?;

    Ok(())
}

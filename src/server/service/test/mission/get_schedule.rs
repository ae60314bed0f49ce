use super::*;

/// Tests listing the user's logged days for a mission.
///
/// Expected: the user's entries in start order, formatted as calendar days
#[tokio::test]
async fn lists_user_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mission, _) =
        factory::helpers::create_joined_mission_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_schedules(db, user.id, mission.id, date(2024, 7, 1), 2).await?;
    factory::create_schedules(db, other.id, mission.id, date(2024, 7, 1), 3).await?;

    let entries = MissionService::new(db)
        .get_schedule(user.id, mission.id)
        .await?;
    let days: Vec<String> = entries.into_iter().map(|e| e.into_dto().when).collect();

    assert_eq!(days, vec!["2024-07-01", "2024-07-02"]);

    Ok(())
}

/// Tests a mission with nothing logged.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mission, _) =
        factory::helpers::create_joined_mission_with_dependencies(db).await?;

    let entries = MissionService::new(db)
        .get_schedule(user.id, mission.id)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}

use super::*;

/// Tests splitting finished missions by outcome.
///
/// Verifies that a finished mission with the full day budget logged is a success,
/// one with fewer entries is a failure, and a running mission appears in neither.
///
/// Expected: one succeeded, one failed
#[tokio::test]
async fn splits_finished_missions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = date(2024, 2, 1);
    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let completed = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 1, 1),
        date(2024, 1, 3),
    )
    .await?;
    let abandoned = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 1, 10),
        date(2024, 1, 14),
    )
    .await?;
    let running = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 1, 20),
        date(2024, 2, 10),
    )
    .await?;

    for mission in [&completed, &abandoned, &running] {
        factory::create_mission_user(db, user.id, mission.id).await?;
    }
    factory::create_schedules(db, user.id, completed.id, date(2024, 1, 1), 3).await?;
    factory::create_schedules(db, user.id, abandoned.id, date(2024, 1, 10), 2).await?;
    factory::create_schedules(db, user.id, running.id, date(2024, 1, 20), 12).await?;

    let history = MissionService::new(db).history(user.id, today).await?;

    let succeeded: Vec<i32> = history.succeeded.iter().map(|m| m.id).collect();
    let failed: Vec<i32> = history.failed.iter().map(|m| m.id).collect();
    assert_eq!(succeeded, vec![completed.id]);
    assert_eq!(failed, vec![abandoned.id]);

    let dto = history.into_dto();
    assert_eq!(dto.success_count, 1);
    assert_eq!(dto.failure_count, 1);

    Ok(())
}

/// Tests a mission ending today.
///
/// Expected: neither succeeded nor failed yet
#[tokio::test]
async fn excludes_mission_ending_today() -> Result<(), AppError> {
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
        date(2024, 1, 3),
    )
    .await?;
    factory::create_mission_user(db, user.id, mission.id).await?;
    factory::create_schedules(db, user.id, mission.id, date(2024, 1, 1), 3).await?;

    let history = MissionService::new(db)
        .history(user.id, date(2024, 1, 3))
        .await?;

    assert!(history.succeeded.is_empty());
    assert!(history.failed.is_empty());

    Ok(())
}

use super::*;

/// Tests listing the user's running missions.
///
/// Verifies that a mission ending on the current day is excluded even though the day
/// is not over, and that missions the user did not join are never listed.
///
/// Expected: only the joined mission ending after today
#[tokio::test]
async fn lists_joined_missions_ending_after_now() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2024, 7, 10, 9, 30, 0).unwrap();
    let today = now.date_naive();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let running = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 7, 1),
        today.checked_add_days(Days::new(1)).unwrap(),
    )
    .await?;
    let ending_today =
        factory::mission::create_mission_between(db, category.id, date(2024, 7, 1), today)
            .await?;
    let ended =
        factory::mission::create_mission_between(db, category.id, date(2024, 6, 1), date(2024, 6, 30))
            .await?;
    let not_joined = factory::mission::create_mission_between(
        db,
        category.id,
        date(2024, 7, 1),
        date(2024, 8, 1),
    )
    .await?;

    for mission in [&running, &ending_today, &ended] {
        factory::create_mission_user(db, user.id, mission.id).await?;
    }

    let missions = MissionService::new(db).list_mine(user.id, now).await?;
    let ids: Vec<i32> = missions.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![running.id]);
    assert!(!ids.contains(&not_joined.id));

    Ok(())
}

/// Tests a user with no participations.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_participation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let missions = MissionService::new(db)
        .list_mine(user.id, Utc::now())
        .await?;

    assert!(missions.is_empty());

    Ok(())
}

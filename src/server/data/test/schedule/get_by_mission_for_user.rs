use super::*;

/// Tests listing a user's entries for a mission.
///
/// Verifies that entries are ordered by start time regardless of insertion order.
///
/// Expected: entries for 07-01, 07-02, 07-03 in that order
#[tokio::test]
async fn lists_entries_in_start_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mission, _) =
        factory::helpers::create_joined_mission_with_dependencies(db).await?;

    for day in [3, 1, 2] {
        factory::schedule::ScheduleFactory::new(db, user.id, mission.id)
            .on(date(2024, 7, day))
            .build()
            .await?;
    }

    let entries = ScheduleRepository::new(db)
        .get_by_mission_for_user(mission.id, user.id)
        .await?;
    let days: Vec<NaiveDate> = entries.iter().map(|e| e.start_at.date()).collect();

    assert_eq!(
        days,
        vec![date(2024, 7, 1), date(2024, 7, 2), date(2024, 7, 3)]
    );

    Ok(())
}

/// Tests that entries of other users and other missions are excluded.
///
/// Expected: only the requesting user's entry on the requested mission
#[tokio::test]
async fn scopes_entries_to_user_and_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, mission) =
        factory::helpers::create_mission_with_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;
    let other_mission = factory::create_mission(db, category.id).await?;

    let own = factory::create_schedule(db, user.id, mission.id).await?;
    factory::create_schedule(db, other_user.id, mission.id).await?;
    factory::create_schedule(db, user.id, other_mission.id).await?;

    let entries = ScheduleRepository::new(db)
        .get_by_mission_for_user(mission.id, user.id)
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, own.id);

    Ok(())
}

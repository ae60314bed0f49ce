use super::*;

/// Tests counting a user's entries for a mission.
///
/// Expected: 4 for the user with four entries, 0 for a user with none
#[tokio::test]
async fn counts_linked_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mission, _) =
        factory::helpers::create_joined_mission_with_dependencies(db).await?;
    let idle = factory::create_user(db).await?;

    factory::create_schedules(db, user.id, mission.id, date(2024, 7, 1), 4).await?;

    let repo = ScheduleRepository::new(db);
    assert_eq!(repo.count_by_mission_for_user(mission.id, user.id).await?, 4);
    assert_eq!(repo.count_by_mission_for_user(mission.id, idle.id).await?, 0);

    Ok(())
}

use super::*;

/// Tests creating a mission.
///
/// Verifies that every field is stored and the mission starts ACTIVE.
///
/// Expected: Ok with the created mission
#[tokio::test]
async fn creates_active_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = MissionRepository::new(db);
    let mission = repo
        .create(CreateMissionParams {
            category_id: category.id,
            title: "Run every day".to_string(),
            content: "At least 3km".to_string(),
            start_at: date(2024, 1, 1),
            end_at: date(2024, 1, 5),
            last_mission: true,
        })
        .await?;

    assert_eq!(mission.category_id, category.id);
    assert_eq!(mission.title, "Run every day");
    assert_eq!(mission.content, "At least 3km");
    assert_eq!(mission.start_at, date(2024, 1, 1));
    assert_eq!(mission.end_at, date(2024, 1, 5));
    assert!(mission.last_mission);
    assert_eq!(mission.status, Status::Active);

    let stored = repo.find_by_id(mission.id).await?;
    assert_eq!(stored, Some(mission));

    Ok(())
}

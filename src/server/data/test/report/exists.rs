use super::*;

/// Tests the duplicate-report check.
///
/// Verifies that the check matches both reporter and target.
///
/// Expected: true only for the reporting user on the reported mission
#[tokio::test]
async fn matches_reporter_and_target() -> Result<(), DbErr> {
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

    factory::create_mission_report(db, user.id, mission.id).await?;

    let repo = ReportRepository::new(db);
    assert!(repo.exists(user.id, ReportTarget::Mission(mission.id)).await?);
    assert!(!repo.exists(other_user.id, ReportTarget::Mission(mission.id)).await?);
    assert!(!repo.exists(user.id, ReportTarget::Mission(other_mission.id)).await?);
    assert!(!repo.exists(user.id, ReportTarget::Comment(mission.id)).await?);

    Ok(())
}

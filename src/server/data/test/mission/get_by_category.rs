use super::*;

/// Tests listing the missions of one category.
///
/// Expected: ACTIVE and INACTIVE missions of the requested category, none of another
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fitness = factory::create_category(db).await?;
    let study = factory::create_category(db).await?;
    let run = factory::create_mission(db, fitness.id).await?;
    factory::create_mission(db, study.id).await?;
    let retired = factory::mission::MissionFactory::new(db, fitness.id)
        .status(Status::Inactive)
        .build()
        .await?;

    let missions = MissionRepository::new(db).get_by_category(fitness.id).await?;

    let ids: Vec<i32> = missions.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![run.id, retired.id]);
    assert_eq!(missions[1].status, Status::Inactive);

    Ok(())
}

/// Tests listing an unknown category.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let missions = MissionRepository::new(db).get_by_category(77).await?;

    assert!(missions.is_empty());

    Ok(())
}

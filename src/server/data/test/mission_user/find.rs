use super::*;

/// Tests finding a participation row by user and mission.
///
/// Verifies that the lookup matches both columns, so another user's participation
/// in the same mission is not returned.
///
/// Expected: Some for the joined user, None for the other user
#[tokio::test]
async fn finds_participation_for_user_and_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_participation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mission, participation) =
        factory::helpers::create_joined_mission_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let repo = MissionUserRepository::new(db);
    let found = repo.find(user.id, mission.id).await?;

    assert_eq!(found.map(|p| p.id), Some(participation.id));
    assert!(repo.find(other.id, mission.id).await?.is_none());

    Ok(())
}

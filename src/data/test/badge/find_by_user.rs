use super::*;

/// Tests finding an existing badge by user identifier.
///
/// Expected: Ok(Some(Badge)) with the stored flags in order
#[tokio::test]
async fn finds_existing_badge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BadgeFactory::new(db)
        .user("123456789")
        .flags(["SUPPORTER", "DEVELOPER"])
        .build()
        .await?;

    let repo = BadgeRepository::new(db);
    let badge = repo.find_by_user("123456789").await?.unwrap();

    assert_eq!(badge.user, "123456789");
    assert_eq!(badge.flags, vec!["SUPPORTER", "DEVELOPER"]);

    Ok(())
}

/// Tests querying a user without a badge record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BadgeFactory::new(db).user("1").build().await?;

    let repo = BadgeRepository::new(db);
    let result = repo.find_by_user("2").await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests replacing the flags of an existing record.
///
/// Expected: Ok(Badge) with the new flag list persisted
#[tokio::test]
async fn replaces_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BadgeFactory::new(db)
        .user("42")
        .flags(["DEVELOPER"])
        .build()
        .await?;

    let repo = BadgeRepository::new(db);
    let flags = vec!["DEVELOPER".to_string(), "SUPPORTER".to_string()];
    let updated = repo.update_flags("42", flags.clone()).await?;

    assert_eq!(updated.flags, flags);
    assert_eq!(repo.find_by_user("42").await?.unwrap().flags, flags);

    Ok(())
}

/// Tests that other users' records are left untouched.
///
/// Expected: Ok with only the targeted record changed
#[tokio::test]
async fn leaves_other_records_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BadgeFactory::new(db).user("1").flags(["DEVELOPER"]).build().await?;
    BadgeFactory::new(db).user("2").flags(["SUPPORTER"]).build().await?;

    let repo = BadgeRepository::new(db);
    repo.update_flags("1", vec![]).await?;

    assert!(repo.find_by_user("1").await?.unwrap().flags.is_empty());
    assert_eq!(repo.find_by_user("2").await?.unwrap().flags, vec!["SUPPORTER"]);

    Ok(())
}

/// Tests updating a user without a record.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BadgeRepository::new(db);
    let result = repo.update_flags("404", vec!["DEVELOPER".to_string()]).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

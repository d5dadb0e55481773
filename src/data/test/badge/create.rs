use super::*;

/// Tests inserting a new badge record.
///
/// Expected: Ok(Badge) that can be read back
#[tokio::test]
async fn creates_badge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BadgeRepository::new(db);
    let created = repo
        .create(CreateBadgeParam {
            user: "42".to_string(),
            flags: vec!["DEVELOPER".to_string()],
        })
        .await?;

    assert_eq!(created.user, "42");
    assert_eq!(created.flags, vec!["DEVELOPER"]);
    assert_eq!(repo.find_by_user("42").await?, Some(created));

    Ok(())
}

/// Tests that a second record for the same user is rejected.
///
/// Expected: Err(DbErr) from the primary key constraint
#[tokio::test]
async fn rejects_duplicate_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_badge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BadgeFactory::new(db).user("42").build().await?;

    let repo = BadgeRepository::new(db);
    let result = repo
        .create(CreateBadgeParam {
            user: "42".to_string(),
            flags: vec!["DEVELOPER".to_string()],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

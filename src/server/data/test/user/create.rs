use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) with the given username and hash
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create("robot", "digest".to_string()).await?.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.username, "robot");
    assert_eq!(user.password_hash, "digest");

    Ok(())
}

/// Tests inserting a username that is already stored.
///
/// Expected: Ok(None) from the unique index, and the first user keeps its hash
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("robot", "digest".to_string()).await?;
    let duplicate = repo.create("robot", "other".to_string()).await?;

    assert!(duplicate.is_none());
    let stored = repo.find_by_username("robot").await?.unwrap();
    assert_eq!(stored.password_hash, "digest");

    Ok(())
}

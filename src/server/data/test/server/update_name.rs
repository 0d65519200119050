use super::*;

/// Tests renaming an owned server.
///
/// Expected: Ok(true) and the new name is persisted
#[tokio::test]
async fn renames_owned_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server) = factory::create_server_with_owner(db).await?;
    let target = lookup(owner.id, server.server_number);

    let repo = ServerRepository::new(db);
    let renamed = repo.update_name(target, "DS 3000 #7").await?;

    assert!(renamed);
    let found = repo.find_by_number(target).await?.unwrap();
    assert_eq!(found.server_name, "DS 3000 #7");

    Ok(())
}

/// Tests renaming a server owned by someone else.
///
/// Expected: Ok(false) and the stored name is unchanged
#[tokio::test]
async fn does_not_rename_foreign_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server) = factory::create_server_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let renamed = repo
        .update_name(lookup(stranger.id, server.server_number), "hijacked")
        .await?;

    assert!(!renamed);
    let found = repo
        .find_by_number(lookup(owner.id, server.server_number))
        .await?
        .unwrap();
    assert_eq!(found.server_name, server.server_name);

    Ok(())
}

/// Tests renaming a server to the name it already has.
///
/// Expected: Ok(true) and the name is unchanged
#[tokio::test]
async fn renaming_to_current_name_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server) = factory::create_server_with_owner(db).await?;
    let target = lookup(owner.id, server.server_number);

    let repo = ServerRepository::new(db);
    let renamed = repo.update_name(target, &server.server_name).await?;

    assert!(renamed);
    let found = repo.find_by_number(target).await?.unwrap();
    assert_eq!(found.server_name, server.server_name);

    Ok(())
}

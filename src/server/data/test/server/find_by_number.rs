use super::*;

/// Tests finding an owned server by number.
///
/// Expected: Ok(Some(Server)) with matching data and addresses
#[tokio::test]
async fn finds_owned_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id)
        .server_number(321)
        .server_name("EX44 #1")
        .build()
        .await?;
    factory::create_server_ip(db, server.id, "2001:db8::", "64").await?;

    let repo = ServerRepository::new(db);
    let found = repo.find_by_number(lookup(owner.id, 321)).await?.unwrap();

    assert_eq!(found.server_number, 321);
    assert_eq!(found.server_name, "EX44 #1");
    assert_eq!(found.ips.len(), 1);
    assert_eq!(found.ips[0].mask, "64");

    Ok(())
}

/// Tests that a server owned by another user is not visible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_server_of_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, server) = factory::create_server_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let found = repo
        .find_by_number(lookup(stranger.id, server.server_number))
        .await?;

    assert!(found.is_none());

    Ok(())
}

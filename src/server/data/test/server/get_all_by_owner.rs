use super::*;

/// Tests listing servers for a user.
///
/// Verifies that only the owner's servers are returned, ordered by server number,
/// each carrying its address rows.
///
/// Expected: Ok with the owner's two servers in ascending number order
#[tokio::test]
async fn returns_owned_servers_in_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let second = factory::server::ServerFactory::new(db, owner.id)
        .server_number(2002)
        .build()
        .await?;
    factory::server::ServerFactory::new(db, owner.id)
        .server_number(2001)
        .build()
        .await?;
    factory::server::ServerFactory::new(db, other.id)
        .server_number(2000)
        .build()
        .await?;
    factory::create_server_ip(db, second.id, "192.0.2.44", "32").await?;

    let repo = ServerRepository::new(db);
    let servers = repo.get_all_by_owner(owner.id).await?;

    let numbers: Vec<_> = servers.iter().map(|s| s.server_number).collect();
    assert_eq!(numbers, vec![2001, 2002]);
    assert!(servers[0].ips.is_empty());
    assert_eq!(servers[1].ips.len(), 1);
    assert_eq!(servers[1].ips[0].ip_address, "192.0.2.44");

    Ok(())
}

/// Tests listing servers for a user without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_user_without_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let servers = repo.get_all_by_owner(user.id).await?;

    assert!(servers.is_empty());

    Ok(())
}

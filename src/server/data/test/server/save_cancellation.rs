use super::*;
use crate::server::error::AppError;

fn scheduled() -> CancellationState {
    CancellationState {
        cancelled: true,
        cancellation_date: NaiveDate::from_ymd_opt(2030, 6, 8),
        cancellation_reason: Some(CancellationReason::TooExpensive),
        reserved: false,
    }
}

/// Tests writing a cancellation when the stored state matches the expectation.
///
/// Expected: Ok(true) and all four fields persisted
#[tokio::test]
async fn writes_when_prior_state_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server) = factory::create_server_with_owner(db).await?;
    let target = lookup(owner.id, server.server_number);

    let repo = ServerRepository::new(db);
    let written = repo.save_cancellation(target, false, &scheduled()).await?;

    assert!(written);
    let found = repo.find_cancellation(target).await?.unwrap();
    assert_eq!(found.state, scheduled());

    Ok(())
}

/// Tests that a stale expectation writes nothing.
///
/// Simulates a concurrent request that already cancelled the server between read
/// and write.
///
/// Expected: Ok(false) and the stored state unchanged
#[tokio::test]
async fn skips_write_when_prior_state_changed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
    let server = factory::server::ServerFactory::new(db, owner.id)
        .cancelled(date, None)
        .build()
        .await?;
    let target = lookup(owner.id, server.server_number);

    let repo = ServerRepository::new(db);
    let written = repo.save_cancellation(target, false, &scheduled()).await?;

    assert!(!written);
    let found = repo.find_cancellation(target).await?.unwrap();
    assert_eq!(found.state.cancellation_date, Some(date));
    assert_eq!(found.state.cancellation_reason, None);

    Ok(())
}

/// Tests clearing a cancellation back to the active state.
///
/// Expected: Ok(true) with date and reason set to NULL and reserved cleared
#[tokio::test]
async fn clears_fields_on_revocation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id)
        .server_name("DS 3000 #2")
        .cancelled(NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(), Some("Server too expensive"))
        .reserved(true)
        .build()
        .await?;
    let target = lookup(owner.id, server.server_number);

    let repo = ServerRepository::new(db);
    let written = repo
        .save_cancellation(target, true, &CancellationState::default())
        .await?;

    assert!(written);
    let model = entity::prelude::Server::find_by_id(server.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!model.cancelled);
    assert!(!model.reserved);
    assert!(model.cancellation_date.is_none());
    assert!(model.cancellation_reason.is_none());

    Ok(())
}

/// Tests that the write is scoped to the owner.
///
/// Expected: Ok(false) for a foreign owner
#[tokio::test]
async fn ignores_foreign_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, server) = factory::create_server_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let written = repo
        .save_cancellation(
            lookup(stranger.id, server.server_number),
            false,
            &scheduled(),
        )
        .await?;

    assert!(!written);

    Ok(())
}

use super::*;
use crate::server::error::{internal::InternalError, AppError};

/// Tests loading the cancellation state of an active server.
///
/// Expected: Ok(Some) with the default, not-cancelled state
#[tokio::test]
async fn loads_active_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server) = factory::create_server_with_owner(db).await?;

    let repo = ServerRepository::new(db);
    let found = repo
        .find_cancellation(lookup(owner.id, server.server_number))
        .await?
        .unwrap();

    assert_eq!(found.server_number, server.server_number);
    assert_eq!(found.state, CancellationState::default());

    Ok(())
}

/// Tests loading the cancellation state of a cancelled server.
///
/// Expected: Ok(Some) with date, parsed reason and reserved flag
#[tokio::test]
async fn loads_cancelled_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
    let server = factory::server::ServerFactory::new(db, owner.id)
        .server_name("DS 3000 #1")
        .cancelled(date, Some("Dissatisfied with the network"))
        .reserved(true)
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let found = repo
        .find_cancellation(lookup(owner.id, server.server_number))
        .await?
        .unwrap();

    assert_eq!(
        found.state,
        CancellationState {
            cancelled: true,
            cancellation_date: Some(date),
            cancellation_reason: Some(CancellationReason::DissatisfiedWithNetwork),
            reserved: true,
        }
    );
    assert!(found.reservation_possible());

    Ok(())
}

/// Tests that an unknown number yields no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let found = repo.find_cancellation(lookup(owner.id, 999_999)).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a reason outside the catalog is reported instead of silently dropped.
///
/// Expected: Err(InternalError::UnknownCancellationReason)
#[tokio::test]
async fn rejects_reason_outside_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id)
        .cancelled(NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(), Some("Bored"))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let result = repo
        .find_cancellation(lookup(owner.id, server.server_number))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(
            InternalError::UnknownCancellationReason { .. }
        ))
    ));

    Ok(())
}

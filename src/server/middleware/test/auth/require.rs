use super::*;

/// Tests valid Basic credentials.
///
/// Expected: Ok(User) for the matching user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("robot")
        .password_hash(hash_password("s3cr:et"))
        .build()
        .await?;

    let headers = basic("robot:s3cr:et");
    let authenticated = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests that surrounding whitespace in the password is ignored.
///
/// Expected: Ok(User)
#[tokio::test]
async fn trims_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("robot")
        .password_hash(hash_password("secret"))
        .build()
        .await?;

    let headers = basic("robot: secret ");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::HeaderMissing)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::HeaderMissing))
    ));

    Ok(())
}

/// Tests malformed headers.
///
/// Covers a non-Basic scheme, undecodable payload and a payload without separator.
///
/// Expected: the matching AuthError for each header
#[tokio::test]
async fn rejects_malformed_headers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bearer = authorization("Bearer abc");
    let result = AuthGuard::new(db, &bearer).require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidFormat))
    ));

    let garbage = authorization("Basic !!!not-base64!!!");
    let result = AuthGuard::new(db, &garbage).require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidBase64))
    ));

    let no_separator = basic("robot");
    let result = AuthGuard::new(db, &no_separator).require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentialFormat))
    ));

    Ok(())
}

/// Tests a wrong password and an unknown username.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("robot")
        .password_hash(hash_password("secret"))
        .build()
        .await?;

    for credentials in ["robot:wrong", "nobody:secret"] {
        let headers = basic(credentials);
        let result = AuthGuard::new(db, &headers).require().await;

        assert!(
            matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
            ),
            "{credentials}"
        );
    }

    Ok(())
}

//! HTTP Basic authentication guard.
//!
//! Every server route is scoped to the user named in the `Authorization` header. The
//! guard decodes the header, looks the user up and checks the password digest.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

const BASIC_PREFIX: &str = "Basic ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(_))` - Header missing or malformed, unknown user or
    ///   wrong password
    pub async fn require(&self) -> Result<User, AppError> {
        let (username, password) = self.credentials()?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&username).await? else {
            return Err(AuthError::InvalidCredentials(username).into());
        };

        if !verify_password(&password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(username).into());
        }

        Ok(user)
    }

    /// Decodes `username:password` from the header.
    ///
    /// The password may itself contain `:`, so only the first separator splits.
    fn credentials(&self) -> Result<(String, String), AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::HeaderMissing)?
            .to_str()
            .map_err(|_| AuthError::InvalidFormat)?;

        let encoded = header
            .strip_prefix(BASIC_PREFIX)
            .ok_or(AuthError::InvalidFormat)?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::InvalidBase64)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidBase64)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(AuthError::InvalidCredentialFormat)?;

        Ok((username.to_string(), password.trim().to_string()))
    }
}

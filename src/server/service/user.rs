use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{RegisterUserParam, User},
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new API user
    ///
    /// # Returns
    /// - `Ok(User)`: The created user
    /// - `Err(AppError::UserErr(MissingCredentials))`: Blank username or password
    /// - `Err(AppError::UserErr(UsernameTaken))`: The username is already registered
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let username = param.username.trim();
        if username.is_empty() || param.password.trim().is_empty() {
            return Err(UserError::MissingCredentials.into());
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_username(username).await?.is_some() {
            return Err(UserError::UsernameTaken(username.to_string()).into());
        }

        let user = repo
            .create(username, hash_password(&param.password))
            .await?
            .ok_or_else(|| UserError::UsernameTaken(username.to_string()))?;

        tracing::info!("Registered user {}", user.username);

        Ok(user)
    }
}

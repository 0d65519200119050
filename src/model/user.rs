use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body of `POST /register`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    pub password: String,
}

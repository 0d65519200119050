use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::RegisterUserDto,
    },
    server::{
        error::AppError, model::user::RegisterUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new API user.
///
/// The credentials are used for HTTP Basic authentication on every other endpoint.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Malformed body or empty username or password
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    post,
    path = "/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    UserService::new(&state.db)
        .register(RegisterUserParam {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully".to_string(),
        }),
    ))
}

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        cancellation::{CancellationEnvelopeDto, ScheduleCancellationDto},
    },
    server::{
        controller::form_or_default,
        data::server::ServerRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{cancellation::ScheduleCancellationParam, server::ServerLookupParam},
        service::cancellation::CancellationService,
        state::AppState,
        util::parse::parse_server_number,
    },
};

/// Tag for grouping cancellation endpoints in OpenAPI documentation
pub static CANCELLATION_TAG: &str = "cancellation";

/// Get the cancellation status of a server.
///
/// A server that is not cancelled lists every valid cancellation reason and a `null`
/// cancellation date. A cancelled server shows the stored date and reason instead.
/// `earliest_cancellation_date` is always computed from the request time.
///
/// # Returns
/// - `200 OK` - Cancellation status
/// - `400 Bad Request` - Server number is not a positive integer
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No such server for the caller
#[utoipa::path(
    get,
    path = "/server/{server_number}/cancellation",
    tag = CANCELLATION_TAG,
    params(
        ("server_number" = i32, Path, description = "Server number")
    ),
    responses(
        (status = 200, description = "Cancellation status", body = CancellationEnvelopeDto),
        (status = 400, description = "Invalid server number", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_cancellation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lookup = ServerLookupParam {
        owner_id: user.id,
        server_number: parse_server_number(&server_number)?,
    };

    let service = CancellationService::new(ServerRepository::new(&state.db));

    let view = service.describe(lookup, Utc::now()).await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Schedule the cancellation of a server.
///
/// Accepts an optional `cancellation_date` (`YYYY-MM-DD`, at least 96 hours ahead,
/// defaults to one week ahead), an optional `cancellation_reason` from the reason
/// catalog and an optional `reserve_location` flag (`"true"`/`"false"`).
///
/// # Returns
/// - `200 OK` - Cancellation status after scheduling
/// - `400 Bad Request` - Invalid date, reason or flag
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No such server for the caller
/// - `409 Conflict` - Already cancelled, or the location cannot be reserved
#[utoipa::path(
    post,
    path = "/server/{server_number}/cancellation",
    tag = CANCELLATION_TAG,
    params(
        ("server_number" = i32, Path, description = "Server number")
    ),
    request_body(content = ScheduleCancellationDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Cancellation scheduled", body = CancellationEnvelopeDto),
        (status = 400, description = "Invalid cancellation date, reason or input", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 409, description = "Server already cancelled or location reservation not possible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn schedule_cancellation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_number): Path<String>,
    form: Result<Form<ScheduleCancellationDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lookup = ServerLookupParam {
        owner_id: user.id,
        server_number: parse_server_number(&server_number)?,
    };

    let payload = form_or_default(&headers, form)?;
    let param = ScheduleCancellationParam::from_dto(payload);

    let service = CancellationService::new(ServerRepository::new(&state.db));

    let view = service.schedule(lookup, param, Utc::now()).await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Revoke a scheduled cancellation.
///
/// Clears the cancellation date and reason and releases any location reservation.
///
/// # Returns
/// - `204 No Content` - Cancellation revoked
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No such server for the caller
/// - `409 Conflict` - The server is not cancelled
#[utoipa::path(
    delete,
    path = "/server/{server_number}/cancellation",
    tag = CANCELLATION_TAG,
    params(
        ("server_number" = i32, Path, description = "Server number")
    ),
    responses(
        (status = 204, description = "Cancellation revoked"),
        (status = 400, description = "Invalid server number", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 409, description = "Server is not cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn revoke_cancellation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lookup = ServerLookupParam {
        owner_id: user.id,
        server_number: parse_server_number(&server_number)?,
    };

    let service = CancellationService::new(ServerRepository::new(&state.db));

    service.revoke(lookup).await?;

    Ok(StatusCode::NO_CONTENT)
}

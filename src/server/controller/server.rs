use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        server::{RenameServerDto, ServerDetailEnvelopeDto, ServerSummaryEnvelopeDto},
    },
    server::{
        controller::form_or_default,
        error::AppError,
        middleware::auth::AuthGuard,
        model::server::{RenameServerParam, ServerLookupParam},
        service::server::ServerService,
        state::AppState,
        util::parse::parse_server_number,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List the caller's servers.
///
/// # Returns
/// - `200 OK` - Servers ordered by server number
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - The caller owns no servers
#[utoipa::path(
    get,
    path = "/server",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Server list", body = Vec<ServerSummaryEnvelopeDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "No servers found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_servers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let servers = ServerService::new(&state.db).get_all(user.id).await?;

    let dtos: Vec<ServerSummaryEnvelopeDto> =
        servers.into_iter().map(|s| s.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single server.
#[utoipa::path(
    get,
    path = "/server/{server_number}",
    tag = SERVER_TAG,
    params(
        ("server_number" = i32, Path, description = "Server number")
    ),
    responses(
        (status = 200, description = "Server details", body = ServerDetailEnvelopeDto),
        (status = 400, description = "Invalid server number", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lookup = ServerLookupParam {
        owner_id: user.id,
        server_number: parse_server_number(&server_number)?,
    };

    let server = ServerService::new(&state.db).get(lookup).await?;

    Ok((StatusCode::OK, Json(server.into_detail_dto())))
}

/// Rename a server.
///
/// # Returns
/// - `200 OK` - The renamed server
/// - `400 Bad Request` - Missing `server_name` or invalid server number
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No such server for the caller
#[utoipa::path(
    post,
    path = "/server/{server_number}",
    tag = SERVER_TAG,
    params(
        ("server_number" = i32, Path, description = "Server number")
    ),
    request_body(content = RenameServerDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Server renamed", body = ServerDetailEnvelopeDto),
        (status = 400, description = "Missing server name or invalid server number", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn rename_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_number): Path<String>,
    form: Result<Form<RenameServerDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lookup = ServerLookupParam {
        owner_id: user.id,
        server_number: parse_server_number(&server_number)?,
    };

    let payload = form_or_default(&headers, form)?;

    let server = ServerService::new(&state.db)
        .rename(RenameServerParam {
            lookup,
            server_name: payload.server_name.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::OK, Json(server.into_detail_dto())))
}

//! Route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorBodyDto, ErrorDto, MessageDto},
        cancellation::{
            CancellationDto, CancellationEnvelopeDto, CancellationReasonDto,
            ScheduleCancellationDto,
        },
        server::{
            RenameServerDto, ServerDetailDto, ServerDetailEnvelopeDto, ServerSummaryDto,
            ServerSummaryEnvelopeDto, SubnetDto,
        },
        user::RegisterUserDto,
    },
    server::{
        controller::{
            cancellation::{
                self, get_cancellation, revoke_cancellation, schedule_cancellation,
                CANCELLATION_TAG,
            },
            server::{self as server_controller, get_server, get_servers, rename_server, SERVER_TAG},
            user::{self, register, USER_TAG},
        },
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        server_controller::get_servers,
        server_controller::get_server,
        server_controller::rename_server,
        cancellation::get_cancellation,
        cancellation::schedule_cancellation,
        cancellation::revoke_cancellation,
    ),
    components(schemas(
        ErrorDto,
        ErrorBodyDto,
        MessageDto,
        RegisterUserDto,
        ServerSummaryEnvelopeDto,
        ServerSummaryDto,
        SubnetDto,
        ServerDetailEnvelopeDto,
        ServerDetailDto,
        RenameServerDto,
        CancellationEnvelopeDto,
        CancellationDto,
        CancellationReasonDto,
        ScheduleCancellationDto,
    )),
    modifiers(&BasicAuthAddon),
    tags(
        (name = USER_TAG, description = "User registration"),
        (name = SERVER_TAG, description = "Server listing and renaming"),
        (name = CANCELLATION_TAG, description = "Server cancellation and location reservation")
    )
)]
pub struct ApiDoc;

struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/server", get(get_servers))
        .route("/server/{server_number}", get(get_server).post(rename_server))
        .route(
            "/server/{server_number}/cancellation",
            get(get_cancellation)
                .post(schedule_cancellation)
                .delete(revoke_cancellation),
        )
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(route_not_found)
}

/// Builds the complete application with state and HTTP layers applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

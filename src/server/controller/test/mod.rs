//! HTTP tests driving the complete router against an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router, state::AppState, util::password::hash_password};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


const USERNAME: &str = "robot";
const PASSWORD: &str = "secret";

/// Test database, application and the registered default user.
struct TestApp {
    test: TestContext,
    app: Router,
    user: entity::user::Model,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_server_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let user = factory::user::UserFactory::new(&db)
            .username(USERNAME)
            .password_hash(hash_password(PASSWORD))
            .build()
            .await
            .unwrap();

        let app = router::app(AppState::new(db));

        Self { test, app, user }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Creates a server owned by the default user.
    async fn server(&self, server_number: i32, server_name: &str) -> entity::server::Model {
        factory::server::ServerFactory::new(self.db(), self.user.id)
            .server_number(server_number)
            .server_name(server_name)
            .build()
            .await
            .unwrap()
    }

    /// Sends an authenticated request with an optional form body.
    async fn send(&self, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let credentials = STANDARD.encode(format!("{USERNAME}:{PASSWORD}"));
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Basic {credentials}"));

        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}

/// Asserts the error envelope of a failed request.
fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, code: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["error"]["status"], expected.as_u16());
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].is_string());
}

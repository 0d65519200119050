use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn basic(credentials: &str) -> HeaderMap {
    authorization(&format!("Basic {}", STANDARD.encode(credentials)))
}

fn authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

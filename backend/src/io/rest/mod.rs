//! # REST API Interface Layer
//!
//! HTTP endpoints for families, children, books, reading sessions,
//! achievements and progress. Each `*_apis` module owns its routes; this
//! module merges them and turns service failures into responses.
//!
//! Failures come back as `{"error": "..."}`:
//! - `DomainError::NotFound` → 404
//! - `DomainError::Validation` → 400
//! - anything else → 500 with a generic message (details go to the log)

pub mod achievement_apis;
pub mod book_apis;
pub mod child_apis;
pub mod family_apis;
pub mod mappers;
pub mod progress_apis;
pub mod reading_session_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use shared::{ErrorResponse, HealthResponse};
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(family_apis::router())
        .merge(child_apis::router())
        .merge(book_apis::router())
        .merge(reading_session_apis::router())
        .merge(achievement_apis::router())
        .merge(progress_apis::router())
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Translate a failed service call into an HTTP response
pub fn error_response(action: &str, err: anyhow::Error) -> Response {
    let (status, message) = match err.downcast_ref::<DomainError>() {
        Some(DomainError::NotFound(message)) => {
            warn!("Failed to {}: {}", action, message);
            (StatusCode::NOT_FOUND, message.clone())
        }
        Some(DomainError::Validation(message)) => {
            warn!("Failed to {}: {}", action, message);
            (StatusCode::BAD_REQUEST, message.clone())
        }
        None => {
            error!("Failed to {}: {:#}", action, err);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error trying to {}", action))
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::create_router;
    use crate::test_utils::TestEnvironment;

    pub fn app(env: &TestEnvironment) -> Router {
        create_router(env.state.clone(), &AppConfig::default()).unwrap()
    }

    /// Send one request; returns the status and the body as JSON (`Null` if empty)
    pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub fn parse<T: DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{app, send};
    use super::*;
    use crate::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_health() {
        let env = TestEnvironment::new().await.unwrap();
        let (status, body) = send(&app(&env), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_error_mapping() {
        let not_found = error_response("get book", DomainError::not_found("Book", "book::1").into());
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = error_response("add book", DomainError::validation("bad").into());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let other = error_response("list books", anyhow::anyhow!("disk on fire"));
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

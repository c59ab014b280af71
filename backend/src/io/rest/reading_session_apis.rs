//! # REST API for Reading Sessions

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use shared::LogSessionRequest;
use tracing::info;

use super::error_response;
use super::mappers::session_mapper::SessionMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/children/:id/sessions", get(list_sessions).post(log_session))
}

#[derive(Debug, Deserialize)]
pub struct SessionListParams {
    pub book_id: Option<String>,
}

/// Log a reading session; the book's progress and the child's achievements follow
pub async fn log_session(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<LogSessionRequest>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/sessions - request: {:?}", child_id, request);

    let command = match SessionMapper::to_log_command(child_id, request) {
        Ok(command) => command,
        Err(e) => return error_response("log reading session", e),
    };

    match state.reading_session_service.log_session(command).await {
        Ok(result) => (StatusCode::CREATED, Json(SessionMapper::to_log_response(result))).into_response(),
        Err(e) => error_response("log reading session", e),
    }
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(params): Query<SessionListParams>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/sessions - params: {:?}", child_id, params);

    match state
        .reading_session_service
        .list_sessions(&child_id, params.book_id.as_deref())
        .await
    {
        Ok(sessions) => (StatusCode::OK, Json(SessionMapper::to_list_response(sessions))).into_response(),
        Err(e) => error_response("list reading sessions", e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, parse, send};
    use crate::test_utils::TestEnvironment;
    use axum::http::StatusCode;
    use serde_json::json;
    use shared::{BookResponse, BookStatus, LogSessionResponse, SessionListResponse};

    #[tokio::test]
    async fn test_log_and_list_sessions() {
        let env = TestEnvironment::new().await.unwrap();
        let (_, child_id) = env.create_child("Iara").await;
        let app = app(&env);

        let (_, body) = send(
            &app,
            "POST",
            &format!("/api/children/{}/books", child_id),
            Some(json!({ "title": "Menina Bonita do Laço de Fita", "genre": "contos_de_fadas", "total_pages": 24 })),
        )
        .await;
        let book = parse::<BookResponse>(body).book;

        let sessions_uri = format!("/api/children/{}/sessions", child_id);
        let (status, body) = send(
            &app,
            "POST",
            &sessions_uri,
            Some(json!({ "book_id": book.id, "date": "2024-09-14", "minutes": 15, "pages_read": 24 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let logged: LogSessionResponse = parse(body);
        assert_eq!(logged.session.date, "2024-09-14");
        assert_eq!(logged.book.status, BookStatus::Finished);
        assert_eq!(logged.book.finish_date.as_deref(), Some("2024-09-14"));

        let (_, body) = send(&app, "GET", &format!("{}?book_id={}", sessions_uri, book.id), None).await;
        assert_eq!(parse::<SessionListResponse>(body).sessions.len(), 1);

        let (status, _) = send(
            &app,
            "POST",
            &sessions_uri,
            Some(json!({ "book_id": book.id, "minutes": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            &sessions_uri,
            Some(json!({ "book_id": "book::missing", "minutes": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

//! # REST API for Reading Progress
//!
//! Read-only views: genre map, level map, totals and the passport.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use super::error_response;
use super::mappers::progress_mapper::ProgressMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children/:id/progress/genres", get(get_genre_progress))
        .route("/children/:id/progress/level", get(get_level_progress))
        .route("/children/:id/summary", get(get_reading_summary))
        .route("/children/:id/passport", get(get_passport))
}

pub async fn get_genre_progress(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}/progress/genres", child_id);

    match state.progress_service.genre_progress(&child_id).await {
        Ok(genres) => (StatusCode::OK, Json(ProgressMapper::to_genre_response(genres))).into_response(),
        Err(e) => error_response("get genre progress", e),
    }
}

pub async fn get_level_progress(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}/progress/level", child_id);

    match state.progress_service.level_progress(&child_id).await {
        Ok(level) => (StatusCode::OK, Json(ProgressMapper::to_level_dto(level))).into_response(),
        Err(e) => error_response("get level progress", e),
    }
}

pub async fn get_reading_summary(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}/summary", child_id);

    match state.progress_service.reading_summary(&child_id).await {
        Ok(summary) => (StatusCode::OK, Json(ProgressMapper::to_summary_dto(summary))).into_response(),
        Err(e) => error_response("get reading summary", e),
    }
}

pub async fn get_passport(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}/passport", child_id);

    match state.progress_service.passport(&child_id).await {
        Ok(passport) => (StatusCode::OK, Json(ProgressMapper::to_passport_response(passport))).into_response(),
        Err(e) => error_response("get passport", e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, parse, send};
    use crate::test_utils::TestEnvironment;
    use axum::http::StatusCode;
    use serde_json::json;
    use shared::{GenreProgressResponse, LevelProgress, PassportResponse, ReadingSummary};

    #[tokio::test]
    async fn test_progress_views() {
        let env = TestEnvironment::new().await.unwrap();
        let (_, child_id) = env.create_child("Ravi").await;
        let app = app(&env);

        for (title, genre) in [("Um", "aventura"), ("Dois", "humor"), ("Três", "aventura")] {
            send(
                &app,
                "POST",
                &format!("/api/children/{}/books", child_id),
                Some(json!({ "title": title, "genre": genre, "status": "finished" })),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", &format!("/api/children/{}/progress/genres", child_id), None).await;
        assert_eq!(status, StatusCode::OK);
        let genres: GenreProgressResponse = parse(body);
        assert_eq!(genres.total_genres, 10);
        assert_eq!(genres.discovered_count, 2);
        assert_eq!(genres.genres[0].count, 2);

        let (_, body) = send(&app, "GET", &format!("/api/children/{}/progress/level", child_id), None).await;
        let level: LevelProgress = parse(body);
        assert_eq!(level.value, 3);
        assert_eq!(level.current_level.name, "Porto de Partida");
        assert!((level.fraction - 0.6).abs() < 1e-9);

        let (_, body) = send(&app, "GET", &format!("/api/children/{}/summary", child_id), None).await;
        let summary: ReadingSummary = parse(body);
        assert_eq!(summary.finished_books, 3);

        let (status, body) = send(&app, "GET", &format!("/api/children/{}/passport", child_id), None).await;
        assert_eq!(status, StatusCode::OK);
        let passport: PassportResponse = parse(body);
        assert_eq!(passport.child.name, "Ravi");
        let earned: Vec<&str> = passport
            .achievements
            .iter()
            .filter(|entry| entry.earned)
            .map(|entry| entry.achievement.code.as_str())
            .collect();
        assert_eq!(earned, vec!["primeiro_passo", "maratonista"]);
    }

    #[tokio::test]
    async fn test_unknown_child_is_404() {
        let env = TestEnvironment::new().await.unwrap();
        let (status, body) = send(&app(&env), "GET", "/api/children/child::none/passport", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
}

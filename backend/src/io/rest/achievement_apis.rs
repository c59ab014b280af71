//! # REST API for Achievements

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{AchievementCatalogResponse, CheckAchievementsResponse, EarnedAchievementsResponse};
use tracing::info;

use super::error_response;
use super::mappers::achievement_mapper::AchievementMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/achievements", get(get_catalog))
        .route("/children/:id/achievements", get(get_earned))
        .route("/children/:id/achievements/check", post(check_achievements))
}

pub async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/achievements");

    match state.achievement_service.catalog().await {
        Ok(catalog) => {
            let response = AchievementCatalogResponse { achievements: AchievementMapper::to_dto_list(catalog) };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("get achievement catalog", e),
    }
}

pub async fn get_earned(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}/achievements", child_id);

    match state.achievement_service.earned(&child_id).await {
        Ok(earned) => {
            let response = EarnedAchievementsResponse {
                achievements: earned.into_iter().map(AchievementMapper::to_earned_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("get earned achievements", e),
    }
}

/// Re-evaluate a child's shelf and award anything newly earned
pub async fn check_achievements(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("POST /api/children/{}/achievements/check", child_id);

    match state.achievement_service.check_and_award(&child_id).await {
        Ok(awarded) => {
            let response = CheckAchievementsResponse { new_achievements: AchievementMapper::to_dto_list(awarded) };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("check achievements", e),
    }
}

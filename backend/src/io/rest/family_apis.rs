//! # REST API for Families

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::CreateFamilyRequest;
use tracing::info;

use super::error_response;
use super::mappers::family_mapper::FamilyMapper;
use crate::domain::DomainError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/families", get(list_families).post(create_family))
        .route("/families/:id", get(get_family))
}

/// Register a new family
pub async fn create_family(
    State(state): State<AppState>,
    Json(request): Json<CreateFamilyRequest>,
) -> impl IntoResponse {
    info!("POST /api/families - request: {:?}", request);

    match state.family_service.create_family(FamilyMapper::to_create_command(request)).await {
        Ok(family) => (StatusCode::CREATED, Json(FamilyMapper::to_dto(family))).into_response(),
        Err(e) => error_response("create family", e),
    }
}

pub async fn list_families(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/families");

    match state.family_service.list_families().await {
        Ok(families) => (StatusCode::OK, Json(FamilyMapper::to_list_response(families))).into_response(),
        Err(e) => error_response("list families", e),
    }
}

pub async fn get_family(State(state): State<AppState>, Path(family_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/families/{}", family_id);

    match state.family_service.get_family(&family_id).await {
        Ok(Some(family)) => (StatusCode::OK, Json(FamilyMapper::to_dto(family))).into_response(),
        Ok(None) => error_response("get family", DomainError::not_found("Family", &family_id).into()),
        Err(e) => error_response("get family", e),
    }
}

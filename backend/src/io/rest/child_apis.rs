//! # REST API for Child Management
//!
//! Children are created within a family and addressed directly afterwards.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{CreateChildRequest, UpdateChildRequest};
use tracing::info;

use super::error_response;
use super::mappers::child_mapper::ChildMapper;
use crate::domain::DomainError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/families/:id/children", get(list_children).post(create_child))
        .route("/children/:id", get(get_child).put(update_child).delete(delete_child))
}

/// Create a new child in a family
pub async fn create_child(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    Json(request): Json<CreateChildRequest>,
) -> impl IntoResponse {
    info!("POST /api/families/{}/children - request: {:?}", family_id, request);

    let command = match ChildMapper::to_create_command(family_id, request) {
        Ok(command) => command,
        Err(e) => return error_response("create child", e),
    };

    match state.child_service.create_child(command).await {
        Ok(child) => (StatusCode::CREATED, Json(ChildMapper::to_dto(child))).into_response(),
        Err(e) => error_response("create child", e),
    }
}

pub async fn list_children(State(state): State<AppState>, Path(family_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/families/{}/children", family_id);

    match state.child_service.list_children(&family_id).await {
        Ok(children) => (StatusCode::OK, Json(ChildMapper::to_list_response(children))).into_response(),
        Err(e) => error_response("list children", e),
    }
}

pub async fn get_child(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/children/{}", child_id);

    match state.child_service.get_child(&child_id).await {
        Ok(Some(child)) => (StatusCode::OK, Json(ChildMapper::to_dto(child))).into_response(),
        Ok(None) => error_response("get child", DomainError::not_found("Child", &child_id).into()),
        Err(e) => error_response("get child", e),
    }
}

pub async fn update_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<UpdateChildRequest>,
) -> impl IntoResponse {
    info!("PUT /api/children/{} - request: {:?}", child_id, request);

    let command = match ChildMapper::to_update_command(request) {
        Ok(command) => command,
        Err(e) => return error_response("update child", e),
    };

    match state.child_service.update_child(&child_id, command).await {
        Ok(child) => (StatusCode::OK, Json(ChildMapper::to_dto(child))).into_response(),
        Err(e) => error_response("update child", e),
    }
}

/// Delete a child and everything recorded for them
pub async fn delete_child(State(state): State<AppState>, Path(child_id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/children/{}", child_id);

    match state.child_service.delete_child(&child_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("delete child", e),
    }
}

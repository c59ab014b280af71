//! # REST API for Books
//!
//! Adding and updating a book also runs the achievement check; the response
//! carries whatever it unlocked.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use shared::{BookStatus, CreateBookRequest, UpdateBookRequest};
use tracing::info;

use super::error_response;
use super::mappers::book_mapper::BookMapper;
use crate::domain::commands::book::BookListQuery;
use crate::domain::DomainError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children/:id/books", get(list_books).post(add_book))
        .route("/books/:id", get(get_book).put(update_book).delete(delete_book))
}

#[derive(Debug, Deserialize)]
pub struct BookListParams {
    pub status: Option<String>,
}

pub async fn add_book(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<CreateBookRequest>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/books - request: {:?}", child_id, request);

    let command = match BookMapper::to_add_command(child_id, request) {
        Ok(command) => command,
        Err(e) => return error_response("add book", e),
    };

    match state.book_service.add_book(command).await {
        Ok(result) => (StatusCode::CREATED, Json(BookMapper::to_book_response(result))).into_response(),
        Err(e) => error_response("add book", e),
    }
}

/// List a child's books, optionally `?status=to_read|reading|finished`
pub async fn list_books(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(params): Query<BookListParams>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/books - params: {:?}", child_id, params);

    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match BookStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return error_response(
                    "list books",
                    DomainError::validation(format!("Unknown book status: {}", raw)).into(),
                )
            }
        },
    };

    match state.book_service.list_books(&child_id, BookListQuery { status }).await {
        Ok(books) => (StatusCode::OK, Json(BookMapper::to_list_response(books))).into_response(),
        Err(e) => error_response("list books", e),
    }
}

pub async fn get_book(State(state): State<AppState>, Path(book_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/books/{}", book_id);

    match state.book_service.get_book(&book_id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(BookMapper::to_dto(book))).into_response(),
        Ok(None) => error_response("get book", DomainError::not_found("Book", &book_id).into()),
        Err(e) => error_response("get book", e),
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(request): Json<UpdateBookRequest>,
) -> impl IntoResponse {
    info!("PUT /api/books/{} - request: {:?}", book_id, request);

    let command = match BookMapper::to_update_command(request) {
        Ok(command) => command,
        Err(e) => return error_response("update book", e),
    };

    match state.book_service.update_book(&book_id, command).await {
        Ok(result) => (StatusCode::OK, Json(BookMapper::to_book_response(result))).into_response(),
        Err(e) => error_response("update book", e),
    }
}

pub async fn delete_book(State(state): State<AppState>, Path(book_id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/books/{}", book_id);

    match state.book_service.delete_book(&book_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("delete book", e),
    }
}

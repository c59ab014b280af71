//! # Passaporte do Leitor backend
//!
//! Everything behind the React SPA: the REST API, the reading and
//! achievement rules, and the SQLite record store.
//!
//! ## Architecture
//!
//! ```text
//! React SPA
//!     ↓
//! IO Layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, pure evaluators)
//!     ↓
//! Storage Layer (sqlx SQLite repositories)
//! ```
//!
//! The achievement evaluator, genre aggregator and level calculator in
//! `domain` are plain functions over domain models; services feed them from
//! storage and the REST layer only ever talks to services.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    AchievementService, BookService, ChildService, FamilyService, ProgressService, ReadingSessionService,
};
use crate::storage::{
    AchievementRepository, BookRepository, ChildRepository, DbConnection, FamilyRepository,
    ReadingSessionRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub family_service: FamilyService,
    pub child_service: ChildService,
    pub book_service: BookService,
    pub reading_session_service: ReadingSessionService,
    pub achievement_service: AchievementService,
    pub progress_service: ProgressService,
}

impl AppState {
    /// Wire every service to repositories sharing one connection pool
    pub fn from_connection(db: DbConnection) -> Self {
        let families = Arc::new(FamilyRepository::new(db.clone()));
        let children = Arc::new(ChildRepository::new(db.clone()));
        let books = Arc::new(BookRepository::new(db.clone()));
        let sessions = Arc::new(ReadingSessionRepository::new(db.clone()));
        let achievements = Arc::new(AchievementRepository::new(db));

        let achievement_service =
            AchievementService::new(achievements.clone(), books.clone(), children.clone());

        Self {
            family_service: FamilyService::new(families.clone()),
            child_service: ChildService::new(families, children.clone()),
            book_service: BookService::new(books.clone(), children.clone(), achievement_service.clone()),
            reading_session_service: ReadingSessionService::new(
                sessions.clone(),
                books.clone(),
                children.clone(),
                achievement_service.clone(),
            ),
            progress_service: ProgressService::new(books, sessions, achievements, children),
            achievement_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    if let Some(parent) = config.database_path().as_deref().and_then(|path| path.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
    }

    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain services");
    Ok(AppState::from_connection(db))
}

/// Create the axum router with all routes configured
pub fn create_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let mut router = Router::new()
        .nest("/api", io::rest::router())
        .with_state(state);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving SPA from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    Ok(router.layer(cors))
}

//! # Domain Module
//!
//! Business logic for Passaporte do Leitor.
//!
//! The domain layer owns the reading rules: which achievements a child has
//! unlocked, how far they have explored each genre, and where they stand on
//! the reading map. It talks to persistence only through the traits in
//! [`crate::storage::traits`].
//!
//! ## Module Organization
//!
//! - **achievement_evaluator**: pure rule evaluation over a child's books
//! - **genre_progress**: pure per-genre aggregation against the genre catalog
//! - **level_progress**: pure map-level lookup for a progress value
//! - **family_service / child_service**: registering families and children
//! - **book_service**: the book shelf and its status workflow
//! - **reading_session_service**: logging reading time and pages
//! - **achievement_service**: evaluating and persisting awards
//! - **progress_service**: summaries and the passport view
//!
//! ## Business Rules
//!
//! - Earned achievements are never revoked; re-evaluation only adds
//! - Requirements are checked against the child's whole current shelf
//! - A book is `to_read`, `reading` or `finished`; finishing stamps a date
//! - Monthly requirements use the UTC calendar month of the evaluation

pub mod achievement_evaluator;
pub mod achievement_service;
pub mod book_service;
pub mod child_service;
pub mod commands;
pub mod error;
pub mod family_service;
pub mod genre_progress;
pub mod level_progress;
pub mod models;
pub mod progress_service;
pub mod reading_session_service;

pub use achievement_service::AchievementService;
pub use book_service::BookService;
pub use child_service::ChildService;
pub use error::DomainError;
pub use family_service::FamilyService;
pub use progress_service::ProgressService;
pub use reading_session_service::ReadingSessionService;

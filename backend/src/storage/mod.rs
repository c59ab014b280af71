//! # Storage Module
//!
//! Persistence for the reading tracker: a SQLite database reached through
//! SQLx, one repository per table, and the async traits the domain services
//! depend on.
//!
//! ## Key Responsibilities
//!
//! - **Connection Management**: creating the database file and pool
//! - **Schema Bootstrap**: idempotent table creation and catalog seeding
//! - **Repositories**: row mapping for families, children, books, sessions
//!   and achievements
//! - **Award Uniqueness**: at most one award per (child, achievement) pair,
//!   enforced by the schema rather than by callers

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{
    AchievementRepository, BookRepository, ChildRepository, FamilyRepository,
    ReadingSessionRepository,
};
pub use traits::*;

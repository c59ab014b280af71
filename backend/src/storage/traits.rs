//! # Storage Traits
//!
//! The interfaces domain services use to reach persisted records. The SQLite
//! repositories implement them; services only ever hold `Arc<dyn ...>`.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::domain::models::{
    Achievement, Book, Child, EarnedAchievement, Family, ReadingSession, SessionTotals,
};

#[async_trait]
pub trait FamilyStorage: Send + Sync {
    async fn store_family(&self, family: &Family) -> Result<()>;

    async fn get_family(&self, family_id: &str) -> Result<Option<Family>>;

    /// List all families ordered by name
    async fn list_families(&self) -> Result<Vec<Family>>;
}

#[async_trait]
pub trait ChildStorage: Send + Sync {
    async fn store_child(&self, child: &Child) -> Result<()>;

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List a family's children ordered by name
    async fn list_children(&self, family_id: &str) -> Result<Vec<Child>>;

    async fn update_child(&self, child: &Child) -> Result<()>;

    /// Returns true if the child existed. Cascades to books, sessions and awards.
    async fn delete_child(&self, child_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait BookStorage: Send + Sync {
    async fn store_book(&self, book: &Book) -> Result<()>;

    async fn get_book(&self, book_id: &str) -> Result<Option<Book>>;

    /// Every book a child has, newest first
    async fn list_books(&self, child_id: &str) -> Result<Vec<Book>>;

    async fn update_book(&self, book: &Book) -> Result<()>;

    /// Returns true if the book existed
    async fn delete_book(&self, book_id: &str) -> Result<bool>;

    /// Number of books the child has finished; drives the reading map
    async fn count_finished_books(&self, child_id: &str) -> Result<u32>;
}

#[async_trait]
pub trait ReadingSessionStorage: Send + Sync {
    /// Store a session and advance its book by the pages read, atomically.
    /// Returns the book as it stands afterwards and whether this session finished it.
    async fn record_session(&self, session: &ReadingSession) -> Result<(Book, bool)>;

    /// Sessions for a child, most recent day first, optionally for one book
    async fn list_sessions(&self, child_id: &str, book_id: Option<&str>) -> Result<Vec<ReadingSession>>;

    async fn session_totals(&self, child_id: &str) -> Result<SessionTotals>;
}

#[async_trait]
pub trait AchievementStorage: Send + Sync {
    /// The full catalog in display order
    async fn list_catalog(&self) -> Result<Vec<Achievement>>;

    async fn earned_codes(&self, child_id: &str) -> Result<HashSet<String>>;

    /// Achievements a child holds, oldest award first
    async fn list_earned(&self, child_id: &str) -> Result<Vec<EarnedAchievement>>;

    /// Record awards atomically. Pairs that already exist are skipped, and
    /// only the achievements actually inserted by this call are returned.
    async fn record_awards(
        &self,
        child_id: &str,
        achievements: &[Achievement],
        earned_at: DateTime<Utc>,
    ) -> Result<Vec<Achievement>>;
}

//! Read-only views over a child's reading: the genre map, the level map,
//! running totals and the passport that combines them.

use anyhow::{anyhow, Result};
use shared::BookStatus;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::domain::child_service::require_child;
use crate::domain::commands::progress::{Passport, PassportEntry, ReadingSummary};
use crate::domain::genre_progress;
use crate::domain::level_progress;
use crate::domain::models::{GenreProgress, LevelProgress, GENRE_CATALOG, MAP_LEVELS};
use crate::storage::traits::{AchievementStorage, BookStorage, ChildStorage, ReadingSessionStorage};

#[derive(Clone)]
pub struct ProgressService {
    books: Arc<dyn BookStorage>,
    sessions: Arc<dyn ReadingSessionStorage>,
    achievements: Arc<dyn AchievementStorage>,
    children: Arc<dyn ChildStorage>,
}

impl ProgressService {
    pub fn new(
        books: Arc<dyn BookStorage>,
        sessions: Arc<dyn ReadingSessionStorage>,
        achievements: Arc<dyn AchievementStorage>,
        children: Arc<dyn ChildStorage>,
    ) -> Self {
        Self { books, sessions, achievements, children }
    }

    /// Book counts for every genre on the map
    pub async fn genre_progress(&self, child_id: &str) -> Result<Vec<GenreProgress>> {
        require_child(self.children.as_ref(), child_id).await?;
        let books = self.books.list_books(child_id).await?;
        Ok(genre_progress::aggregate(&books, GENRE_CATALOG))
    }

    /// Position on the reading map, measured in finished books
    pub async fn level_progress(&self, child_id: &str) -> Result<LevelProgress> {
        require_child(self.children.as_ref(), child_id).await?;
        let finished = self.books.count_finished_books(child_id).await?;
        Self::level_for(finished)
    }

    pub async fn reading_summary(&self, child_id: &str) -> Result<ReadingSummary> {
        require_child(self.children.as_ref(), child_id).await?;
        self.summarize(child_id).await
    }

    /// Everything the passport page shows, in one call
    pub async fn passport(&self, child_id: &str) -> Result<Passport> {
        info!("Building passport for child {}", child_id);

        let child = require_child(self.children.as_ref(), child_id).await?;
        let books = self.books.list_books(child_id).await?;
        let summary = self.summarize(child_id).await?;
        let level = Self::level_for(summary.finished_books)?;
        let genres = genre_progress::aggregate(&books, GENRE_CATALOG);

        let earned_at: HashMap<String, _> = self
            .achievements
            .list_earned(child_id)
            .await?
            .into_iter()
            .map(|earned| (earned.achievement.code, earned.earned_at))
            .collect();
        let achievements = self
            .achievements
            .list_catalog()
            .await?
            .into_iter()
            .map(|achievement| PassportEntry {
                earned_at: earned_at.get(&achievement.code).copied(),
                achievement,
            })
            .collect();

        Ok(Passport { child, summary, level, genres, achievements })
    }

    async fn summarize(&self, child_id: &str) -> Result<ReadingSummary> {
        let books = self.books.list_books(child_id).await?;
        let totals = self.sessions.session_totals(child_id).await?;
        let earned = self.achievements.earned_codes(child_id).await?;

        let count = |status: BookStatus| books.iter().filter(|book| book.status == status).count() as u32;

        Ok(ReadingSummary {
            child_id: child_id.to_string(),
            total_books: books.len() as u32,
            finished_books: count(BookStatus::Finished),
            reading_books: count(BookStatus::Reading),
            to_read_books: count(BookStatus::ToRead),
            rated_books: books.iter().filter(|book| book.rating.is_some()).count() as u32,
            sessions: totals.sessions,
            minutes_read: totals.minutes,
            pages_read: totals.pages,
            achievements_earned: earned.len() as u32,
        })
    }

    fn level_for(finished_books: u32) -> Result<LevelProgress> {
        level_progress::calculate(finished_books, MAP_LEVELS).ok_or_else(|| anyhow!("Reading map has no levels"))
    }
}

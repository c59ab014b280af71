//! Achievement evaluation and awarding.
//!
//! Loads a child's snapshot (books, earned codes, catalog), runs the pure
//! evaluator and hands the result to storage, which inserts each
//! (child, achievement) pair at most once. Only awards this call actually
//! inserted are reported, so two concurrent checks never both announce the
//! same achievement.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::achievement_evaluator;
use crate::domain::child_service::require_child;
use crate::domain::models::{Achievement, EarnedAchievement};
use crate::storage::traits::{AchievementStorage, BookStorage, ChildStorage};

#[derive(Clone)]
pub struct AchievementService {
    achievements: Arc<dyn AchievementStorage>,
    books: Arc<dyn BookStorage>,
    children: Arc<dyn ChildStorage>,
}

impl AchievementService {
    pub fn new(
        achievements: Arc<dyn AchievementStorage>,
        books: Arc<dyn BookStorage>,
        children: Arc<dyn ChildStorage>,
    ) -> Self {
        Self { achievements, books, children }
    }

    /// The full achievement catalog in display order
    pub async fn catalog(&self) -> Result<Vec<Achievement>> {
        self.achievements.list_catalog().await
    }

    /// Achievements a child has earned, oldest first
    pub async fn earned(&self, child_id: &str) -> Result<Vec<EarnedAchievement>> {
        require_child(self.children.as_ref(), child_id).await?;
        self.achievements.list_earned(child_id).await
    }

    /// Evaluate the catalog for a child and persist whatever newly qualifies.
    pub async fn check_and_award(&self, child_id: &str) -> Result<Vec<Achievement>> {
        require_child(self.children.as_ref(), child_id).await?;

        let books = self.books.list_books(child_id).await?;
        let already_earned = self.achievements.earned_codes(child_id).await?;
        let catalog = self.achievements.list_catalog().await?;

        let qualifying = achievement_evaluator::evaluate(&books, &already_earned, &catalog);
        if qualifying.is_empty() {
            return Ok(Vec::new());
        }

        let awarded = self
            .achievements
            .record_awards(child_id, &qualifying, Utc::now())
            .await?;

        for achievement in &awarded {
            info!("🏅 Child {} earned {} ({})", child_id, achievement.name, achievement.code);
        }
        Ok(awarded)
    }
}

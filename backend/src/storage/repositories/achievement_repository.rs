use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::AchievementRequirement;
use sqlx::{sqlite::SqliteRow, Row};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::domain::models::{Achievement, EarnedAchievement};
use crate::storage::connection::DbConnection;
use crate::storage::traits::AchievementStorage;

/// Repository for the achievement catalog and awarded achievements
#[derive(Clone)]
pub struct AchievementRepository {
    db: DbConnection,
}

impl AchievementRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Achievement> {
        let code: String = row.try_get("code")?;
        let raw_requirement: String = row.try_get("requirement")?;

        // A descriptor this build can't read stays in the catalog but can never be earned
        let requirement = match serde_json::from_str::<AchievementRequirement>(&raw_requirement) {
            Ok(AchievementRequirement::Unknown) => {
                warn!("Achievement {} has an unrecognised requirement: {}", code, raw_requirement);
                AchievementRequirement::Unknown
            }
            Ok(requirement) => requirement,
            Err(e) => {
                warn!("Achievement {} has a malformed requirement ({}): {}", code, e, raw_requirement);
                AchievementRequirement::Unknown
            }
        };

        Ok(Achievement {
            id: row.try_get("id")?,
            code,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            icon: row.try_get("icon")?,
            requirement,
            sort_order: row.try_get("sort_order")?,
        })
    }
}

#[async_trait]
impl AchievementStorage for AchievementRepository {
    async fn list_catalog(&self) -> Result<Vec<Achievement>> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, name, description, icon, requirement, sort_order
            FROM achievements
            ORDER BY sort_order ASC, code ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn earned_codes(&self, child_id: &str) -> Result<HashSet<String>> {
        let rows = sqlx::query(
            r#"
            SELECT a.code
            FROM child_achievements ca
            JOIN achievements a ON a.id = ca.achievement_id
            WHERE ca.child_id = ?
            "#,
        )
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("code").map_err(anyhow::Error::from))
            .collect()
    }

    async fn list_earned(&self, child_id: &str) -> Result<Vec<EarnedAchievement>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.code, a.name, a.description, a.icon, a.requirement, a.sort_order, ca.earned_at
            FROM child_achievements ca
            JOIN achievements a ON a.id = ca.achievement_id
            WHERE ca.child_id = ?
            ORDER BY ca.earned_at ASC, a.sort_order ASC
            "#,
        )
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(EarnedAchievement {
                    achievement: Self::from_row(row)?,
                    earned_at: row.try_get("earned_at")?,
                })
            })
            .collect()
    }

    async fn record_awards(
        &self,
        child_id: &str,
        achievements: &[Achievement],
        earned_at: DateTime<Utc>,
    ) -> Result<Vec<Achievement>> {
        if achievements.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.db.pool().begin().await?;
        let mut inserted = Vec::new();

        for achievement in achievements {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO child_achievements (child_id, achievement_id, earned_at)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(child_id)
            .bind(&achievement.id)
            .bind(earned_at)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 1 {
                inserted.push(achievement.clone());
            } else {
                info!("Child {} already holds {}, skipping", child_id, achievement.code);
            }
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

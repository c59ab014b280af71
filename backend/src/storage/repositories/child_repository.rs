use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::Child;
use crate::storage::connection::DbConnection;
use crate::storage::traits::ChildStorage;

/// Repository for child operations
#[derive(Clone)]
pub struct ChildRepository {
    db: DbConnection,
}

impl ChildRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Child> {
        Ok(Child {
            id: row.try_get("id")?,
            family_id: row.try_get("family_id")?,
            name: row.try_get("name")?,
            birth_date: row.try_get("birth_date")?,
            avatar: row.try_get("avatar")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ChildStorage for ChildRepository {
    async fn store_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO children (id, family_id, name, birth_date, avatar, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&child.id)
        .bind(&child.family_id)
        .bind(&child.name)
        .bind(child.birth_date)
        .bind(&child.avatar)
        .bind(child.created_at)
        .bind(child.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let row = sqlx::query(
            r#"
            SELECT id, family_id, name, birth_date, avatar, created_at, updated_at
            FROM children
            WHERE id = ?
            "#,
        )
        .bind(child_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_children(&self, family_id: &str) -> Result<Vec<Child>> {
        let rows = sqlx::query(
            r#"
            SELECT id, family_id, name, birth_date, avatar, created_at, updated_at
            FROM children
            WHERE family_id = ?
            ORDER BY name ASC
            "#,
        )
        .bind(family_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE children
            SET name = ?, birth_date = ?, avatar = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&child.name)
        .bind(child.birth_date)
        .bind(&child.avatar)
        .bind(child.updated_at)
        .bind(&child.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_child(&self, child_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM children WHERE id = ?
            "#,
        )
        .bind(child_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::Family;
use crate::storage::connection::DbConnection;
use crate::storage::traits::FamilyStorage;

/// Repository for family operations
#[derive(Clone)]
pub struct FamilyRepository {
    db: DbConnection,
}

impl FamilyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Family> {
        Ok(Family {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl FamilyStorage for FamilyRepository {
    async fn store_family(&self, family: &Family) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO families (id, name, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&family.id)
        .bind(&family.name)
        .bind(family.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_family(&self, family_id: &str) -> Result<Option<Family>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM families
            WHERE id = ?
            "#,
        )
        .bind(family_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_families(&self) -> Result<Vec<Family>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM families
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_store_get_and_list_families() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = FamilyRepository::new(db);

        for name in ["Silva", "Almeida"] {
            let family = Family {
                id: Family::generate_id(),
                name: name.to_string(),
                created_at: Utc::now(),
            };
            repo.store_family(&family).await.unwrap();
            let stored = repo.get_family(&family.id).await.unwrap().unwrap();
            assert_eq!(stored.name, name);
        }

        let families = repo.list_families().await.unwrap();
        let names: Vec<&str> = families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Almeida", "Silva"]);

        assert!(repo.get_family("family::missing").await.unwrap().is_none());
    }
}

//! Shared fixtures for service and REST tests.
//!
//! Every `TestEnvironment` owns its own in-memory database, so tests never
//! see each other's rows.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::commands::child::CreateChildCommand;
use crate::domain::commands::family::CreateFamilyCommand;
use crate::storage::{BookRepository, DbConnection};
use crate::AppState;

pub struct TestEnvironment {
    pub state: AppState,
    pub db: DbConnection,
    /// Direct storage access for arranging rows without side effects
    pub books: Arc<BookRepository>,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let db = DbConnection::init_test().await?;
        let state = AppState::from_connection(db.clone());
        let books = Arc::new(BookRepository::new(db.clone()));
        Ok(Self { state, db, books })
    }

    pub async fn create_family(&self, name: &str) -> String {
        self.state
            .family_service
            .create_family(CreateFamilyCommand { name: name.to_string() })
            .await
            .expect("family should be created")
            .id
    }

    /// Create a family with a single child; returns `(family_id, child_id)`
    pub async fn create_child(&self, name: &str) -> (String, String) {
        let family_id = self.create_family(&format!("Família de {}", name)).await;
        let child_id = self.add_child(&family_id, name).await;
        (family_id, child_id)
    }

    pub async fn add_child(&self, family_id: &str, name: &str) -> String {
        self.state
            .child_service
            .create_child(CreateChildCommand {
                family_id: family_id.to_string(),
                name: name.to_string(),
                birth_date: None,
                avatar: None,
            })
            .await
            .expect("child should be created")
            .id
    }
}

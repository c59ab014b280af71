use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::family::CreateFamilyCommand;
use crate::domain::error::DomainError;
use crate::domain::models::Family;
use crate::storage::traits::FamilyStorage;

/// Service for registering families
#[derive(Clone)]
pub struct FamilyService {
    families: Arc<dyn FamilyStorage>,
}

impl FamilyService {
    pub fn new(families: Arc<dyn FamilyStorage>) -> Self {
        Self { families }
    }

    pub async fn create_family(&self, command: CreateFamilyCommand) -> Result<Family> {
        info!("Creating family: name={}", command.name);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Family name cannot be empty").into());
        }
        if name.chars().count() > 100 {
            return Err(DomainError::validation("Family name cannot exceed 100 characters").into());
        }

        let family = Family {
            id: Family::generate_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.families.store_family(&family).await?;

        info!("Created family {} with ID: {}", family.name, family.id);
        Ok(family)
    }

    pub async fn get_family(&self, family_id: &str) -> Result<Option<Family>> {
        let family = self.families.get_family(family_id).await?;
        if family.is_none() {
            warn!("Family not found: {}", family_id);
        }
        Ok(family)
    }

    pub async fn list_families(&self) -> Result<Vec<Family>> {
        let families = self.families.list_families().await?;
        info!("Found {} families", families.len());
        Ok(families)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, FamilyRepository};

    async fn setup_service() -> FamilyService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        FamilyService::new(Arc::new(FamilyRepository::new(db)))
    }

    #[tokio::test]
    async fn test_create_family_trims_name() {
        let service = setup_service().await;
        let family = service
            .create_family(CreateFamilyCommand { name: "  Família Rocha ".to_string() })
            .await
            .unwrap();

        assert_eq!(family.name, "Família Rocha");
        let stored = service.get_family(&family.id).await.unwrap().unwrap();
        assert_eq!(stored.id, family.id);
        assert_eq!(service.list_families().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_family_rejects_blank_name() {
        let service = setup_service().await;
        let err = service
            .create_family(CreateFamilyCommand { name: "   ".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::Validation(_))));
    }
}

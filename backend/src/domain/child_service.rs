use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::child::{CreateChildCommand, UpdateChildCommand};
use crate::domain::error::DomainError;
use crate::domain::models::{Child, DEFAULT_AVATAR};
use crate::storage::traits::{ChildStorage, FamilyStorage};

/// Look up a child, turning a miss into `DomainError::NotFound`
pub(crate) async fn require_child(children: &dyn ChildStorage, child_id: &str) -> Result<Child> {
    children
        .get_child(child_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Child", child_id).into())
}

/// Service for managing the children of a family
#[derive(Clone)]
pub struct ChildService {
    families: Arc<dyn FamilyStorage>,
    children: Arc<dyn ChildStorage>,
}

impl ChildService {
    pub fn new(families: Arc<dyn FamilyStorage>, children: Arc<dyn ChildStorage>) -> Self {
        Self { families, children }
    }

    /// Create a new child in an existing family
    pub async fn create_child(&self, command: CreateChildCommand) -> Result<Child> {
        info!("Creating child: name={}, family={}", command.name, command.family_id);

        if self.families.get_family(&command.family_id).await?.is_none() {
            return Err(DomainError::not_found("Family", &command.family_id).into());
        }

        let name = Self::validate_name(&command.name)?;
        if let Some(birth_date) = command.birth_date {
            Self::validate_birth_date(birth_date)?;
        }

        let now = Utc::now();
        let child = Child {
            id: Child::generate_id(),
            family_id: command.family_id,
            name,
            birth_date: command.birth_date,
            avatar: Self::normalize_avatar(command.avatar),
            created_at: now,
            updated_at: now,
        };

        self.children.store_child(&child).await?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    pub async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self.children.get_child(child_id).await?;
        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }
        Ok(child)
    }

    /// List a family's children ordered by name
    pub async fn list_children(&self, family_id: &str) -> Result<Vec<Child>> {
        if self.families.get_family(family_id).await?.is_none() {
            return Err(DomainError::not_found("Family", family_id).into());
        }

        let children = self.children.list_children(family_id).await?;
        info!("Found {} children in family {}", children.len(), family_id);
        Ok(children)
    }

    pub async fn update_child(&self, child_id: &str, command: UpdateChildCommand) -> Result<Child> {
        info!("Updating child: {}", child_id);

        let mut child = require_child(self.children.as_ref(), child_id).await?;

        if let Some(name) = command.name {
            child.name = Self::validate_name(&name)?;
        }
        if let Some(birth_date) = command.birth_date {
            Self::validate_birth_date(birth_date)?;
            child.birth_date = Some(birth_date);
        }
        if command.avatar.is_some() {
            child.avatar = Self::normalize_avatar(command.avatar);
        }
        child.updated_at = Utc::now();

        self.children.update_child(&child).await?;

        info!("Updated child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// Delete a child along with their books, sessions and achievements
    pub async fn delete_child(&self, child_id: &str) -> Result<()> {
        info!("Deleting child: {}", child_id);

        if !self.children.delete_child(child_id).await? {
            return Err(DomainError::not_found("Child", child_id).into());
        }
        Ok(())
    }

    fn validate_name(name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Child name cannot be empty").into());
        }
        if name.chars().count() > 100 {
            return Err(DomainError::validation("Child name cannot exceed 100 characters").into());
        }
        Ok(name.to_string())
    }

    fn validate_birth_date(birth_date: NaiveDate) -> Result<()> {
        if birth_date > Utc::now().date_naive() {
            return Err(DomainError::validation("Birth date cannot be in the future").into());
        }
        Ok(())
    }

    fn normalize_avatar(avatar: Option<String>) -> String {
        avatar
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_create_child_requires_existing_family() {
        let env = TestEnvironment::new().await.unwrap();
        let err = env
            .state
            .child_service
            .create_child(CreateChildCommand {
                family_id: "family::missing".to_string(),
                name: "Davi".to_string(),
                birth_date: None,
                avatar: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_update_and_delete_child() {
        let env = TestEnvironment::new().await.unwrap();
        let family_id = env.create_family("Moreira").await;
        let service = &env.state.child_service;

        let child = service
            .create_child(CreateChildCommand {
                family_id: family_id.clone(),
                name: " Helena ".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2016, 8, 21),
                avatar: None,
            })
            .await
            .unwrap();
        assert_eq!(child.name, "Helena");
        assert_eq!(child.avatar, DEFAULT_AVATAR);

        let updated = service
            .update_child(
                &child.id,
                UpdateChildCommand { avatar: Some("🦄".to_string()), ..Default::default() },
            )
            .await
            .unwrap();
        assert_eq!(updated.avatar, "🦄");
        assert_eq!(updated.name, "Helena");

        assert_eq!(service.list_children(&family_id).await.unwrap().len(), 1);

        service.delete_child(&child.id).await.unwrap();
        assert!(service.get_child(&child.id).await.unwrap().is_none());
        let err = service.delete_child(&child.id).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_future_birth_date_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let family_id = env.create_family("Pereira").await;
        let tomorrow = Utc::now().date_naive().succ_opt().unwrap();

        let err = env
            .state
            .child_service
            .create_child(CreateChildCommand {
                family_id,
                name: "Nina".to_string(),
                birth_date: Some(tomorrow),
                avatar: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::Validation(_))));
    }
}

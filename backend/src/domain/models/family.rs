use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Family {
    pub fn generate_id() -> String {
        format!("family::{}", uuid::Uuid::new_v4())
    }
}

use chrono::{DateTime, NaiveDate, Utc};

/// Avatar used when a parent doesn't pick one
pub const DEFAULT_AVATAR: &str = "📚";

#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub id: String,
    pub family_id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    pub fn generate_id() -> String {
        format!("child::{}", uuid::Uuid::new_v4())
    }
}

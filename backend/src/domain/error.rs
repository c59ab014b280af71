/// Failures the REST layer reports to the client as something other than a 500.
///
/// Services return `anyhow::Result` and raise these through it; handlers
/// downcast to pick the status code.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(what: &str, id: &str) -> Self {
        DomainError::NotFound(format!("{} not found: {}", what, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}

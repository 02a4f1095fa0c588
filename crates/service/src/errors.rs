use std::time::Duration;

use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("store operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }

    pub fn persistence(e: impl std::fmt::Display) -> Self { Self::Persistence(e.to_string()) }

    /// Timeouts count as store failures for the caller.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Timeout(_))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            e @ (ModelError::Config(_) | ModelError::Connect(_)) => Self::Persistence(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_service_errors() {
        let e = ServiceError::from(ModelError::Validation("bad".into()));
        assert!(matches!(e, ServiceError::Validation(ref m) if m == "bad"));
        assert!(!e.is_persistence());

        let e = ServiceError::from(ModelError::Connect("refused".into()));
        assert!(matches!(e, ServiceError::Persistence(ref m) if m.contains("refused")));
        assert!(e.is_persistence());
        assert!(ServiceError::Timeout(Duration::from_millis(5)).is_persistence());
        assert!(!ServiceError::not_found("issue", 1).is_persistence());
    }
}

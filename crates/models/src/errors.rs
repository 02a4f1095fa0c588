use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Payload or identifier rejected before any query runs
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid database config: {0}")]
    Config(String),
    #[error("database connection failed: {0}")]
    Connect(String),
}

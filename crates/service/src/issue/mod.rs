//! Issue access: the store contract, its backends, and the service that
//! validates requests and runs each one against the store under a time budget.

pub mod repository;
pub mod service;

pub use repository::{memory::InMemoryIssueRepository, InsertOneResult, IssueRepository, SeaOrmIssueRepository};
pub use service::{IssueService, DEFAULT_REQUEST_TIMEOUT};

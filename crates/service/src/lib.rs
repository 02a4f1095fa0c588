//! Service layer for issue tracking on top of `models`.
//! - Separates request validation and error surfacing from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Store backends sit behind the `IssueRepository` trait.

pub mod errors;
pub mod issue;
#[cfg(test)]
pub mod test_support;

/// Payload validation and identifier parsing
pub mod issue_tests;

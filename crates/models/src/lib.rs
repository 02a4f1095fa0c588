pub mod errors;
pub mod db;
pub mod issue;

#[cfg(test)]
mod tests;

//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown sort key: {0:?} (expected \"name\" or \"email\")")]
  UnknownSortKey(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

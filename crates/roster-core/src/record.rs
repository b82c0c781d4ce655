//! User records — the directory entries fetched from the remote endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, opaque identifier for a user record, unique across a fetched
/// collection. The only key associating rendered rows with records.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// One directory entry. The remote payload may carry additional attributes
/// (username, address, company, …); serde drops anything not listed here,
/// since nothing else is read to produce the visible table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub id:    UserId,
  pub name:  String,
  pub email: String,
}

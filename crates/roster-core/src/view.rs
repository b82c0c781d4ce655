//! The view pipeline — the pure derivation from (records, search term,
//! sort key, page) to the currently visible page.
//!
//! Every step is total and side-effect-free. The application layer owns
//! the inputs and decides when to recompute; nothing here mutates a record
//! in place.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  collate::collate,
  record::UserRecord,
};

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 10;

// ─── Sort key ─────────────────────────────────────────────────────────────────

/// The column a sort is keyed on. Both keys sort ascending under
/// [`collate`]; there is deliberately no descending toggle.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
  #[default]
  Name,
  Email,
}

impl SortKey {
  /// The comparison field of `record` for this key.
  pub fn field<'a>(&self, record: &'a UserRecord) -> &'a str {
    match self {
      Self::Name => &record.name,
      Self::Email => &record.email,
    }
  }
}

impl FromStr for SortKey {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "name" => Ok(Self::Name),
      "email" => Ok(Self::Email),
      _ => Err(Error::UnknownSortKey(s.to_owned())),
    }
  }
}

// ─── Pipeline stages ──────────────────────────────────────────────────────────

/// Records whose `name` or `email` contains `term` as a case-insensitive
/// substring, in their original relative order. An empty term matches
/// everything.
pub fn filter_records<'a>(
  records: &'a [UserRecord],
  term: &str,
) -> Vec<&'a UserRecord> {
  if term.is_empty() {
    return records.iter().collect();
  }
  let needle = term.to_lowercase();
  records
    .iter()
    .filter(|r| {
      r.name.to_lowercase().contains(&needle)
        || r.email.to_lowercase().contains(&needle)
    })
    .collect()
}

/// Stable ascending sort by `key` under [`collate`]; records with equal
/// keys retain their relative input order.
pub fn sort_records<'a>(
  mut records: Vec<&'a UserRecord>,
  key: SortKey,
) -> Vec<&'a UserRecord> {
  records.sort_by(|a, b| collate(key.field(a), key.field(b)));
  records
}

/// One visible page of the derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
  /// Records at zero-based offsets `[(page-1)·PAGE_SIZE, page·PAGE_SIZE)`
  /// of the sorted, filtered sequence. Empty when `page` is out of range.
  pub records:        Vec<&'a UserRecord>,
  /// The 1-based page the slice was taken from.
  pub page:           usize,
  /// How many records survived the filter, across all pages.
  pub filtered_count: usize,
  pub has_prev:       bool,
  pub has_next:       bool,
}

/// Slice one page out of the sorted, filtered sequence.
pub fn paginate(sorted: Vec<&UserRecord>, page: usize) -> PageView<'_> {
  let filtered_count = sorted.len();
  let page = page.max(1);
  let start = (page - 1) * PAGE_SIZE;
  let end = (start + PAGE_SIZE).min(filtered_count);

  let records = if start < filtered_count {
    sorted[start..end].to_vec()
  } else {
    Vec::new()
  };

  PageView {
    records,
    page,
    filtered_count,
    has_prev: page > 1,
    has_next: page * PAGE_SIZE < filtered_count,
  }
}

/// The full derivation: filter, sort, then slice the requested page.
pub fn derive_view<'a>(
  records: &'a [UserRecord],
  term: &str,
  key: SortKey,
  page: usize,
) -> PageView<'a> {
  paginate(sort_records(filter_records(records, term), key), page)
}

// ─── Collection-level operations ──────────────────────────────────────────────

/// Initial ordering applied right after a successful fetch: ascending by
/// name under [`collate`].
pub fn normalize_fetched(records: &mut [UserRecord]) {
  records.sort_by(|a, b| collate(&a.name, &b.name));
}

/// The destructive sort: the newly sorted, *currently filtered* view,
/// cloned into a fresh collection that replaces the previous one. Records
/// excluded by `term` at sort time are dropped from the result; clearing
/// the search afterwards reveals this snapshot, not the pre-sort set.
pub fn sorted_snapshot(
  records: &[UserRecord],
  term: &str,
  key: SortKey,
) -> Vec<UserRecord> {
  sort_records(filter_records(records, term), key)
    .into_iter()
    .cloned()
    .collect()
}

/// The nearest in-range page for a filtered count: the last non-empty page,
/// or 1 when the result set is empty. Callers clamp with this after every
/// mutation that can shrink the result set, rather than rendering an empty
/// out-of-range page.
pub fn clamp_page(page: usize, filtered_count: usize) -> usize {
  let last = filtered_count.div_ceil(PAGE_SIZE).max(1);
  page.clamp(1, last)
}

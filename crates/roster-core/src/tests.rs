//! Unit tests for the view pipeline and its supporting types.

use std::cmp::Ordering;

use crate::{
  Error,
  collate::collate,
  details::ProfileDetails,
  record::{UserId, UserRecord},
  view::{
    PAGE_SIZE, SortKey, clamp_page, derive_view, filter_records,
    normalize_fetched, paginate, sort_records, sorted_snapshot,
  },
};

fn user(id: u64, name: &str, email: &str) -> UserRecord {
  UserRecord {
    id:    UserId(id),
    name:  name.into(),
    email: email.into(),
  }
}

/// A collection large enough to span three pages.
fn twenty_five_users() -> Vec<UserRecord> {
  (1..=25)
    .map(|i| user(i, &format!("User {i:02}"), &format!("user{i:02}@example.com")))
    .collect()
}

fn names<'a>(records: &[&'a UserRecord]) -> Vec<&'a str> {
  records.iter().map(|r| r.name.as_str()).collect()
}

// ─── Collation ───────────────────────────────────────────────────────────────

#[test]
fn collate_is_case_insensitive_first() {
  assert_eq!(collate("amy", "Bob"), Ordering::Less);
  assert_eq!(collate("Bob", "amy"), Ordering::Greater);
  assert_eq!(collate("Zoe", "amy"), Ordering::Greater);
}

#[test]
fn collate_breaks_exact_ties_by_code_point() {
  // Equal under lowercasing; upper-case code points sort first.
  assert_eq!(collate("Amy", "amy"), Ordering::Less);
  assert_eq!(collate("amy", "amy"), Ordering::Equal);
}

#[test]
fn collate_handles_prefixes() {
  assert_eq!(collate("Ann", "Anna"), Ordering::Less);
}

// ─── Filter ──────────────────────────────────────────────────────────────────

#[test]
fn empty_term_matches_everything() {
  let records = vec![user(1, "Amy", "amy@x.org"), user(2, "Bob", "bob@x.org")];
  assert_eq!(filter_records(&records, "").len(), 2);
}

#[test]
fn filter_matches_name_case_insensitively() {
  let records = vec![user(1, "Amy Burns", "amy@x.org"), user(2, "Bob", "bob@x.org")];
  let hits = filter_records(&records, "aMy");
  assert_eq!(names(&hits), vec!["Amy Burns"]);
}

#[test]
fn filter_matches_email_case_insensitively() {
  let records = vec![user(1, "Amy", "amy@x.org"), user(2, "Bob", "Bob@Work.org")];
  let hits = filter_records(&records, "work");
  assert_eq!(names(&hits), vec!["Bob"]);
}

#[test]
fn filter_matches_substring_anywhere() {
  let records = vec![user(1, "Clementine Bauch", "c@x.org")];
  assert_eq!(filter_records(&records, "menti").len(), 1);
  assert_eq!(filter_records(&records, "xyz").len(), 0);
}

#[test]
fn filter_preserves_input_order() {
  let records = vec![
    user(1, "Bob", "bob@x.org"),
    user(2, "Amy", "amy@x.org"),
    user(3, "Babs", "babs@x.org"),
  ];
  let hits = filter_records(&records, "b");
  assert_eq!(names(&hits), vec!["Bob", "Babs"]);
}

// ─── Sort ────────────────────────────────────────────────────────────────────

#[test]
fn sorts_ascending_by_name() {
  let records = vec![
    user(1, "Bob", "b@x.org"),
    user(2, "amy", "a@x.org"),
    user(3, "Carl", "c@x.org"),
  ];
  let sorted = sort_records(records.iter().collect(), SortKey::Name);
  assert_eq!(names(&sorted), vec!["amy", "Bob", "Carl"]);
}

#[test]
fn sorts_ascending_by_email() {
  let records = vec![
    user(1, "Bob", "zeta@x.org"),
    user(2, "Amy", "mid@x.org"),
    user(3, "Carl", "alpha@x.org"),
  ];
  let sorted = sort_records(records.iter().collect(), SortKey::Email);
  assert_eq!(names(&sorted), vec!["Carl", "Amy", "Bob"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
  // Same name, distinct ids: relative input order must survive.
  let records = vec![
    user(1, "Amy", "first@x.org"),
    user(2, "Amy", "second@x.org"),
    user(3, "Amy", "third@x.org"),
  ];
  let sorted = sort_records(records.iter().collect(), SortKey::Name);
  let ids: Vec<u64> = sorted.iter().map(|r| r.id.0).collect();
  assert_eq!(ids, vec![1, 2, 3]);
}

// ─── Pagination ──────────────────────────────────────────────────────────────

#[test]
fn small_set_fits_one_page() {
  let records = vec![user(1, "Amy", "a@x.org"), user(2, "Bob", "b@x.org")];
  let page = paginate(records.iter().collect(), 1);
  assert_eq!(page.records.len(), 2);
  assert!(!page.has_prev);
  assert!(!page.has_next);
}

#[test]
fn page_three_of_twenty_five() {
  let records = twenty_five_users();
  let page = paginate(records.iter().collect(), 3);
  assert_eq!(page.records.len(), 5);
  assert_eq!(page.records[0].id, UserId(21));
  assert_eq!(page.records[4].id, UserId(25));
  assert!(page.has_prev);
  assert!(!page.has_next);
}

#[test]
fn middle_page_has_both_neighbours() {
  let records = twenty_five_users();
  let page = paginate(records.iter().collect(), 2);
  assert_eq!(page.records.len(), PAGE_SIZE);
  assert!(page.has_prev);
  assert!(page.has_next);
}

#[test]
fn out_of_range_page_is_empty() {
  let records = twenty_five_users();
  let page = paginate(records.iter().collect(), 5);
  assert!(page.records.is_empty());
  assert!(page.has_prev);
  assert!(!page.has_next);
  assert_eq!(page.filtered_count, 25);
}

#[test]
fn exact_multiple_has_no_phantom_page() {
  let records: Vec<UserRecord> = twenty_five_users().into_iter().take(20).collect();
  let page = paginate(records.iter().collect(), 2);
  assert_eq!(page.records.len(), PAGE_SIZE);
  assert!(!page.has_next);
}

// ─── Full derivation ─────────────────────────────────────────────────────────

#[test]
fn load_order_is_ascending_by_name() {
  // Fetched out of order; normalisation establishes [Amy, Bob].
  let mut records = vec![user(1, "Bob", "b@x.com"), user(2, "Amy", "a@x.com")];
  normalize_fetched(&mut records);

  let page = derive_view(&records, "", SortKey::Name, 1);
  assert_eq!(names(&page.records), vec!["Amy", "Bob"]);
  assert!(!page.has_prev);
  assert!(!page.has_next);
}

#[test]
fn search_narrows_to_single_match() {
  let records = vec![user(1, "Bob", "b@x.com"), user(2, "Amy", "a@x.com")];
  let page = derive_view(&records, "amy", SortKey::Name, 1);
  assert_eq!(names(&page.records), vec!["Amy"]);
  assert_eq!(page.filtered_count, 1);
  assert!(!page.has_prev);
  assert!(!page.has_next);
}

#[test]
fn stale_page_yields_empty_view() {
  // A page that was valid before a narrower filter shrank the result set.
  let records = twenty_five_users();
  let page = derive_view(&records, "user 0", SortKey::Name, 3);
  assert!(page.records.is_empty());
  assert_eq!(page.filtered_count, 9);
}

// ─── Destructive sort snapshot ───────────────────────────────────────────────

#[test]
fn snapshot_sorts_whole_set_when_unfiltered() {
  let records = vec![
    user(1, "Amy", "zeta@x.org"),
    user(2, "Bob", "alpha@x.org"),
    user(3, "Carl", "mid@x.org"),
  ];
  let snapshot = sorted_snapshot(&records, "", SortKey::Email);
  let order: Vec<&str> = snapshot.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(order, vec!["Bob", "Carl", "Amy"]);
}

#[test]
fn snapshot_under_filter_drops_excluded_records() {
  let records = vec![
    user(1, "Amy", "zeta@x.org"),
    user(2, "Bob", "alpha@x.org"),
    user(3, "Carl", "mid@x.org"),
  ];

  // Sort by email while only "amy" is visible: the snapshot *is* the
  // filtered view, so Bob and Carl are gone from the collection.
  let snapshot = sorted_snapshot(&records, "amy", SortKey::Email);
  assert_eq!(snapshot.len(), 1);
  assert_eq!(snapshot[0].name, "Amy");

  // Clearing the search reveals the sort-time snapshot, not a merge.
  let page = derive_view(&snapshot, "", SortKey::Email, 1);
  assert_eq!(names(&page.records), vec!["Amy"]);
}

// ─── Page clamping ───────────────────────────────────────────────────────────

#[test]
fn clamp_keeps_in_range_page() {
  assert_eq!(clamp_page(3, 25), 3);
  assert_eq!(clamp_page(1, 0), 1);
}

#[test]
fn clamp_pulls_stale_page_back() {
  assert_eq!(clamp_page(5, 25), 3);
  assert_eq!(clamp_page(2, 10), 1);
  assert_eq!(clamp_page(2, 11), 2);
  assert_eq!(clamp_page(4, 0), 1);
}

// ─── Sort key ────────────────────────────────────────────────────────────────

#[test]
fn sort_key_parses_case_insensitively() {
  assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
  assert_eq!("EMAIL".parse::<SortKey>().unwrap(), SortKey::Email);
}

#[test]
fn sort_key_rejects_unknown_column() {
  let err = "phone".parse::<SortKey>().unwrap_err();
  assert!(matches!(err, Error::UnknownSortKey(s) if s == "phone"));
}

#[test]
fn sort_key_displays_lowercase() {
  assert_eq!(SortKey::Name.to_string(), "name");
  assert_eq!(SortKey::Email.to_string(), "email");
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[test]
fn record_ignores_extra_payload_attributes() {
  let raw = r#"
    {
      "id": 7,
      "name": "Kurtis Weissnat",
      "username": "Elwyn.Skiles",
      "email": "Telly.Hoeger@billy.biz",
      "address": { "street": "Rex Trail", "city": "Howemouth" },
      "phone": "210.067.6132",
      "website": "elvis.io",
      "company": { "name": "Johns Group" }
    }
  "#;
  let record: UserRecord = serde_json::from_str(raw).unwrap();
  assert_eq!(record.id, UserId(7));
  assert_eq!(record.name, "Kurtis Weissnat");
  assert_eq!(record.email, "Telly.Hoeger@billy.biz");
}

// ─── Profile details ─────────────────────────────────────────────────────────

#[test]
fn details_default_is_the_static_block() {
  let details = ProfileDetails::default();
  let fields = details.fields();
  assert_eq!(fields[0], ("Job", "Software Engineer"));
  assert_eq!(fields[4], ("Address", "123 Main St, City, Country"));
  assert_eq!(fields.len(), 5);
}

#[test]
fn details_deserialise_with_partial_overrides() {
  let details: ProfileDetails =
    serde_json::from_str(r#"{ "job": "Plumber" }"#).unwrap();
  assert_eq!(details.job, "Plumber");
  assert_eq!(details.mobile, "123-456-7890");
}

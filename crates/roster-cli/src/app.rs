//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_core::{
  details::ProfileDetails,
  record::{UserId, UserRecord},
  view::{self, PageView, SortKey},
};

use crate::client::ApiClient;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the user table.
  Directory,
  /// The edit-profile overlay is open for the selected record.
  Profile,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
///
/// The visible table is never stored — it is re-derived from `records`,
/// `search_term`, `sort_key`, and `current_page` on every frame via
/// [`App::page_view`].
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The record collection as last established by a load or a header sort.
  /// A header sort replaces this wholesale with the sorted, currently
  /// filtered view (see [`App::apply_sort`]).
  pub records: Vec<UserRecord>,

  /// Current search string.
  pub search_term: String,

  /// Whether the user is typing in the search bar.
  pub search_active: bool,

  /// Column the table is sorted by.
  pub sort_key: SortKey,

  /// 1-based page of the filtered view.
  pub current_page: usize,

  /// Cursor position within the visible page.
  pub cursor: usize,

  /// Record whose edit-profile overlay is open.
  pub selected_user_id: Option<UserId>,

  /// Error from the most recent fetch attempt, shown as a banner until a
  /// retry succeeds.
  pub load_error: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Static detail block rendered in the overlay.
  pub details: ProfileDetails,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with an empty record collection.
  pub fn new(client: ApiClient, details: ProfileDetails) -> Self {
    Self {
      screen: Screen::Directory,
      records: Vec::new(),
      search_term: String::new(),
      search_active: false,
      sort_key: SortKey::default(),
      current_page: 1,
      cursor: 0,
      selected_user_id: None,
      load_error: None,
      status_msg: String::new(),
      details,
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the record collection from the endpoint.
  ///
  /// On success the collection is replaced and normalised (ascending by
  /// name). On failure the previous collection is kept, the error is
  /// logged, and a banner with a retry hint is shown.
  pub async fn load_users(&mut self) {
    self.status_msg = "Loading users…".into();
    match self.client.list_users().await {
      Ok(mut records) => {
        view::normalize_fetched(&mut records);
        self.records = records;
        self.current_page = 1;
        self.cursor = 0;
        self.load_error = None;
        self.status_msg = String::new();
      }
      Err(e) => {
        tracing::error!(error = %e, "loading users failed");
        self.load_error = Some(format!("{e:#}"));
        self.status_msg = String::new();
      }
    }
  }

  // ── Derived view ──────────────────────────────────────────────────────────

  /// The currently visible page, derived from the four view inputs.
  pub fn page_view(&self) -> PageView<'_> {
    view::derive_view(
      &self.records,
      &self.search_term,
      self.sort_key,
      self.current_page,
    )
  }

  /// The record under the table cursor, if any.
  pub fn cursor_record(&self) -> Option<&UserRecord> {
    self.page_view().records.get(self.cursor).copied()
  }

  /// The record the overlay is open for, if any.
  pub fn selected_user(&self) -> Option<&UserRecord> {
    let id = self.selected_user_id?;
    self.records.iter().find(|r| r.id == id)
  }

  /// Pull `current_page` and the cursor back into range after a mutation
  /// that may have shrunk the filtered set.
  fn reclamp(&mut self) {
    let count = view::filter_records(&self.records, &self.search_term).len();
    self.current_page = view::clamp_page(self.current_page, count);
    let visible = self.page_view().records.len();
    self.cursor = self.cursor.min(visible.saturating_sub(1));
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Sort by `key`, replacing the collection with the sorted, currently
  /// filtered view. Records excluded by an active search at sort time are
  /// dropped from the collection; clearing the search afterwards reveals
  /// the sort-time snapshot.
  pub fn apply_sort(&mut self, key: SortKey) {
    self.records = view::sorted_snapshot(&self.records, &self.search_term, key);
    self.sort_key = key;
    self.cursor = 0;
    self.reclamp();
  }

  /// Open the edit-profile overlay for `user_id`.
  fn open_profile(&mut self, user_id: UserId) {
    self.selected_user_id = Some(user_id);
    self.screen = Screen::Profile;
  }

  /// Close the overlay and return focus to the table.
  fn close_profile(&mut self) {
    self.selected_user_id = None;
    self.screen = Screen::Directory;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // Search input mode: all printable keys go into the search term.
    if self.search_active {
      return self.handle_search_key(key);
    }

    match self.screen {
      Screen::Directory => self.handle_directory_key(key).await,
      Screen::Profile => self.handle_profile_key(key),
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.search_term.clear();
        self.cursor = 0;
        self.reclamp();
      }
      KeyCode::Enter => {
        self.search_active = false;
      }
      KeyCode::Backspace => {
        self.search_term.pop();
        self.cursor = 0;
        self.reclamp();
      }
      KeyCode::Char(c) => {
        self.search_term.push(c);
        self.cursor = 0;
        self.reclamp();
      }
      _ => {}
    }
    true
  }

  async fn handle_directory_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Cursor within the visible page
      KeyCode::Down | KeyCode::Char('j') => {
        let visible = self.page_view().records.len();
        if visible > 0 && self.cursor + 1 < visible {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.cursor > 0 {
          self.cursor -= 1;
        }
      }

      // Pagination: inert when the corresponding flag is false.
      KeyCode::Right | KeyCode::Char(']') | KeyCode::PageDown => {
        if self.page_view().has_next {
          self.current_page += 1;
          self.cursor = 0;
        }
      }
      KeyCode::Left | KeyCode::Char('[') | KeyCode::PageUp => {
        if self.page_view().has_prev {
          self.current_page -= 1;
          self.cursor = 0;
        }
      }

      // Column sorts (both ascending)
      KeyCode::Char('n') => self.apply_sort(SortKey::Name),
      KeyCode::Char('e') => self.apply_sort(SortKey::Email),

      // Search
      KeyCode::Char('/') => {
        self.search_active = true;
        self.search_term.clear();
        self.cursor = 0;
        self.reclamp();
      }

      // Open the edit-profile overlay for the cursor row
      KeyCode::Enter => {
        if let Some(id) = self.cursor_record().map(|r| r.id) {
          self.open_profile(id);
        }
      }

      // Retry the fetch after a failed load
      KeyCode::Char('r') => self.load_users().await,

      _ => {}
    }
    true
  }

  fn handle_profile_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Close the overlay
      KeyCode::Esc => self.close_profile(),

      _ => {}
    }
    true
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

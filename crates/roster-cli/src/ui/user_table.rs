//! User table pane — search bar, sortable columns, one page of rows.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use roster_core::view::{PageView, SortKey};

use crate::app::App;

/// Render the directory table into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let view = app.page_view();
  let total = app.records.len();

  // Title with counts, e.g. " Users (9/25) " while a search narrows the set.
  let title = if app.search_active || !app.search_term.is_empty() {
    format!(" Users ({}/{}) ", view.filtered_count, total)
  } else {
    format!(" Users ({total}) ")
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  // Vertical stack inside the block: search bar, table, pagination line.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // search bar
      Constraint::Min(0),    // table
      Constraint::Length(1), // pagination
    ])
    .split(inner);

  draw_search_bar(f, rows[0], app);
  draw_table(f, rows[1], app, &view);
  draw_pagination(f, rows[2], &view);
}

// ─── Search bar ───────────────────────────────────────────────────────────────

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
  let (text, style) = if app.search_active {
    (
      format!("/{}_", app.search_term),
      Style::default().fg(Color::Yellow),
    )
  } else if !app.search_term.is_empty() {
    (
      format!("/{}", app.search_term),
      Style::default().fg(Color::Yellow),
    )
  } else {
    (
      "Search by name or email: press /".to_string(),
      Style::default().fg(Color::DarkGray),
    )
  };
  f.render_widget(Paragraph::new(text).style(style), area);
}

// ─── Table ────────────────────────────────────────────────────────────────────

fn draw_table(f: &mut Frame, area: Rect, app: &App, view: &PageView<'_>) {
  if view.records.is_empty() {
    let empty = Paragraph::new("No users match the current search.")
      .style(Style::default().fg(Color::DarkGray));
    f.render_widget(empty, area);
    return;
  }

  let header = Row::new(vec![
    header_cell("Name [n]", app.sort_key == SortKey::Name),
    header_cell("Email [e]", app.sort_key == SortKey::Email),
  ]);

  let rows: Vec<Row> = view
    .records
    .iter()
    .enumerate()
    .map(|(i, user)| {
      let style = if i == app.cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      Row::new(vec![
        Cell::from(user.name.clone()),
        Cell::from(user.email.clone()),
      ])
      .style(style)
    })
    .collect();

  let table = Table::new(
    rows,
    [Constraint::Percentage(40), Constraint::Percentage(60)],
  )
  .header(header);

  f.render_widget(table, area);
}

/// A column header cell; the active sort column carries an indicator.
fn header_cell(label: &str, active: bool) -> Cell<'static> {
  let (text, color) = if active {
    (format!("{label} ▲"), Color::Cyan)
  } else {
    (label.to_string(), Color::White)
  };
  Cell::from(Span::styled(
    text,
    Style::default().fg(color).add_modifier(Modifier::BOLD),
  ))
}

// ─── Pagination ───────────────────────────────────────────────────────────────

fn draw_pagination(f: &mut Frame, area: Rect, view: &PageView<'_>) {
  let enabled = Style::default().fg(Color::White);
  let disabled = Style::default().fg(Color::DarkGray);

  let line = Line::from(vec![
    Span::styled("[ prev", if view.has_prev { enabled } else { disabled }),
    Span::raw("   "),
    Span::styled(
      format!("Page {}", view.page),
      Style::default().add_modifier(Modifier::BOLD),
    ),
    Span::raw("   "),
    Span::styled("next ]", if view.has_next { enabled } else { disabled }),
  ]);

  f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

//! TUI rendering — orchestrates all panes.

pub mod profile_overlay;
pub mod user_table;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  user_table::draw(f, rows[1], app);
  draw_status(f, rows[2], app);

  // The overlay sits on top of everything while a record is selected.
  if app.screen == Screen::Profile {
    profile_overlay::draw(f, area, app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " roster  [/] search  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.screen {
    Screen::Directory if app.search_active => (
      "SEARCH",
      "Type to filter  Esc clear  Enter confirm",
    ),
    Screen::Directory => (
      "NORMAL",
      "↑↓/jk move  / search  n/e sort  ←→/[ ] page  Enter profile  q quit",
    ),
    Screen::Profile => ("PROFILE", "Esc close  q quit"),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  // A failed load takes priority over hints until a retry succeeds.
  let hint_span = if let Some(err) = &app.load_error {
    Span::styled(
      format!("  Load failed: {err}  [r] retry"),
      Style::default().fg(Color::Red),
    )
  } else if !app.status_msg.is_empty() {
    Span::styled(
      format!("  {}", app.status_msg),
      Style::default().fg(Color::DarkGray),
    )
  } else {
    Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray))
  };

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

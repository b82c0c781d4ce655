//! Edit-profile overlay — centered modal over the table.
//!
//! The detail block is the static [`ProfileDetails`] configuration
//! injected at startup; the selected record contributes only its name to
//! the title.
//!
//! [`ProfileDetails`]: roster_core::details::ProfileDetails

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

/// Render the overlay centered in `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(user) = app.selected_user() else {
    return;
  };

  let popup = centered_rect(50, 50, area);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(format!(" Edit Profile: {} ", user.name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Green));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let mut lines: Vec<Line> = app
    .details
    .fields()
    .into_iter()
    .map(|(label, value)| {
      Line::from(vec![
        Span::styled(
          format!("{label:<11}"),
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
      ])
    })
    .collect();

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "[Esc] close",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), inner);
}

/// A `pct_x` × `pct_y` percent rect centered in `area`.
fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
  let vert = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage((100 - pct_y) / 2),
      Constraint::Percentage(pct_y),
      Constraint::Percentage((100 - pct_y) / 2),
    ])
    .split(area);

  let horiz = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage((100 - pct_x) / 2),
      Constraint::Percentage(pct_x),
      Constraint::Percentage((100 - pct_x) / 2),
    ])
    .split(vert[1]);

  horiz[1]
}

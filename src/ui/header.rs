//! Header widget rendering.
//!
//! Shows the app title, the "new dish" shortcut and the last sync time.

use crate::dashboard::Dashboard;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the header widget.
///
/// # Arguments
/// * `dashboard` - Dashboard state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_header(dashboard: &Dashboard, area: Rect, buf: &mut Buffer) {
    let synced = dashboard
        .last_synced
        .map(|t| format!("Synced {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not synced".to_string());

    let line = Line::from(vec![
        Span::styled(
            "Food Dashboard",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "[n] New dish",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(synced, Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}

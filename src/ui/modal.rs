//! Add/edit modal rendering.
//!
//! Draws the food form as a centered popup over the list.

use crate::dashboard::{Dashboard, UiMode};
use crate::form::{FoodForm, FormField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Render the open modal, if any.
///
/// # Arguments
/// * `dashboard` - Dashboard state
/// * `area` - Full frame area
/// * `buf` - Buffer to render to
pub fn render_modal(dashboard: &Dashboard, area: Rect, buf: &mut Buffer) {
    match dashboard.mode() {
        UiMode::List => {}
        UiMode::AddModal => render_form(
            "New dish",
            "Enter: add dish   Esc: cancel",
            &dashboard.add_form,
            area,
            buf,
        ),
        UiMode::EditModal => render_form(
            "Edit dish",
            "Enter: save changes   Esc: cancel",
            &dashboard.edit_form,
            area,
            buf,
        ),
    }
}

fn render_form(title: &str, hint: &str, form: &FoodForm, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(70, 70, area);
    Widget::render(Clear, popup_area, buf);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Green));
    Widget::render(block, popup_area, buf);

    let inner_area = popup_area.inner(Margin::new(2, 1));
    let mut constraints = vec![Constraint::Length(3); FormField::ALL.len()];
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
        let is_focused = form.focused_field() == *field;
        let value = form.value(*field);
        let content = if value.is_empty() && !is_focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(value),
                Span::styled(
                    if is_focused { "_" } else { "" },
                    Style::default().fg(Color::Yellow),
                ),
            ])
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        );
        Widget::render(paragraph, *chunk, buf);
    }

    if let Some(hint_area) = chunks.last() {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("{}   Tab: next field", hint),
            Style::default().fg(Color::Yellow),
        )));
        Widget::render(hint, *hint_area, buf);
    }
}

/// Centered rect taking `percent_x` by `percent_y` of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

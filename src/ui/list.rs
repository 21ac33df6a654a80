//! Food list widget rendering.
//!
//! Displays a scrollable list of food cards with selection highlighting.

use crate::dashboard::Dashboard;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Lines taken by one card: name, description, price, image, separator.
pub const LINES_PER_FOOD: u16 = 5;

/// Render the food list widget.
///
/// # Arguments
/// * `dashboard` - Dashboard state
/// * `currency_symbol` - Symbol shown before prices
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each food takes five lines:
/// - Line 1: Name and availability badge (bold)
/// - Line 2: Description
/// - Line 3: Price
/// - Line 4: Image URL
/// - Line 5: Separator
///
/// Keeps the selected food in view.
pub fn render_list(dashboard: &Dashboard, currency_symbol: &str, area: Rect, buf: &mut Buffer) {
    let foods = &dashboard.foods;
    let title = format!("Foods ({})", foods.len());

    if foods.is_empty() {
        let list = List::new(vec![ListItem::new("No dishes yet. Press 'n' to add one.")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = dashboard.selected_index.min(foods.len() - 1);

    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(separator_width);

    let (scroll_offset, visible_foods) = scroll_offset(selected_index, foods.len(), area);

    let items: Vec<ListItem> = foods
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_foods)
        .map(|(idx, food)| {
            let is_selected = idx == selected_index;

            let name_style = Style::default()
                .fg(if is_selected {
                    Color::Yellow
                } else {
                    Color::White
                })
                .add_modifier(Modifier::BOLD);

            let (badge, badge_color) = if food.available {
                (" [AVAILABLE]", Color::Green)
            } else {
                (" [UNAVAILABLE]", Color::Red)
            };

            let name = Line::from(vec![
                Span::styled(food.name.as_str(), name_style),
                Span::styled(
                    badge,
                    Style::default()
                        .fg(badge_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let description = Line::from(Span::styled(
                food.description.as_str(),
                Style::default().fg(Color::Gray),
            ));
            let price = Line::from(Span::styled(
                food.format_price(currency_symbol),
                Style::default().fg(Color::Green),
            ));
            let image = Line::from(Span::styled(
                format!("Image: {}", food.image),
                Style::default().fg(Color::DarkGray),
            ));
            let separator = Line::from(Span::styled(
                separator_line.clone(),
                Style::default().fg(if is_selected {
                    Color::Blue
                } else {
                    Color::DarkGray
                }),
            ));

            ListItem::new(vec![name, description, price, image, separator])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - scroll_offset));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}

/// Map a click row inside the list area to a food index.
///
/// # Arguments
/// * `dashboard` - Dashboard state
/// * `area` - Area the list was rendered in
/// * `row` - Terminal row of the click
///
/// # Returns
/// * `Option<usize>` - Index into `dashboard.foods`, if a card was hit
pub fn food_index_at(dashboard: &Dashboard, area: Rect, row: u16) -> Option<usize> {
    if dashboard.foods.is_empty() || row <= area.y || row >= (area.y + area.height).saturating_sub(1) {
        return None;
    }

    let selected_index = dashboard.selected_index.min(dashboard.foods.len() - 1);
    let (scroll_offset, _) = scroll_offset(selected_index, dashboard.foods.len(), area);

    let index = scroll_offset + ((row - area.y - 1) / LINES_PER_FOOD) as usize;
    (index < dashboard.foods.len()).then_some(index)
}

/// First visible card and number of cards that fit in `area`.
///
/// The selected card is kept centered when the list is longer than the view.
fn scroll_offset(selected: usize, len: usize, area: Rect) -> (usize, usize) {
    let available_height = area.height.saturating_sub(2);
    let visible = (available_height / LINES_PER_FOOD).max(1) as usize;
    let offset = selected
        .saturating_sub(visible / 2)
        .min(len.saturating_sub(visible));
    (offset, visible)
}

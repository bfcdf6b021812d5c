use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
};

use crate::{constants::CATEGORY_COLORS, domain::{CATEGORY_ORDER, Category}};

pub(super) fn category_color(category: Category) -> Color {
    let position = CATEGORY_ORDER
        .iter()
        .position(|&c| c == category)
        .unwrap_or(0);
    CATEGORY_COLORS[position]
}

pub(super) fn tab_span(label: String, category: Category, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(category_color(category))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Span::styled(label, style)
}

use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    constants::NO_MOODS_SENTINEL,
    domain::{CATEGORY_ORDER, Category},
};

use super::{App, view_style};

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_tabs(f, chunks[0]);
        self.render_mood(f, chunks[1]);
        self.render_custom_list(f, chunks[2]);
        self.render_input(f, chunks[3]);
        self.render_footer(f, chunks[4]);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, category) in CATEGORY_ORDER.into_iter().enumerate() {
            let active = category == self.picker.current_category;
            spans.push(view_style::tab_span(
                format!(" {}:{} ", i + 1, category.name()),
                category,
                active,
            ));
            spans.push(Span::raw(" "));
        }

        let border_color = view_style::category_color(self.picker.current_category);
        let tabs = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(Span::styled(
                    "whimsy",
                    Style::default().fg(Color::White),
                )))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(tabs, area);
    }

    fn render_mood(&self, f: &mut Frame, area: Rect) {
        let mood = self.picker.last_mood.as_deref().unwrap_or(NO_MOODS_SENTINEL);
        let color = view_style::category_color(self.picker.current_category);

        let paragraph = Paragraph::new(Line::from(Span::styled(
            mood.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_custom_list(&self, f: &mut Frame, area: Rect) {
        let category = self.picker.current_category;
        let customs = self.picker.customs.list(category);

        let items: Vec<ListItem> = match customs {
            None => vec![ListItem::new(Line::from(Span::styled(
                "“All” is view-only. Switch to Calm/Hype/Focus to manage customs.",
                Style::default().fg(Color::DarkGray),
            )))],
            Some(list) if list.is_empty() => vec![ListItem::new(Line::from(Span::styled(
                "No custom moods yet. Press 'a' to add your first one!",
                Style::default().fg(Color::DarkGray),
            )))],
            Some(list) => list
                .iter()
                .enumerate()
                .map(|(i, mood)| {
                    let selected = i == self.selected_custom;
                    if selected {
                        ListItem::new(Line::from(Span::raw(format!("{:>3} {}", i, mood)))).style(
                            Style::default()
                                .fg(Color::Black)
                                .bg(view_style::category_color(category)),
                        )
                    } else {
                        ListItem::new(Line::from(
                            Span::styled(format!("{:>3} {}", i, mood), Style::default().fg(Color::White)),
                        ))
                    }
                })
                .collect(),
        };

        let selectable = customs.is_some_and(|list| !list.is_empty());
        let mut list_state = ListState::default();
        if selectable {
            list_state.select(Some(self.selected_custom));
        }

        let title = match category {
            Category::All => "custom".to_string(),
            concrete => format!("custom · {}", concrete.name()),
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Line::from(Span::styled(
                        title,
                        Style::default().fg(Color::White),
                    ))),
            )
            .highlight_style(Style::default());

        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let category = self.picker.current_category;

        let (text, style) = if self.in_compose() {
            (
                format!("{}█", self.input),
                Style::default().fg(Color::White),
            )
        } else if category == Category::All {
            (
                "Pick Calm/Hype/Focus to add".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (
                "e.g. 🦋 hopeful gremlin — press 'a' to compose".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        let border_style = if self.in_compose() {
            Style::default().fg(view_style::category_color(category))
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(Line::from(Span::styled(text, style))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(Span::styled(
                    "add mood",
                    Style::default().fg(Color::White),
                )))
                .border_style(border_style),
        );
        f.render_widget(input, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let line = if let Some(feedback) = &self.feedback {
            Line::from(Span::styled(
                feedback.message.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if self.in_compose() {
            Line::from(Span::styled(
                " enter add · esc clear",
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from(Span::styled(
                " space new · ←/→ category · 1-4 jump · a add · ↑/↓ select · x delete · c copy · q quit",
                Style::default().fg(Color::Gray),
            ))
        };

        f.render_widget(Paragraph::new(line), area);
    }
}

//! Event log view

use crate::app::{LineKind, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, view: &View, area: Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let end = view.log.len().saturating_sub(view.log_scroll);
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = view.log[start..end]
        .iter()
        .map(|line| ListItem::new(line.text.as_str()).style(style_for(line.kind)))
        .collect();

    let title = if view.log_scroll > 0 {
        format!(" Log (↑{}) ", view.log_scroll)
    } else {
        " Log ".to_string()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn style_for(kind: LineKind) -> Style {
    match kind {
        LineKind::Header => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineKind::Critical => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LineKind::PlayerHit => Style::default().fg(Color::Green),
        LineKind::EnemyHit => Style::default().fg(Color::Red),
        LineKind::Miss => Style::default().fg(Color::DarkGray),
        LineKind::Effect => Style::default().fg(Color::Magenta),
        LineKind::Reward => Style::default().fg(Color::Yellow),
        LineKind::Warning => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LineKind::Info => Style::default().fg(Color::White),
    }
}

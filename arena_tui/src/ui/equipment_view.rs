//! Equipment selection view

use super::home_view::rarity_color;
use crate::app::View;
use arena_core::{Effect, EquipmentCatalog, PlayerState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, view: &View, player: &PlayerState, catalog: &EquipmentCatalog, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Owned items
            Constraint::Length(3), // Entry
        ])
        .split(area);

    // Numbered in the same order the session resolves selections
    let items: Vec<ListItem> = player
        .owned()
        .enumerate()
        .map(|(i, (name, level))| {
            let equipped = player.equipped() == Some(name);
            let item = catalog.get(name);
            let color = item.map(|item| rarity_color(item.rarity)).unwrap_or(Color::Gray);

            let mut spans = vec![
                Span::styled(
                    format!("{:>2} ", i + 1),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(name.to_string(), Style::default().fg(color)),
                Span::styled(format!(" Lv{}", level), Style::default().fg(Color::DarkGray)),
            ];
            if equipped {
                spans.push(Span::styled(" [E]", Style::default().fg(Color::Green)));
            }

            let mut lines = vec![Line::from(spans)];
            if let Some(item) = item {
                lines.push(Line::from(Span::styled(
                    format!("    {}", effect_summary(&item.effect)),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(
            "No items owned yet. Try the gacha!",
            Style::default().fg(Color::DarkGray),
        ))])
    } else {
        List::new(items)
    };
    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(" Owned Items ")),
        chunks[0],
    );

    let entry = Paragraph::new(Line::from(vec![
        Span::styled("Item #: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}_", view.buffer),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(entry, chunks[1]);
}

fn effect_summary(effect: &Effect) -> String {
    match effect {
        Effect::HitPp(pp) => format!("+{}% hit chance", pp),
        Effect::DmgReduce(n) => format!("-{} damage taken", n),
        Effect::HpPlus(n) => format!("+{} max HP", n),
        Effect::CritPp(pp) => format!("+{}% crit chance", pp),
        Effect::ClockFirstHitBonus(n) => format!("+{} damage on first hit", n),
        Effect::CritMultBonus(bonus) => format!("+{:.1}x crit damage", bonus),
        Effect::EnemyHitMinusPp(pp) => format!("-{}% enemy hit chance", pp),
        Effect::GuardPp(pp) => format!("+{}% guard block", pp),
        Effect::DmgFlat(n) => format!("+{} damage per hit", n),
        Effect::ClawBleed => "Monster bleeds every turn".to_string(),
        Effect::Gauntlet => "Hits may stun for bonus damage".to_string(),
        Effect::SpiritFist => "Hits may heal you".to_string(),
    }
}

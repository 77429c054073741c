//! Home menu view

use arena_core::session::MenuChoice;
use arena_core::{EquipmentCatalog, PlayerState, Rarity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, player: &PlayerState, catalog: &EquipmentCatalog, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Menu
            Constraint::Min(0),    // Player summary
        ])
        .split(area);

    draw_menu(f, chunks[0]);
    draw_summary(f, player, catalog, chunks[1]);
}

fn draw_menu(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = MenuChoice::all()
        .iter()
        .map(|choice| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", choice.key()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(choice.name()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Menu "));
    f.render_widget(paragraph, area);
}

fn draw_summary(f: &mut Frame, player: &PlayerState, catalog: &EquipmentCatalog, area: Rect) {
    let mut lines = vec![
        currency_line("Gold", player.gold(), Color::Yellow),
        currency_line("Gems", player.gems(), Color::Magenta),
        currency_line("Enhance stones", player.enhance_stones(), Color::Gray),
        Line::from(""),
        Line::from(vec![
            Span::styled("Equipped: ", Style::default().fg(Color::Gray)),
            match player.equipped() {
                Some(name) => Span::styled(name.to_string(), Style::default().fg(Color::Green)),
                None => Span::styled("(none)", Style::default().fg(Color::DarkGray)),
            },
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "── Collection ──",
            Style::default().fg(Color::Blue),
        )),
    ];

    let counts = player.count_owned_by_rarity(catalog);
    for &rarity in Rarity::all() {
        let owned = counts.get(&rarity).copied().unwrap_or(0);
        let total = catalog.by_rarity(rarity).count();
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", rarity.name()), Style::default().fg(rarity_color(rarity))),
            Span::raw(format!("{}/{}", owned, total)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Player "));
    f.render_widget(paragraph, area);
}

fn currency_line(label: &str, amount: u64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(amount.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
        Rarity::Mythic => Color::Red,
    }
}

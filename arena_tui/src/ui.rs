//! UI rendering

mod battle_view;
mod equipment_view;
mod home_view;
mod log_view;

use crate::app::View;
use arena_core::Prompt;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, view: &View, prompt: &Prompt<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_title(f, prompt, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(44), // Prompt panel
            Constraint::Min(30),    // Event log
        ])
        .split(chunks[1]);

    match prompt {
        Prompt::Home { player, catalog } => home_view::draw(f, player, catalog, content[0]),
        Prompt::BattleAction { battle } => battle_view::draw(f, battle, content[0]),
        Prompt::Equipment { player, catalog } => {
            equipment_view::draw(f, view, player, catalog, content[0])
        }
        Prompt::PvpTurn { duel, attacker } => battle_view::draw_duel(f, duel, *attacker, content[0]),
        Prompt::Continue => draw_continue(f, content[0]),
    }

    log_view::draw(f, view, content[1]);
    draw_keybindings(f, prompt, chunks[2]);
}

fn draw_title(f: &mut Frame, prompt: &Prompt<'_>, area: Rect) {
    let section = match prompt {
        Prompt::Home { .. } => "Home",
        Prompt::BattleAction { .. } => "Hunt",
        Prompt::Equipment { .. } => "Equipment",
        Prompt::PvpTurn { .. } => "PVP",
        Prompt::Continue => "",
    };

    let mut spans = vec![Span::styled(
        "Monster Arena",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if !section.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(section, Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_continue(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::Gray),
    )))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, prompt: &Prompt<'_>, area: Rect) {
    let common_keys = vec![("↑/↓", "Scroll log"), ("Ctrl+C", "Quit")];

    let prompt_keys: Vec<(&str, &str)> = match prompt {
        Prompt::Home { .. } => vec![("1-5", "Select"), ("0/q", "Exit")],
        Prompt::BattleAction { .. } => vec![("1/p", "Punch"), ("2/k", "Kick"), ("3/c", "Counter"), ("4/g", "Guard")],
        Prompt::Equipment { .. } => vec![("#+Enter", "Equip"), ("0+Enter", "Unequip"), ("b/Esc", "Back")],
        Prompt::PvpTurn { .. } => vec![("Any key", "Attack")],
        Prompt::Continue => vec![("Any key", "Continue")],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in prompt_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

//! Battle and duel status views

use arena_core::combat::{BattleState, PlayerAction};
use arena_core::{PvpDuel, PvpSide};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, battle: &BattleState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Combatants
            Constraint::Min(0),    // Actions
        ])
        .split(area);

    let monster = &battle.monster;
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", monster.name), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}]", monster.grade), Style::default().fg(Color::DarkGray)),
    ])];
    lines.extend(hp_lines(monster.hp, monster.max_hp, chunks[0].width));
    lines.push(Line::from(Span::styled("You", Style::default().add_modifier(Modifier::BOLD))));
    lines.extend(hp_lines(battle.player_hp, battle.player_max_hp, chunks[0].width));

    let title = format!(" Turn {} ", battle.turn + 1);
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, chunks[0]);

    draw_actions(f, battle, chunks[1]);
}

fn draw_actions(f: &mut Frame, battle: &BattleState, area: Rect) {
    let mut lines: Vec<Line> = PlayerAction::all()
        .iter()
        .map(|action| {
            let detail = match action.attack() {
                Some(profile) => format!("{} dmg, {}% hit", profile.damage, profile.hit_chance),
                None => "block the next hit".to_string(),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", action.key()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<8}", action.name()), Style::default().fg(Color::White)),
                Span::styled(detail, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    if battle.monster_stunned {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "The monster is stunned",
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Actions "));
    f.render_widget(paragraph, area);
}

pub fn draw_duel(f: &mut Frame, duel: &PvpDuel, attacker: PvpSide, area: Rect) {
    let mut lines = Vec::new();
    for side in [PvpSide::PlayerOne, PvpSide::PlayerTwo] {
        let marker = if side == attacker { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, side.name()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(hp_lines(duel.hp(side), duel.max_hp(), area.width));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{}: press any key to attack", attacker.name()),
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Duel "));
    f.render_widget(paragraph, area);
}

/// HP text plus a bar, coloured by remaining percentage
fn hp_lines(hp: u32, max_hp: u32, width: u16) -> Vec<Line<'static>> {
    let percent = if max_hp == 0 {
        0.0
    } else {
        hp as f64 / max_hp as f64 * 100.0
    };
    let color = if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let bar_width = width.saturating_sub(4) as usize;
    let filled = ((percent / 100.0) * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    vec![
        Line::from(vec![
            Span::styled("HP: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", hp, max_hp),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}{}", "█".repeat(filled), "░".repeat(empty)),
            Style::default().fg(color),
        )),
    ]
}

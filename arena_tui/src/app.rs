//! Terminal frontend state and the core collaborator impls

use crate::ui;
use arena_core::combat::BattleEvent;
use arena_core::pvp::PvpEvent;
use arena_core::{
    BattleOutcome, DisplaySink, GachaOutcome, GameEvent, InputError, InputProvider, Notice, Prompt,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

/// Colour class of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    PlayerHit,
    Critical,
    EnemyHit,
    Miss,
    Effect,
    Reward,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LineKind,
    pub text: String,
}

impl LogLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        LogLine {
            kind,
            text: text.into(),
        }
    }
}

/// Everything the UI draws besides the current prompt
#[derive(Debug, Default)]
pub struct View {
    pub log: Vec<LogLine>,
    /// Lines scrolled up from the bottom of the log
    pub log_scroll: usize,
    /// Pending multi-digit entry (equipment menu)
    pub buffer: String,
}

impl View {
    pub fn push_event(&mut self, event: &GameEvent) {
        self.log.extend(describe(event));
        self.log_scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        if self.log_scroll + 1 < self.log.len() {
            self.log_scroll += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }
}

/// Terminal input; draws the UI before waiting on each prompt
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    view: Rc<RefCell<View>>,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        App {
            terminal,
            view: Rc::new(RefCell::new(View::default())),
        }
    }

    /// Display sink feeding this app's log
    pub fn sink(&self) -> LogSink {
        LogSink {
            view: Rc::clone(&self.view),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn draw(&mut self, prompt: &Prompt<'_>) -> std::io::Result<()> {
        let view = self.view.borrow();
        self.terminal.draw(|f| ui::draw(f, &view, prompt))?;
        Ok(())
    }

    /// Map a key press to a token for `prompt`, or `None` to keep waiting
    fn key_token(&mut self, prompt: &Prompt<'_>, code: KeyCode) -> Option<String> {
        let mut view = self.view.borrow_mut();
        match prompt {
            Prompt::Continue | Prompt::PvpTurn { .. } => match code {
                KeyCode::Enter | KeyCode::Char(_) => Some(String::new()),
                _ => None,
            },
            Prompt::Equipment { .. } => match code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    view.buffer.push(c);
                    None
                }
                KeyCode::Backspace => {
                    view.buffer.pop();
                    None
                }
                KeyCode::Enter => Some(std::mem::take(&mut view.buffer)),
                KeyCode::Esc | KeyCode::Char('b') => {
                    view.buffer.clear();
                    Some("b".to_string())
                }
                _ => None,
            },
            Prompt::Home { .. } => match code {
                KeyCode::Char('q') | KeyCode::Esc => Some("0".to_string()),
                KeyCode::Char(c) => Some(c.to_string()),
                _ => None,
            },
            Prompt::BattleAction { .. } => match code {
                KeyCode::Char('p') => Some("punch".to_string()),
                KeyCode::Char('k') => Some("kick".to_string()),
                KeyCode::Char('c') => Some("counter".to_string()),
                KeyCode::Char('g') => Some("guard".to_string()),
                KeyCode::Char(c) => Some(c.to_string()),
                _ => None,
            },
        }
    }
}

impl<B: Backend> InputProvider for App<B> {
    fn next_token(&mut self, prompt: &Prompt<'_>) -> Result<String, InputError> {
        loop {
            self.draw(prompt)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Err(InputError::Interrupted),
                (KeyCode::Up, _) => self.view.borrow_mut().scroll_up(),
                (KeyCode::Down, _) => self.view.borrow_mut().scroll_down(),
                _ => {
                    if let Some(token) = self.key_token(prompt, key.code) {
                        return Ok(token);
                    }
                }
            }
        }
    }
}

/// Appends game events to the shared log
pub struct LogSink {
    view: Rc<RefCell<View>>,
}

impl DisplaySink for LogSink {
    fn emit(&mut self, event: &GameEvent) {
        self.view.borrow_mut().push_event(event);
    }
}

// === Event text ===

/// Render one event as log lines
pub fn describe(event: &GameEvent) -> Vec<LogLine> {
    use LineKind::*;

    match event {
        GameEvent::BattleStarted {
            monster,
            grade,
            monster_hp,
            player_hp,
            player_max_hp,
        } => vec![
            LogLine::new(Header, format!("━━━ A {} {} appears! ━━━", grade, monster)),
            LogLine::new(
                Info,
                format!("Monster HP {}  |  Your HP {}/{}", monster_hp, player_hp, player_max_hp),
            ),
        ],
        GameEvent::Battle(event) => vec![describe_battle(event)],
        GameEvent::BattleEnded(report) => {
            let line = match report.outcome {
                BattleOutcome::Victory => LogLine::new(
                    Reward,
                    format!(
                        "{} defeated in {} turns. +{} gold",
                        report.monster, report.turns, report.gold_awarded
                    ),
                ),
                BattleOutcome::Defeat | BattleOutcome::InProgress => {
                    LogLine::new(Warning, format!("You lost to {}.", report.monster))
                }
            };
            vec![line]
        }
        GameEvent::Gacha(GachaOutcome::Obtained { item, rarity }) => {
            vec![LogLine::new(Reward, format!("Gacha: obtained [{}] {}", rarity, item))]
        }
        GameEvent::Gacha(GachaOutcome::Duplicate { rarity, refunded }) => vec![LogLine::new(
            Info,
            format!(
                "Gacha: every {} item is already owned. {} gems refunded",
                rarity, refunded
            ),
        )],
        GameEvent::Equipped { item } => vec![LogLine::new(Info, format!("Equipped {}", item))],
        GameEvent::Unequipped => vec![LogLine::new(Info, "Equipment slot cleared")],
        GameEvent::Rejected(err) => vec![LogLine::new(Warning, err.to_string())],
        GameEvent::Notice(Notice::ComingSoon) => {
            vec![LogLine::new(Info, "Tournament is coming soon.")]
        }
        GameEvent::Notice(Notice::Goodbye) => vec![LogLine::new(Header, "Goodbye!")],
        GameEvent::Pvp(PvpEvent::Attack {
            attacker,
            hit,
            damage,
            defender_hp,
        }) => {
            let defender = attacker.opponent().name();
            if *hit {
                vec![LogLine::new(
                    PlayerHit,
                    format!(
                        "{} hits {} for {} ({} HP left)",
                        attacker.name(),
                        defender,
                        damage,
                        defender_hp
                    ),
                )]
            } else {
                vec![LogLine::new(Miss, format!("{} misses", attacker.name()))]
            }
        }
        GameEvent::Pvp(PvpEvent::Winner { side }) => {
            vec![LogLine::new(Reward, format!("{} wins the duel!", side.name()))]
        }
    }
}

fn describe_battle(event: &BattleEvent) -> LogLine {
    use LineKind::*;

    match event {
        BattleEvent::Guarded => LogLine::new(Info, "You raise your guard."),
        BattleEvent::PlayerMissed { action } => {
            LogLine::new(Miss, format!("Your {} misses.", action.name()))
        }
        BattleEvent::PlayerHit {
            action,
            damage,
            critical,
            first_hit_bonus,
        } => {
            let mut text = format!("Your {} deals {} damage", action.name(), damage);
            if *first_hit_bonus > 0 {
                text.push_str(&format!(" (+{} first hit)", first_hit_bonus));
            }
            if *critical {
                LogLine::new(Critical, format!("CRIT! {}", text))
            } else {
                LogLine::new(PlayerHit, text)
            }
        }
        BattleEvent::StunStrike { bonus_damage } => LogLine::new(
            Effect,
            format!("Gauntlet strike: +{} damage, the monster is stunned", bonus_damage),
        ),
        BattleEvent::LifeSteal { healed } => {
            LogLine::new(Effect, format!("Spirit fist heals you for {}", healed))
        }
        BattleEvent::Bleed { damage } => {
            LogLine::new(Effect, format!("The monster bleeds for {}", damage))
        }
        BattleEvent::MonsterStunned => LogLine::new(Effect, "The monster is stunned and cannot act."),
        BattleEvent::MonsterMissed => LogLine::new(Miss, "The monster misses."),
        BattleEvent::MonsterHit {
            damage,
            critical,
            reduced,
        } => {
            let mut text = format!("The monster hits you for {}", damage);
            if *reduced > 0 {
                text.push_str(&format!(" ({} absorbed)", reduced));
            }
            if *critical {
                text.insert_str(0, "CRIT! ");
            }
            LogLine::new(EnemyHit, text)
        }
        BattleEvent::Blocked { critical } => {
            let text = if *critical {
                "You block a critical blow!"
            } else {
                "You block the attack!"
            };
            LogLine::new(Effect, text)
        }
        BattleEvent::Victory => LogLine::new(Reward, "VICTORY"),
        BattleEvent::Defeat => LogLine::new(Warning, "DEFEATED"),
    }
}

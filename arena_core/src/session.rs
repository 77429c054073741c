//! Session - The home menu loop
//!
//! Owns the player state for the length of a run and routes each menu choice
//! to the matching subsystem. Operation errors become `Rejected` events and
//! the loop continues; only input failure ends the session early.

use crate::catalog::EquipmentCatalog;
use crate::combat::CombatEngine;
use crate::config::GameConstants;
use crate::error::{GameError, InputError, SessionError};
use crate::gacha::Gacha;
use crate::io::{DisplaySink, GameEvent, InputProvider, Notice, Prompt};
use crate::monster::{MonsterFactory, MonsterTemplates};
use crate::player::PlayerState;
use crate::pvp::{PvpDuel, PvpEvent, PvpSide};
use rand::Rng;

/// Home menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Hunt,
    Tournament,
    Pvp,
    Gacha,
    Equipment,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Hunt,
            MenuChoice::Tournament,
            MenuChoice::Pvp,
            MenuChoice::Gacha,
            MenuChoice::Equipment,
            MenuChoice::Exit,
        ]
    }

    pub fn from_selection(token: &str) -> Result<Self, GameError> {
        let token = token.trim();
        MenuChoice::all()
            .iter()
            .copied()
            .find(|choice| choice.key() == token)
            .ok_or_else(|| GameError::InvalidSelection(token.to_string()))
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Hunt => "1",
            MenuChoice::Tournament => "2",
            MenuChoice::Pvp => "3",
            MenuChoice::Gacha => "4",
            MenuChoice::Equipment => "5",
            MenuChoice::Exit => "0",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MenuChoice::Hunt => "Hunt",
            MenuChoice::Tournament => "Tournament",
            MenuChoice::Pvp => "PVP",
            MenuChoice::Gacha => "Gacha",
            MenuChoice::Equipment => "Equipment",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// One interactive run over a single player
pub struct Session<'a> {
    player: PlayerState,
    catalog: &'a EquipmentCatalog,
    monsters: &'a MonsterTemplates,
    constants: &'a GameConstants,
}

impl<'a> Session<'a> {
    /// Session with a fresh player
    pub fn new(
        catalog: &'a EquipmentCatalog,
        monsters: &'a MonsterTemplates,
        constants: &'a GameConstants,
    ) -> Self {
        Session {
            player: PlayerState::new(),
            catalog,
            monsters,
            constants,
        }
    }

    pub fn with_player(mut self, player: PlayerState) -> Self {
        self.player = player;
        self
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn into_player(self) -> PlayerState {
        self.player
    }

    /// Run the menu loop until the player exits
    ///
    /// On `Err` the player state is left as of the last completed operation.
    pub fn run(
        &mut self,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
        rng: &mut impl Rng,
    ) -> Result<(), SessionError> {
        tracing::info!("session started");
        loop {
            let token = input.next_token(&Prompt::Home {
                player: &self.player,
                catalog: self.catalog,
            })?;

            let choice = match MenuChoice::from_selection(&token) {
                Ok(choice) => choice,
                Err(err) => {
                    sink.emit(&GameEvent::Rejected(err));
                    continue;
                }
            };
            tracing::debug!(choice = choice.name(), "menu selection");

            match choice {
                MenuChoice::Hunt => self.hunt(input, sink, rng)?,
                MenuChoice::Tournament => {
                    sink.emit(&GameEvent::Notice(Notice::ComingSoon));
                    pause(input)?;
                }
                MenuChoice::Pvp => self.pvp(input, sink, rng)?,
                MenuChoice::Gacha => self.gacha(input, sink, rng)?,
                MenuChoice::Equipment => self.equipment(input, sink)?,
                MenuChoice::Exit => {
                    sink.emit(&GameEvent::Notice(Notice::Goodbye));
                    tracing::info!(gold = self.player.gold(), gems = self.player.gems(), "session ended");
                    return Ok(());
                }
            }
        }
    }

    // === Menu operations ===

    fn hunt(
        &mut self,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
        rng: &mut impl Rng,
    ) -> Result<(), InputError> {
        let factory = MonsterFactory::new(self.monsters, &self.constants.grades);
        let monster = factory.encounter(rng);
        CombatEngine::new(self.constants, self.catalog).run(
            monster,
            &mut self.player,
            input,
            sink,
            rng,
        )?;
        pause(input)
    }

    fn gacha(
        &mut self,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
        rng: &mut impl Rng,
    ) -> Result<(), InputError> {
        let gacha = Gacha::new(self.catalog, &self.constants.gacha);
        match gacha.pull(&mut self.player, rng) {
            Ok(outcome) => sink.emit(&GameEvent::Gacha(outcome)),
            Err(err) => sink.emit(&GameEvent::Rejected(err)),
        }
        pause(input)
    }

    fn pvp(
        &mut self,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
        rng: &mut impl Rng,
    ) -> Result<(), InputError> {
        let mut duel = PvpDuel::new(&self.constants.pvp);
        let mut attacker = PvpSide::PlayerOne;

        let winner = loop {
            input.next_token(&Prompt::PvpTurn {
                duel: &duel,
                attacker,
            })?;
            sink.emit(&GameEvent::Pvp(duel.attack(attacker, rng)));
            if let Some(side) = duel.winner() {
                break side;
            }
            attacker = attacker.opponent();
        };

        tracing::info!(winner = winner.name(), "pvp duel finished");
        sink.emit(&GameEvent::Pvp(PvpEvent::Winner { side: winner }));
        pause(input)
    }

    /// Owned items are numbered from 1 in `PlayerState::owned` order
    fn equipment(
        &mut self,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
    ) -> Result<(), InputError> {
        loop {
            let token = input.next_token(&Prompt::Equipment {
                player: &self.player,
                catalog: self.catalog,
            })?;
            let token = token.trim();

            match token {
                "" | "b" | "B" => return Ok(()),
                "0" => {
                    if let Some(item) = self.player.unequip() {
                        tracing::info!(%item, "unequipped");
                    }
                    sink.emit(&GameEvent::Unequipped);
                    return Ok(());
                }
                _ => {}
            }

            let selected = token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| self.player.owned().nth(index))
                .map(|(name, _)| name.to_string());

            let result = match selected {
                Some(name) => self.player.set_equipped(&name).map(|()| name),
                None => Err(GameError::InvalidSelection(token.to_string())),
            };

            match result {
                Ok(item) => {
                    tracing::info!(%item, "equipped");
                    sink.emit(&GameEvent::Equipped { item });
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(%err, "equipment change rejected");
                    sink.emit(&GameEvent::Rejected(err));
                }
            }
        }
    }
}

/// Wait for any token before returning to the menu
fn pause(input: &mut impl InputProvider) -> Result<(), InputError> {
    input.next_token(&Prompt::Continue).map(|_| ())
}

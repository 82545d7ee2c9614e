//! The game loop.
//!
//! A [`Session`] owns the player, the catalogs and the one RNG stream every
//! roll comes from, so a seed replays a whole run. It is `Playing` while the
//! player lives and `GameOver` afterwards; once over, [`Session::run_turn`]
//! only ever reports the final summary.
//!
//! Each turn resolves exactly one encounter. Combat and weapon finds pause
//! the session until the caller feeds in the decision:
//!
//! ```rust
//! use sillyquest::game::{Catalog, Session, Turn};
//!
//! let catalog = Catalog::standard().unwrap();
//! let mut session = Session::new("Hero", 42, catalog).unwrap();
//! loop {
//!     match session.run_turn().unwrap() {
//!         Turn::Resolved(_) => {}
//!         Turn::Combat(_) => {
//!             while session.combat_round("1").unwrap().result.is_none() {}
//!         }
//!         Turn::WeaponFound(_) => {
//!             session.decide_weapon("2").unwrap();
//!         }
//!         Turn::SessionOver(summary) => {
//!             println!("final score {}", summary.score);
//!             break;
//!         }
//!     }
//! }
//! ```

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::catalog::{starter_weapon, Catalog};
use super::character::{Enemy, Player};
use super::encounter::{
    parse_equip, resolve_healing, resolve_special, Combat, CombatChoice, CombatRound,
    EncounterKind, EncounterResult, WeaponFind,
};
use super::errors::{CatalogError, SessionError};
use super::weapon::Weapon;
use crate::sanitize::{clean_name, escape_log};

/// Used when the player leaves the name blank.
pub const DEFAULT_HERO_NAME: &str = "Clumsy Hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Final tally of a finished (or abandoned) session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub player: String,
    pub score: u32,
    pub enemies_defeated: u32,
    pub turns: u32,
    pub seed: u64,
}

/// A combat that has just started.
#[derive(Debug, Clone)]
pub struct CombatView {
    pub enemy: Enemy,
}

/// A weapon on offer next to what the player holds now.
#[derive(Debug, Clone)]
pub struct WeaponOffer {
    pub found: Weapon,
    pub current: Option<Weapon>,
}

#[derive(Debug, Clone)]
pub enum Turn {
    Resolved(EncounterResult),
    Combat(CombatView),
    WeaponFound(WeaponOffer),
    SessionOver(GameSummary),
}

#[derive(Debug, Clone)]
enum Pending {
    Idle,
    Combat(Combat),
    WeaponFind(WeaponFind),
}

#[derive(Debug, Clone)]
pub struct Session {
    player: Player,
    catalog: Catalog,
    rng: StdRng,
    seed: u64,
    pending: Pending,
    turns: u32,
    /// One entry per finished encounter, never trimmed. A session ends with
    /// the player's death, and unattended runs are capped by
    /// [`play_out`](super::autoplay::play_out)'s `max_turns`.
    history: Vec<EncounterResult>,
}

impl Session {
    /// New player at full health with the starter weapon.
    ///
    /// The name goes through [`clean_name`]; one that comes out empty is
    /// replaced by [`DEFAULT_HERO_NAME`].
    pub fn new(name: &str, seed: u64, catalog: Catalog) -> Result<Self, CatalogError> {
        let mut name = clean_name(name);
        if name.is_empty() {
            name = DEFAULT_HERO_NAME.to_string();
        }
        info!("session start: {} (seed {})", escape_log(&name), seed);
        let player = Player::new(name, Some(starter_weapon()?));
        Ok(Session {
            player,
            catalog,
            rng: StdRng::seed_from_u64(seed),
            seed,
            pending: Pending::Idle,
            turns: 0,
            history: Vec::new(),
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Every finished encounter of this session, oldest first. Grows by one
    /// per turn for the whole session.
    pub fn history(&self) -> &[EncounterResult] {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.player.is_alive() {
            Phase::Playing
        } else {
            Phase::GameOver
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() == Phase::GameOver
    }

    /// Enemy of the combat in progress, if any.
    pub fn current_enemy(&self) -> Option<&Enemy> {
        match &self.pending {
            Pending::Combat(c) => Some(c.enemy()),
            _ => None,
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            player: self.player.name().to_string(),
            score: self.player.score,
            enemies_defeated: self.player.enemies_defeated,
            turns: self.turns,
            seed: self.seed,
        }
    }

    /// Start the next encounter.
    pub fn run_turn(&mut self) -> Result<Turn, SessionError> {
        if !matches!(self.pending, Pending::Idle) {
            return Err(SessionError::EncounterPending);
        }
        if self.is_over() {
            return Ok(Turn::SessionOver(self.summary()));
        }
        self.turns += 1;
        let kind = EncounterKind::roll(&mut self.rng);
        debug!("turn {}: {:?}", self.turns, kind);
        let turn = match kind {
            EncounterKind::Combat => {
                let combat = Combat::start(&self.catalog, &self.player, &mut self.rng);
                let view = CombatView {
                    enemy: combat.enemy().clone(),
                };
                self.pending = Pending::Combat(combat);
                Turn::Combat(view)
            }
            EncounterKind::WeaponFind => {
                let find = WeaponFind::start(&self.catalog, &mut self.rng);
                let offer = WeaponOffer {
                    found: find.found().clone(),
                    current: self.player.weapon.clone(),
                };
                self.pending = Pending::WeaponFind(find);
                Turn::WeaponFound(offer)
            }
            EncounterKind::Healing => {
                let result = resolve_healing(&mut self.player, &mut self.rng);
                Turn::Resolved(self.record(result))
            }
            EncounterKind::Special => {
                let result = resolve_special(&mut self.player, &mut self.rng);
                Turn::Resolved(self.record(result))
            }
        };
        Ok(turn)
    }

    /// Feed one combat decision. Unrecognised input comes back as
    /// [`super::RoundAction::Rejected`] with nothing changed.
    pub fn combat_round(&mut self, input: &str) -> Result<CombatRound, SessionError> {
        let Pending::Combat(combat) = &mut self.pending else {
            return Err(SessionError::NoCombat);
        };
        let choice = CombatChoice::parse(input);
        if choice.is_none() {
            debug!("rejected combat input '{}'", escape_log(input));
        }
        let round = combat.round(&mut self.player, choice, &mut self.rng);
        if let Some(result) = &round.result {
            self.pending = Pending::Idle;
            self.record(result.clone());
            if self.is_over() {
                info!(
                    "game over: {} scored {} ({} defeated)",
                    escape_log(self.player.name()),
                    self.player.score,
                    self.player.enemies_defeated
                );
            }
        }
        Ok(round)
    }

    /// Equip or skip the weapon on offer.
    pub fn decide_weapon(&mut self, input: &str) -> Result<EncounterResult, SessionError> {
        match std::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::WeaponFind(find) => {
                let result = find.decide(&mut self.player, parse_equip(input));
                Ok(self.record(result))
            }
            other => {
                self.pending = other;
                Err(SessionError::NoWeaponOffer)
            }
        }
    }

    fn record(&mut self, result: EncounterResult) -> EncounterResult {
        debug!("resolved {:?}: {:?}", result.kind, result.outcome);
        self.history.push(result.clone());
        result
    }
}

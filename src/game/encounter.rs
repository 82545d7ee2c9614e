//! Encounter resolution.
//!
//! Every turn rolls one of four encounter kinds. Healing and special events
//! resolve on the spot; combat and weapon finds stop and wait for the
//! player's decision, one call per decision.
//!
//! Combat ordering: the player's blow lands first, and an enemy brought to
//! exactly 0 health is defeated before it can answer. A failed flee gives the
//! enemy a free hit; if that hit is lethal the fight ends as a loss right away.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{choose, Catalog, HEALING_ITEMS, SPECIAL_EVENTS};
use super::character::{heal, take_damage, Enemy, Player};
use super::weapon::{roll_damage, Weapon};

/// Chance that running away works.
pub const FLEE_CHANCE: f64 = 0.5;
/// Chance that a special event comes with a bonus heal.
pub const BONUS_HEAL_CHANCE: f64 = 0.5;
/// Inclusive heal range of a healing encounter.
pub const HEAL_RANGE: (i32, i32) = (10, 30);
/// Inclusive range of the special-event bonus heal.
pub const BONUS_HEAL_RANGE: (i32, i32) = (5, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    Combat,
    WeaponFind,
    Healing,
    Special,
}

impl EncounterKind {
    pub const ALL: [EncounterKind; 4] = [
        EncounterKind::Combat,
        EncounterKind::WeaponFind,
        EncounterKind::Healing,
        EncounterKind::Special,
    ];

    /// Uniform pick over the four kinds.
    pub fn roll(rng: &mut StdRng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// What happened, tagged for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    PlayerWon { enemy: String, experience: u32 },
    PlayerLost { enemy: String },
    PlayerFled { enemy: String },
    Equipped { weapon: String, dropped: Option<String> },
    Skipped { weapon: String },
    Healed { item: String, amount: i32 },
    Event { text: String, bonus: Option<i32> },
}

/// A finished encounter: its kind, outcome and what it did to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub kind: EncounterKind,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Net change in player health over the whole encounter.
    pub health_delta: i32,
    pub score_delta: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatChoice {
    Attack,
    Flee,
}

impl CombatChoice {
    /// Accepts the menu number or the word; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "a" | "attack" => Some(CombatChoice::Attack),
            "2" | "f" | "flee" | "run" => Some(CombatChoice::Flee),
            _ => None,
        }
    }

    /// Canonical menu input for this choice.
    pub fn as_input(self) -> &'static str {
        match self {
            CombatChoice::Attack => "1",
            CombatChoice::Flee => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatStatus {
    Ongoing,
    PlayerWon,
    PlayerLost,
    PlayerFled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundAction {
    /// Player hit for `dealt`; `taken` is the retaliation, absent when the
    /// enemy died first.
    Attacked { dealt: i32, taken: Option<i32> },
    FleeSucceeded,
    FleeFailed { taken: i32 },
    /// Unrecognised input; nothing changed.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRound {
    pub action: RoundAction,
    pub status: CombatStatus,
    pub player_health: i32,
    pub enemy_health: i32,
    /// Present once the fight is over.
    pub result: Option<EncounterResult>,
}

/// A fight in progress against one freshly spawned enemy.
#[derive(Debug, Clone)]
pub struct Combat {
    enemy: Enemy,
    status: CombatStatus,
    health_at_start: i32,
    flee_chance: f64,
}

impl Combat {
    pub fn start(catalog: &Catalog, player: &Player, rng: &mut StdRng) -> Self {
        let enemy = catalog.create_random_enemy(rng);
        debug!("combat: {} vs {}", player.name(), enemy);
        Combat {
            enemy,
            status: CombatStatus::Ongoing,
            health_at_start: player.vitals.health(),
            flee_chance: FLEE_CHANCE,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_flee_chance(mut self, p: f64) -> Self {
        self.flee_chance = p;
        self
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn status(&self) -> CombatStatus {
        self.status
    }

    /// Resolve one round. `None` stands for unrecognised input and neither
    /// changes state nor draws from `rng`.
    pub fn round(
        &mut self,
        player: &mut Player,
        choice: Option<CombatChoice>,
        rng: &mut StdRng,
    ) -> CombatRound {
        let action = match (self.status, choice) {
            (CombatStatus::Ongoing, Some(CombatChoice::Attack)) => self.attack(player, rng),
            (CombatStatus::Ongoing, Some(CombatChoice::Flee)) => self.flee(player, rng),
            _ => RoundAction::Rejected,
        };
        let result = match action {
            RoundAction::Rejected => None,
            _ => self.finish(player),
        };
        CombatRound {
            action,
            status: self.status,
            player_health: player.vitals.health(),
            enemy_health: self.enemy.vitals.health(),
            result,
        }
    }

    fn attack(&mut self, player: &mut Player, rng: &mut StdRng) -> RoundAction {
        let dealt = roll_damage(player.weapon.as_ref(), rng);
        take_damage(&mut self.enemy.vitals, dealt);
        if !self.enemy.is_alive() {
            player.record_kill(self.enemy.experience);
            self.status = CombatStatus::PlayerWon;
            return RoundAction::Attacked { dealt, taken: None };
        }
        let taken = self.enemy.weapon.roll_damage(rng);
        take_damage(&mut player.vitals, taken);
        if !player.is_alive() {
            self.status = CombatStatus::PlayerLost;
        }
        RoundAction::Attacked {
            dealt,
            taken: Some(taken),
        }
    }

    fn flee(&mut self, player: &mut Player, rng: &mut StdRng) -> RoundAction {
        if rng.gen_bool(self.flee_chance) {
            self.status = CombatStatus::PlayerFled;
            return RoundAction::FleeSucceeded;
        }
        let taken = self.enemy.weapon.roll_damage(rng);
        take_damage(&mut player.vitals, taken);
        if !player.is_alive() {
            self.status = CombatStatus::PlayerLost;
        }
        RoundAction::FleeFailed { taken }
    }

    fn finish(&self, player: &Player) -> Option<EncounterResult> {
        let enemy = self.enemy.name().to_string();
        let (outcome, score_delta) = match self.status {
            CombatStatus::Ongoing => return None,
            CombatStatus::PlayerWon => (
                Outcome::PlayerWon {
                    enemy,
                    experience: self.enemy.experience,
                },
                self.enemy.experience,
            ),
            CombatStatus::PlayerLost => (Outcome::PlayerLost { enemy }, 0),
            CombatStatus::PlayerFled => (Outcome::PlayerFled { enemy }, 0),
        };
        debug!("combat over: {:?}", self.status);
        Some(EncounterResult {
            kind: EncounterKind::Combat,
            outcome,
            health_delta: player.vitals.health() - self.health_at_start,
            score_delta,
        })
    }
}

/// A weapon lying on the ground, waiting for equip-or-skip.
#[derive(Debug, Clone)]
pub struct WeaponFind {
    found: Weapon,
}

impl WeaponFind {
    pub fn start(catalog: &Catalog, rng: &mut StdRng) -> Self {
        WeaponFind {
            found: catalog.random_weapon(rng),
        }
    }

    pub fn found(&self) -> &Weapon {
        &self.found
    }

    pub fn decide(self, player: &mut Player, equip: bool) -> EncounterResult {
        let outcome = if equip {
            let dropped = player.equip(self.found.clone());
            Outcome::Equipped {
                weapon: self.found.name().to_string(),
                dropped: dropped.map(|w| w.name().to_string()),
            }
        } else {
            Outcome::Skipped {
                weapon: self.found.name().to_string(),
            }
        };
        EncounterResult {
            kind: EncounterKind::WeaponFind,
            outcome,
            health_delta: 0,
            score_delta: 0,
        }
    }
}

/// Whether weapon-find input means "take it". Anything unrecognised skips.
pub fn parse_equip(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "y" | "yes" | "equip" | "take"
    )
}

pub fn resolve_healing(player: &mut Player, rng: &mut StdRng) -> EncounterResult {
    let amount = rng.gen_range(HEAL_RANGE.0..=HEAL_RANGE.1);
    let item = choose(rng, &HEALING_ITEMS);
    let before = player.vitals.health();
    heal(&mut player.vitals, amount);
    EncounterResult {
        kind: EncounterKind::Healing,
        outcome: Outcome::Healed {
            item: item.to_string(),
            amount,
        },
        health_delta: player.vitals.health() - before,
        score_delta: 0,
    }
}

pub fn resolve_special(player: &mut Player, rng: &mut StdRng) -> EncounterResult {
    let text = choose(rng, &SPECIAL_EVENTS);
    let before = player.vitals.health();
    let bonus = if rng.gen_bool(BONUS_HEAL_CHANCE) {
        let b = rng.gen_range(BONUS_HEAL_RANGE.0..=BONUS_HEAL_RANGE.1);
        heal(&mut player.vitals, b);
        Some(b)
    } else {
        None
    };
    EncounterResult {
        kind: EncounterKind::Special,
        outcome: Outcome::Event {
            text: text.to_string(),
            bonus,
        },
        health_delta: player.vitals.health() - before,
        score_delta: 0,
    }
}

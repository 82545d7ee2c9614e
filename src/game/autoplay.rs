//! Unattended play.
//!
//! A [`Strategy`] answers the two questions a session ever asks (fight or
//! run, take or leave) so whole sessions can be run without a terminal. Used
//! by the `simulate` command and by tests.

use serde::{Deserialize, Serialize};

use super::character::{Enemy, Player};
use super::encounter::CombatChoice;
use super::errors::SessionError;
use super::session::{GameSummary, Session, Turn, WeaponOffer};

pub trait Strategy {
    fn combat_choice(&mut self, player: &Player, enemy: &Enemy) -> CombatChoice;
    fn take_weapon(&mut self, offer: &WeaponOffer) -> bool;
}

/// Picks up anything that hits harder on average.
fn is_upgrade(offer: &WeaponOffer) -> bool {
    match &offer.current {
        Some(cur) => offer.found.average_damage() > cur.average_damage(),
        None => true,
    }
}

/// Never runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reckless;

impl Strategy for Reckless {
    fn combat_choice(&mut self, _player: &Player, _enemy: &Enemy) -> CombatChoice {
        CombatChoice::Attack
    }

    fn take_weapon(&mut self, offer: &WeaponOffer) -> bool {
        is_upgrade(offer)
    }
}

/// Runs once one more enemy hit could be fatal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cautious;

impl Strategy for Cautious {
    fn combat_choice(&mut self, player: &Player, enemy: &Enemy) -> CombatChoice {
        if player.vitals.health() <= enemy.weapon.max_damage() {
            CombatChoice::Flee
        } else {
            CombatChoice::Attack
        }
    }

    fn take_weapon(&mut self, offer: &WeaponOffer) -> bool {
        is_upgrade(offer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Reckless,
    Cautious,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Reckless => Box::new(Reckless),
            StrategyKind::Cautious => Box::new(Cautious),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayReport {
    pub summary: GameSummary,
    /// False when the turn cap stopped a still-living player.
    pub finished: bool,
    pub combats: u32,
    pub fled: u32,
}

/// Play `session` to the end, or until `max_turns` encounters have run.
pub fn play_out(
    session: &mut Session,
    strategy: &mut dyn Strategy,
    max_turns: u32,
) -> Result<PlayReport, SessionError> {
    let (mut combats, mut fled) = (0, 0);
    while session.turns() < max_turns {
        match session.run_turn()? {
            Turn::SessionOver(summary) => {
                return Ok(PlayReport {
                    summary,
                    finished: true,
                    combats,
                    fled,
                })
            }
            Turn::Resolved(_) => {}
            Turn::Combat(_) => {
                combats += 1;
                loop {
                    let choice = match session.current_enemy() {
                        Some(enemy) => strategy.combat_choice(session.player(), enemy),
                        None => break,
                    };
                    let round = session.combat_round(choice.as_input())?;
                    if let Some(result) = round.result {
                        if matches!(result.outcome, super::Outcome::PlayerFled { .. }) {
                            fled += 1;
                        }
                        break;
                    }
                }
            }
            Turn::WeaponFound(offer) => {
                let input = if strategy.take_weapon(&offer) { "1" } else { "2" };
                session.decide_weapon(input)?;
            }
        }
    }
    Ok(PlayReport {
        summary: session.summary(),
        finished: session.is_over(),
        combats,
        fled,
    })
}

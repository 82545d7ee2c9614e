//! # Console Shell
//!
//! Line-oriented front end for the game core. Reads decisions from any
//! `BufRead` and writes the narration to any `Write`, so the same code runs on
//! a terminal and under test.
//!
//! Quips are picked from their own RNG stream; the session's stream is only
//! ever touched by the rules, so a seeded run plays out the same whatever the
//! narration says.
//!
//! End of input abandons the current session and skips the replay prompt.

pub mod flavor;

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

use crate::config::DisplayConfig;
use crate::game::catalog::choose;
use crate::game::{
    Catalog, CombatStatus, CombatView, EncounterResult, GameSummary, Outcome, Player,
    RoundAction, Session, Turn, WeaponOffer,
};
use crate::sanitize::{clean_name, escape_log};

pub struct Console<R, W> {
    input: R,
    out: W,
    display: DisplayConfig,
    quips: StdRng,
    eof: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, display: DisplayConfig, quip_seed: u64) -> Self {
        Console {
            input,
            out,
            display,
            quips: StdRng::seed_from_u64(quip_seed),
            eof: false,
        }
    }

    /// Play sessions until the player declines a replay.
    ///
    /// With `first_seed` set, session `i` uses `first_seed + i`; otherwise each
    /// session draws a fresh seed. A `name` skips the name prompt.
    pub fn run(
        &mut self,
        catalog: &Catalog,
        first_seed: Option<u64>,
        name: Option<&str>,
        default_name: &str,
    ) -> Result<Vec<GameSummary>> {
        let mut summaries = Vec::new();
        for i in 0u64.. {
            let seed = match first_seed {
                Some(s) => s.wrapping_add(i),
                None => rand::thread_rng().gen(),
            };
            writeln!(self.out, "=== WELCOME TO SILLYQUEST ===")?;
            let hero = match name {
                Some(n) => n.to_string(),
                None => {
                    write!(self.out, "Enter your hero's name: ")?;
                    self.out.flush()?;
                    self.read_line()?.unwrap_or_default()
                }
            };
            let hero = match clean_name(&hero) {
                n if n.is_empty() => default_name.to_string(),
                n => n,
            };
            let mut session = Session::new(&hero, seed, catalog.clone())?;
            summaries.push(self.play_session(&mut session)?);
            if self.eof {
                break;
            }
            writeln!(self.out, "Play again? (y/n)")?;
            let again = self.read_line()?.unwrap_or_default();
            if again.trim().to_lowercase() != "y" {
                writeln!(
                    self.out,
                    "Come back when you get bored of winning other games!"
                )?;
                break;
            }
        }
        Ok(summaries)
    }

    /// Drive one session until the player dies or input runs out.
    pub fn play_session(&mut self, session: &mut Session) -> Result<GameSummary> {
        let start = self.quip(&flavor::START).replace("{name}", session.player().name());
        writeln!(self.out, "\n{}\n", start)?;

        while !session.is_over() && !self.eof {
            self.show_status(session.player())?;
            match session.run_turn()? {
                Turn::SessionOver(_) => break,
                Turn::Resolved(result) => self.show_result(&result, session.player())?,
                Turn::Combat(view) => self.fight(session, &view)?,
                Turn::WeaponFound(offer) => self.offer_weapon(session, &offer)?,
            }
            if !session.is_over() && !self.eof && self.display.pause_between_turns {
                writeln!(self.out, "Press Enter to continue...")?;
                self.out.flush()?;
                self.read_line()?;
            }
        }

        let summary = session.summary();
        if self.eof && !session.is_over() {
            warn!(
                "input closed; abandoning session of {}",
                escape_log(&summary.player)
            );
            return Ok(summary);
        }
        info!(
            "session over: {} score={} defeated={} turns={}",
            escape_log(&summary.player),
            summary.score,
            summary.enemies_defeated,
            summary.turns
        );
        self.show_game_over(&summary)?;
        Ok(summary)
    }

    fn fight(&mut self, session: &mut Session, view: &CombatView) -> Result<()> {
        let enemy = &view.enemy;
        let skull = self.tag("💀", "[!]");
        writeln!(self.out, "{} You run into {}!", skull, enemy.name())?;
        writeln!(self.out, "{}\n", enemy)?;

        loop {
            writeln!(self.out, "Choose an action:")?;
            writeln!(self.out, "1. Attack")?;
            writeln!(self.out, "2. Try to flee")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            debug!("combat input '{}'", escape_log(&line));
            let round = session.combat_round(&line)?;
            match round.action {
                RoundAction::Rejected => {
                    let x = self.tag("❌", "[x]");
                    writeln!(self.out, "{} Invalid input! Try again.", x)?;
                }
                RoundAction::Attacked { dealt, taken } => {
                    let quip = self.quip(&flavor::PLAYER_ATTACK);
                    let swords = self.tag("⚔️", "[*]");
                    writeln!(self.out, "{}", quip)?;
                    writeln!(self.out, "{} You deal {} damage!", swords, dealt)?;
                    if round.status == CombatStatus::PlayerWon {
                        let party = self.tag("🎉", "[+]");
                        let plus = self.tag("➕", "[+]");
                        let quip = self.quip(&flavor::VICTORY);
                        writeln!(self.out, "{} You defeated {}!", party, enemy.name())?;
                        writeln!(self.out, "{} Points earned: {}", plus, enemy.experience)?;
                        writeln!(self.out, "{}", quip)?;
                    }
                    if let Some(taken) = taken {
                        let quip = self.quip(&flavor::ENEMY_ATTACK);
                        let boom = self.tag("💥", "[-]");
                        writeln!(self.out, "{}", quip)?;
                        writeln!(self.out, "{} {} deals {} damage!", boom, enemy.name(), taken)?;
                    }
                }
                RoundAction::FleeSucceeded => {
                    let run = self.tag("🏃", "[>]");
                    let quip = self.quip(&flavor::ESCAPE);
                    writeln!(self.out, "{} {}", run, quip)?;
                }
                RoundAction::FleeFailed { taken } => {
                    let x = self.tag("❌", "[x]");
                    let boom = self.tag("💥", "[-]");
                    let quip = self.quip(&flavor::ENEMY_ATTACK);
                    writeln!(self.out, "{} You failed to escape!", x)?;
                    writeln!(self.out, "{}", quip)?;
                    writeln!(
                        self.out,
                        "{} {} hits you in the back for {} damage!",
                        boom,
                        enemy.name(),
                        taken
                    )?;
                }
            }
            match round.status {
                CombatStatus::PlayerLost => {
                    let quip = self.quip(&flavor::DEATH);
                    writeln!(self.out, "{}", quip)?;
                }
                CombatStatus::Ongoing if round.action != RoundAction::Rejected => {
                    let p = session.player();
                    writeln!(
                        self.out,
                        "\nYour health: {}\n{} health: {}/{}\n",
                        p.vitals,
                        enemy.name(),
                        round.enemy_health,
                        enemy.vitals.max_health()
                    )?;
                }
                _ => {}
            }
            if round.result.is_some() {
                return Ok(());
            }
        }
    }

    fn offer_weapon(&mut self, session: &mut Session, offer: &WeaponOffer) -> Result<()> {
        let gift = self.tag("🎁", "[?]");
        writeln!(self.out, "{} You found a new weapon: {}", gift, offer.found)?;
        if let Some(desc) = offer.found.description() {
            let memo = self.tag("📝", "   ");
            writeln!(self.out, "{} {}", memo, desc)?;
        }
        let current = match &offer.current {
            Some(w) => w.to_string(),
            None => "bare hands".to_string(),
        };
        writeln!(self.out, "Choose an action:")?;
        writeln!(self.out, "1. Take {}", offer.found.name())?;
        writeln!(self.out, "2. Keep your current weapon ({})", current)?;
        self.out.flush()?;

        let line = self.read_line()?.unwrap_or_default();
        let result = session.decide_weapon(&line)?;
        match result.outcome {
            Outcome::Equipped { weapon, .. } => {
                let ok = self.tag("✅", "[+]");
                let quip = self.quip(&flavor::EQUIP).replace("{weapon}", &weapon);
                writeln!(self.out, "{} {}", ok, quip)?;
            }
            _ => {
                let x = self.tag("❌", "[x]");
                let quip = self.quip(&flavor::SKIP);
                writeln!(self.out, "{} {}", x, quip)?;
            }
        }
        Ok(())
    }

    fn show_result(&mut self, result: &EncounterResult, player: &Player) -> Result<()> {
        match &result.outcome {
            Outcome::Healed { item, amount } => {
                let heart = self.tag("💚", "[+]");
                writeln!(
                    self.out,
                    "{} You found {}! Restored {} health.",
                    heart, item, amount
                )?;
                writeln!(self.out, "Your health: {}", player.vitals)?;
            }
            Outcome::Event { text, bonus } => {
                let mask = self.tag("🎭", "[~]");
                writeln!(self.out, "{} {}", mask, text)?;
                if let Some(b) = bonus {
                    let heart = self.tag("💚", "[+]");
                    writeln!(self.out, "{} Health bonus! +{} HP", heart, b)?;
                }
            }
            other => debug!("unexpected immediate outcome {:?}", other),
        }
        Ok(())
    }

    fn show_status(&mut self, player: &Player) -> Result<()> {
        let weapon = match &player.weapon {
            Some(w) => w.to_string(),
            None => "No weapon".to_string(),
        };
        writeln!(self.out, "=== {} ===", player.name())?;
        writeln!(self.out, "Health: {}", player.vitals)?;
        writeln!(self.out, "Weapon: {}", weapon)?;
        writeln!(self.out, "Score: {}", player.score)?;
        writeln!(self.out, "Enemies defeated: {}", player.enemies_defeated)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn show_game_over(&mut self, summary: &GameSummary) -> Result<()> {
        let quip = self.quip(&flavor::GAME_OVER);
        writeln!(self.out, "=== GAME OVER ===")?;
        writeln!(self.out, "Player: {}", summary.player)?;
        writeln!(self.out, "Final score: {} points", summary.score)?;
        writeln!(self.out, "Enemies defeated: {}", summary.enemies_defeated)?;
        writeln!(self.out, "\n{}", quip)?;
        writeln!(self.out, "\nThanks for playing!")?;
        Ok(())
    }

    /// Next input line without its line ending; `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn quip(&mut self, opts: &[&'static str]) -> &'static str {
        choose(&mut self.quips, opts)
    }

    fn tag(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.display.emoji {
            emoji
        } else {
            plain
        }
    }
}

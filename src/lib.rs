//! # sillyquest - a turn-based text adventure
//!
//! A lone hero wanders from one random encounter to the next (fights, weapon
//! finds, snacks and odd events) until something finally finishes them off.
//! The score is the experience collected from defeated enemies.
//!
//! ## Features
//!
//! - **Deterministic core**: every roll comes from one seeded RNG stream per session.
//! - **Step-wise API**: the core pauses for each combat round and weapon decision,
//!   so any front end (terminal, tests, bots) can drive it.
//! - **Unattended play**: scripted strategies run whole sessions for simulation.
//! - **Console shell**: emoji or plain-ASCII narration with replay support.
//!
//! ## Quick Start
//!
//! ```rust
//! use sillyquest::game::autoplay::{play_out, Reckless};
//! use sillyquest::game::{Catalog, Session};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new("Bot", 7, Catalog::standard()?)?;
//!     let report = play_out(&mut session, &mut Reckless, 10_000)?;
//!     println!("{} scored {}", report.summary.player, report.summary.score);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - rules: weapons, characters, catalogs, encounters, the game loop
//! - [`console`] - line-oriented terminal front end
//! - [`config`] - TOML configuration
//! - [`sanitize`] - cleaning up typed names and input for display and logs

pub mod config;
pub mod console;
pub mod game;
pub mod sanitize;

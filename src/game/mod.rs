//! # Game Core
//!
//! Rules of a sillyquest run, free of any terminal I/O.
//!
//! ## Components
//!
//! - [`weapon`] - weapons and inclusive damage rolls
//! - [`character`] - shared health record, player and enemy
//! - [`catalog`] - fixed enemy/weapon catalogs and their uniform factories
//! - [`encounter`] - combat, weapon finds, healing and special events
//! - [`session`] - the game loop and the API the shell drives
//! - [`autoplay`] - scripted strategies for unattended runs
//!
//! ```text
//! ┌─────────────────┐
//! │    Session      │ ← one RNG stream, Playing → GameOver
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Encounters    │ ← Combat / WeaponFind / Healing / Special
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Catalog, Player │ ← templates, health rules, damage rolls
//! └─────────────────┘
//! ```

pub mod autoplay;
pub mod catalog;
pub mod character;
pub mod encounter;
pub mod errors;
pub mod session;
pub mod weapon;

pub use catalog::{Catalog, EnemyTemplate};
pub use character::{heal, take_damage, Enemy, Player, Vitals, PLAYER_MAX_HEALTH};
pub use encounter::{
    CombatChoice, CombatRound, CombatStatus, EncounterKind, EncounterResult, Outcome,
    RoundAction,
};
pub use errors::{CatalogError, SessionError};
pub use session::{CombatView, GameSummary, Phase, Session, Turn, WeaponOffer};
pub use weapon::{roll_damage, Weapon, UNARMED_DAMAGE};

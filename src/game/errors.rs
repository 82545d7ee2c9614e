use thiserror::Error;

/// Errors raised while building the content catalogs.
///
/// Catalogs are validated once, up front; a bad template must never reach
/// damage sampling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Weapon whose damage range is empty or negative.
    #[error("invalid damage range for {name}: {min}-{max}")]
    InvalidDamageRange { name: String, min: i32, max: i32 },

    /// Enemy template with non-positive health.
    #[error("invalid max health for {name}: {health}")]
    InvalidHealth { name: String, health: i32 },

    /// Enemy template that awards nothing on defeat.
    #[error("enemy {0} must award experience")]
    NoExperience(String),

    /// A factory cannot pick from an empty list.
    #[error("{0} catalog is empty")]
    Empty(&'static str),
}

/// Errors raised when the session API is driven out of order.
///
/// None of these are game outcomes; player death is reported through
/// [`crate::game::Turn::SessionOver`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `run_turn` was called while a combat or weapon decision is still open.
    #[error("an encounter is waiting for a decision")]
    EncounterPending,

    /// `combat_round` was called with no combat in progress.
    #[error("no combat in progress")]
    NoCombat,

    /// `decide_weapon` was called with no weapon on offer.
    #[error("no weapon on offer")]
    NoWeaponOffer,
}

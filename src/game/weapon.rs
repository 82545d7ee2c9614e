//! Weapons and damage rolls.
//!
//! A [`Weapon`] is an immutable value: whoever wields it holds their own copy,
//! and swapping weapons simply drops the old one. Damage is sampled uniformly
//! from the inclusive `[min_damage, max_damage]` range on every roll.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CatalogError;

/// Damage dealt by an attacker with nothing in hand.
pub const UNARMED_DAMAGE: i32 = 5;

/// Deserialising goes through [`Weapon::new`], so a stored weapon with a
/// bad range is rejected the same way a hand-built one is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeaponRecord")]
pub struct Weapon {
    name: String,
    min_damage: i32,
    max_damage: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Weapon {
    /// Build a weapon, rejecting ranges that could not be sampled.
    pub fn new(
        name: impl Into<String>,
        min_damage: i32,
        max_damage: i32,
        description: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let weapon = Weapon {
            name: name.into(),
            min_damage,
            max_damage,
            description: description.filter(|d| !d.is_empty()).map(str::to_string),
        };
        weapon.check()?;
        Ok(weapon)
    }

    pub(crate) fn check(&self) -> Result<(), CatalogError> {
        if self.min_damage < 0 || self.min_damage > self.max_damage {
            return Err(CatalogError::InvalidDamageRange {
                name: self.name.clone(),
                min: self.min_damage,
                max: self.max_damage,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_damage(&self) -> i32 {
        self.min_damage
    }

    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Midpoint of the damage range, used by strategies to compare weapons.
    pub fn average_damage(&self) -> f64 {
        (self.min_damage + self.max_damage) as f64 / 2.0
    }

    pub fn roll_damage(&self, rng: &mut StdRng) -> i32 {
        rng.gen_range(self.min_damage..=self.max_damage)
    }
}

#[derive(Deserialize)]
struct WeaponRecord {
    name: String,
    min_damage: i32,
    max_damage: i32,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<WeaponRecord> for Weapon {
    type Error = CatalogError;

    fn try_from(r: WeaponRecord) -> Result<Self, Self::Error> {
        Weapon::new(r.name, r.min_damage, r.max_damage, r.description.as_deref())
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{} dmg)", self.name, self.min_damage, self.max_damage)
    }
}

/// Roll damage for an attacker that may be unarmed.
///
/// Unarmed attacks never touch the RNG.
pub fn roll_damage(weapon: Option<&Weapon>, rng: &mut StdRng) -> i32 {
    match weapon {
        Some(w) => w.roll_damage(rng),
        None => UNARMED_DAMAGE,
    }
}

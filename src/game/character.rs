//! Player and enemy state.
//!
//! Both sides share a [`Vitals`] record; [`take_damage`] and [`heal`] are the
//! only mutators of health and keep it inside `[0, max_health]`.

use log::warn;
use serde::Serialize;
use std::fmt;

use super::weapon::Weapon;

/// Health every new player starts (and caps) at.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Name, health and health cap shared by everything that can be hurt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vitals {
    pub name: String,
    health: i32,
    max_health: i32,
}

impl Vitals {
    /// Starts at full health. `max_health` must be positive; catalog and
    /// session constructors guarantee it.
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Vitals {
            name: name.into(),
            health: max_health,
            max_health,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl fmt::Display for Vitals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.health, self.max_health)
    }
}

/// Subtract `amount` from health, flooring at zero.
///
/// A negative amount raises health instead; nothing in the game passes one,
/// but the arithmetic is kept permissive and only clamped.
pub fn take_damage(v: &mut Vitals, amount: i32) {
    if amount < 0 {
        warn!("negative damage {} applied to {}", amount, v.name);
    }
    v.health = v.health.saturating_sub(amount).clamp(0, v.max_health);
}

/// Add `amount` to health, capping at `max_health`.
pub fn heal(v: &mut Vitals, amount: i32) {
    v.health = v.health.saturating_add(amount).clamp(0, v.max_health);
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub vitals: Vitals,
    pub score: u32,
    pub enemies_defeated: u32,
    /// `None` means unarmed.
    pub weapon: Option<Weapon>,
}

impl Player {
    pub fn new(name: impl Into<String>, weapon: Option<Weapon>) -> Self {
        Player {
            vitals: Vitals::new(name, PLAYER_MAX_HEALTH),
            score: 0,
            enemies_defeated: 0,
            weapon,
        }
    }

    pub fn name(&self) -> &str {
        &self.vitals.name
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }

    /// Swap in a new weapon, returning the one that was dropped.
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Credit one defeated enemy worth `experience` points.
    pub fn record_kill(&mut self, experience: u32) {
        self.score = self.score.saturating_add(experience);
        self.enemies_defeated = self.enemies_defeated.saturating_add(1);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub vitals: Vitals,
    pub weapon: Weapon,
    pub experience: u32,
}

impl Enemy {
    pub fn name(&self) -> &str {
        &self.vitals.name
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP {}, weapon: {})",
            self.vitals.name,
            self.vitals,
            self.weapon.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut v = Vitals::new("Duck", 15);
        take_damage(&mut v, 10);
        assert_eq!(v.health(), 5);
        take_damage(&mut v, 50);
        assert_eq!(v.health(), 0);
        assert!(!v.is_alive());
    }

    #[test]
    fn exact_lethal_damage_kills() {
        let mut v = Vitals::new("Rat", 30);
        take_damage(&mut v, 30);
        assert_eq!(v.health(), 0);
        assert!(!v.is_alive());
    }

    #[test]
    fn heal_caps_at_max() {
        let mut v = Vitals::new("Hero", 100);
        take_damage(&mut v, 20);
        heal(&mut v, 15);
        assert_eq!(v.health(), 95);
        heal(&mut v, 30);
        assert_eq!(v.health(), 100);
    }

    #[test]
    fn negative_damage_heals_but_stays_capped() {
        let mut v = Vitals::new("Hero", 100);
        take_damage(&mut v, 40);
        take_damage(&mut v, -10);
        assert_eq!(v.health(), 70);
        take_damage(&mut v, -500);
        assert_eq!(v.health(), 100);
    }

    #[test]
    fn health_invariant_holds_over_mixed_sequences() {
        let mut v = Vitals::new("Hero", 100);
        let steps = [37, -12, 250, 8, -3, 99, 0, 61, -400, 17, 100, 5];
        for (i, amt) in steps.iter().enumerate() {
            if i % 2 == 0 {
                take_damage(&mut v, *amt);
            } else {
                heal(&mut v, *amt);
            }
            assert!(
                (0..=100).contains(&v.health()),
                "step {} left health at {}",
                i,
                v.health()
            );
        }
    }

    #[test]
    fn record_kill_bumps_score_and_counter() {
        let mut p = Player::new("Hero", None);
        p.record_kill(35);
        p.record_kill(10);
        assert_eq!(p.score, 45);
        assert_eq!(p.enemies_defeated, 2);
    }

    #[test]
    fn equip_returns_previous_weapon() {
        let broom = Weapon::new("Broom", 3, 8, None).unwrap();
        let pan = Weapon::new("Pan", 20, 30, None).unwrap();
        let mut p = Player::new("Hero", Some(broom.clone()));
        assert_eq!(p.equip(pan.clone()), Some(broom));
        assert_eq!(p.weapon, Some(pan));
    }
}

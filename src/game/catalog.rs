//! Content catalogs and the factories that draw from them.
//!
//! Enemies and weapons are picked uniformly over their list; the lists are
//! validated once when the [`Catalog`] is built and never change afterwards.
//! The healing-item and special-event tables are plain flavor content.

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::character::{Enemy, Vitals};
use super::errors::CatalogError;
use super::weapon::Weapon;

/// Raw enemy row: name, health, weapon name, min dmg, max dmg, experience.
type EnemyRow = (&'static str, i32, &'static str, i32, i32, u32);

const ENEMY_ROWS: [EnemyRow; 10] = [
    ("Hangry Taxi Driver", 30, "Meter of Rage", 5, 10, 10),
    ("Office Drone", 25, "Stapler of Vengeance", 8, 12, 15),
    ("Sleepy Barista", 40, "Scalding Milk", 10, 16, 20),
    ("Internet Troll", 20, "Venomous Comment", 15, 25, 30),
    ("Bus Chaser", 35, "Briefcase of Chaos", 12, 18, 25),
    ("Couch-Conquering Cat", 50, "Purr of Destruction", 8, 15, 35),
    ("Neighbor with a Hammer Drill", 45, "Drill of Insomnia", 18, 28, 40),
    ("Pushy Salesman", 30, "Relentless Advertising", 5, 20, 20),
    ("Minimalist Goblin", 25, "The Void", 1, 50, 45),
    ("Entitled Duck", 15, "Deafening Quack", 10, 30, 50),
];

const WEAPON_ROWS: [(&str, i32, i32, &str); 10] = [
    ("Homing Banana", 12, 22, "A ripe banana that never misses"),
    ("Leek Bow", 8, 18, "Fires tear-gas arrows"),
    ("Staff of Sneezing", 15, 25, "Makes enemies sneeze until they pass out"),
    ("Ancestral Frying Pan", 20, 30, "Heats up at the worst possible moment"),
    ("Sock of Doom", 25, 35, "Smells so bad that enemies drop dead"),
    ("Rubber Chicken", 10, 15, "Squeaks on impact, confusing the opponent"),
    ("Bucket of Truth", 18, 28, "Makes enemies confess all their sins"),
    ("Laser Fart", 30, 40, "Silent but deadly"),
    ("Slipper of the Gods", 22, 32, "Flies with maternal velocity"),
    ("Cat Launcher", 5, 50, "Unpredictable: sometimes scratches, sometimes naps"),
];

/// Weapon every new player starts with.
pub const STARTER_WEAPON: (&str, i32, i32, &str) = (
    "Grandma's Broom",
    3,
    8,
    "Hits hard, but mostly raises dust",
);

pub const HEALING_ITEMS: [&str; 10] = [
    "a sausage sandwich from the last century",
    "a jar of pickles",
    "a cup of coffee from your boss",
    "a pill against greed",
    "a glass of childhood fruit punch",
    "a pie with a mystery filling",
    "an energy drink of dubious quality",
    "grandma's jam",
    "a forgotten chocolate bar in your pocket",
    "a soup that ate itself",
];

pub const SPECIAL_EVENTS: [&str; 10] = [
    "You meet a dancing bear. It teaches you some new moves (+5 morale).",
    "A coconut falls on you from a tree. Luckily, it was empty.",
    "You find a treasure map... with a pizzeria ad on the back.",
    "A gnome offers you a deal: your soul for a 10% discount.",
    "It rains frogs. One of them was a princess (you ate her).",
    "A wandering bard sings you a song so bad that nearby enemies flee.",
    "You find a forgotten diploma. You are now officially a Hero.",
    "A passing car splashes you with mud. Stylish, though!",
    "You notice your sword is sharpened on one side. That's progress!",
    "A stranger gives you a sock. He says it is a family heirloom.",
];

/// Static enemy entry; each combat instantiates a fresh [`Enemy`] from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyTemplate {
    name: String,
    health: i32,
    weapon: Weapon,
    experience: u32,
}

impl EnemyTemplate {
    pub fn new(
        name: impl Into<String>,
        health: i32,
        weapon: Weapon,
        experience: u32,
    ) -> Result<Self, CatalogError> {
        let template = EnemyTemplate {
            name: name.into(),
            health,
            weapon,
            experience,
        };
        template.check()?;
        Ok(template)
    }

    /// Positive health, some experience and a weapon that can be rolled.
    fn check(&self) -> Result<(), CatalogError> {
        if self.health <= 0 {
            return Err(CatalogError::InvalidHealth {
                name: self.name.clone(),
                health: self.health,
            });
        }
        if self.experience == 0 {
            return Err(CatalogError::NoExperience(self.name.clone()));
        }
        self.weapon.check()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn spawn(&self) -> Enemy {
        Enemy {
            vitals: Vitals::new(self.name.clone(), self.health),
            weapon: self.weapon.clone(),
            experience: self.experience,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    enemies: Vec<EnemyTemplate>,
    weapons: Vec<Weapon>,
}

impl Catalog {
    /// Every template is checked again here, so nothing unvalidated can
    /// reach a factory.
    pub fn new(enemies: Vec<EnemyTemplate>, weapons: Vec<Weapon>) -> Result<Self, CatalogError> {
        if enemies.is_empty() {
            return Err(CatalogError::Empty("enemy"));
        }
        if weapons.is_empty() {
            return Err(CatalogError::Empty("weapon"));
        }
        for enemy in &enemies {
            enemy.check()?;
        }
        for weapon in &weapons {
            weapon.check()?;
        }
        Ok(Catalog { enemies, weapons })
    }

    /// The built-in ten enemies and ten weapons.
    pub fn standard() -> Result<Self, CatalogError> {
        let enemies = ENEMY_ROWS
            .iter()
            .map(|&(name, health, weapon, min, max, xp)| -> Result<_, CatalogError> {
                EnemyTemplate::new(name, health, Weapon::new(weapon, min, max, None)?, xp)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let weapons = WEAPON_ROWS
            .iter()
            .map(|&(name, min, max, desc)| Weapon::new(name, min, max, Some(desc)))
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(enemies, weapons)
    }

    pub fn enemies(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Pick an enemy template uniformly and spawn it at full health.
    pub fn create_random_enemy(&self, rng: &mut StdRng) -> Enemy {
        let i = rng.gen_range(0..self.enemies.len());
        self.enemies[i].spawn()
    }

    /// Pick a weapon uniformly.
    pub fn random_weapon(&self, rng: &mut StdRng) -> Weapon {
        let i = rng.gen_range(0..self.weapons.len());
        self.weapons[i].clone()
    }
}

pub fn starter_weapon() -> Result<Weapon, CatalogError> {
    let (name, min, max, desc) = STARTER_WEAPON;
    Weapon::new(name, min, max, Some(desc))
}

pub fn choose<'a>(rng: &mut StdRng, opts: &[&'a str]) -> &'a str {
    let i = rng.gen_range(0..opts.len());
    opts[i]
}

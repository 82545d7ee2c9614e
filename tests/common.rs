//! Test utilities shared by the integration tests.

use sillyquest::game::{Catalog, EncounterKind, EnemyTemplate, Session, Turn, Weapon};

/// Catalog with a single enemy and a single weapon, so every combat and
/// every weapon find is known in advance.
pub fn duel_catalog(health: i32, min: i32, max: i32, experience: u32) -> Catalog {
    let claw = Weapon::new("Claw", min, max, None).expect("valid weapon");
    let enemy = EnemyTemplate::new("Sparring Dummy", health, claw.clone(), experience)
        .expect("valid enemy");
    Catalog::new(vec![enemy], vec![claw]).expect("valid catalog")
}

/// First seed whose opening turn is the wanted kind, with the session already
/// advanced into that turn.
#[allow(dead_code)]
pub fn session_opening_with(kind: EncounterKind, catalog: &Catalog) -> (Session, Turn) {
    for seed in 0..10_000u64 {
        let mut s = Session::new("Tester", seed, catalog.clone()).expect("session");
        let turn = s.run_turn().expect("turn");
        let opened = match &turn {
            Turn::Combat(_) => EncounterKind::Combat,
            Turn::WeaponFound(_) => EncounterKind::WeaponFind,
            Turn::Resolved(r) => r.kind,
            Turn::SessionOver(_) => continue,
        };
        if opened == kind {
            return (s, turn);
        }
    }
    panic!("no seed opens with {:?}", kind);
}

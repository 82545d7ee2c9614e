//! Game loop transitions: turns, pauses for decisions, and game over.

mod common;

use common::{duel_catalog, session_opening_with};
use sillyquest::game::autoplay::{play_out, Cautious, Reckless};
use sillyquest::game::{
    Catalog, EncounterKind, Outcome, Phase, Session, SessionError, Turn,
};

#[test]
fn weapon_skip_keeps_weapon_by_value() {
    let catalog = Catalog::standard().unwrap();
    let (mut s, turn) = session_opening_with(EncounterKind::WeaponFind, &catalog);
    let Turn::WeaponFound(offer) = turn else {
        unreachable!()
    };
    let before = s.player().weapon.clone();
    assert_eq!(offer.current, before);
    let res = s.decide_weapon("2").unwrap();
    assert_eq!(
        res.outcome,
        Outcome::Skipped {
            weapon: offer.found.name().to_string()
        }
    );
    assert_eq!(s.player().weapon, before);
}

#[test]
fn healing_resolves_without_input() {
    let catalog = Catalog::standard().unwrap();
    let (s, turn) = session_opening_with(EncounterKind::Healing, &catalog);
    let Turn::Resolved(res) = turn else {
        unreachable!()
    };
    assert!(matches!(res.outcome, Outcome::Healed { .. }));
    // Already at full health on turn one.
    assert_eq!(res.health_delta, 0);
    assert_eq!(s.player().vitals.health(), 100);
}

#[test]
fn decisions_must_come_in_order() {
    let catalog = duel_catalog(30, 5, 10, 10);
    let (mut s, _) = session_opening_with(EncounterKind::Combat, &catalog);
    assert_eq!(s.run_turn().unwrap_err(), SessionError::EncounterPending);
    assert_eq!(s.decide_weapon("1").unwrap_err(), SessionError::NoWeaponOffer);

    let (mut w, _) = session_opening_with(EncounterKind::WeaponFind, &catalog);
    assert_eq!(w.combat_round("1").unwrap_err(), SessionError::NoCombat);
    w.decide_weapon("1").unwrap();
    assert_eq!(w.decide_weapon("1").unwrap_err(), SessionError::NoWeaponOffer);
}

#[test]
fn game_over_is_terminal() {
    let catalog = duel_catalog(10_000, 100, 100, 5);
    let (mut s, _) = session_opening_with(EncounterKind::Combat, &catalog);
    let r = s.combat_round("1").unwrap();
    assert_eq!(r.player_health, 0);
    assert_eq!(s.phase(), Phase::GameOver);

    let turns = s.turns();
    for _ in 0..5 {
        match s.run_turn().unwrap() {
            Turn::SessionOver(summary) => {
                assert_eq!(summary.player, "Tester");
                assert_eq!(summary.turns, turns);
            }
            other => panic!("expected game over, got {:?}", other),
        }
    }
    assert_eq!(s.history().len(), 1);
}

#[test]
fn sessions_are_independent_and_reproducible() {
    let catalog = Catalog::standard().unwrap();
    let mut a = Session::new("A", 1234, catalog.clone()).unwrap();
    let mut b = Session::new("B", 1234, catalog.clone()).unwrap();
    let ra = play_out(&mut a, &mut Reckless, 10_000).unwrap();
    let rb = play_out(&mut b, &mut Reckless, 10_000).unwrap();
    assert_eq!(a.history(), b.history());
    assert_eq!(ra.summary.score, rb.summary.score);
    assert_eq!(ra.summary.turns, rb.summary.turns);

    let fresh = Session::new("A", 1234, catalog).unwrap();
    assert_eq!(fresh.player().vitals.health(), 100);
    assert_eq!(fresh.turns(), 0);
}

#[test]
fn score_matches_recorded_victories() {
    let catalog = Catalog::standard().unwrap();
    for seed in 0..20u64 {
        let mut s = Session::new("Bot", seed, catalog.clone()).unwrap();
        let report = play_out(&mut s, &mut Cautious, 5_000).unwrap();
        let (score, wins) = s.history().iter().fold((0u32, 0u32), |(sc, w), r| {
            match r.outcome {
                Outcome::PlayerWon { experience, .. } => (sc + experience, w + 1),
                _ => (sc, w),
            }
        });
        assert_eq!(report.summary.score, score);
        assert_eq!(report.summary.enemies_defeated, wins);
        for r in s.history() {
            assert!(r.score_delta == 0 || matches!(r.outcome, Outcome::PlayerWon { .. }));
        }
    }
}

#[test]
fn health_stays_in_bounds_over_whole_runs() {
    let catalog = Catalog::standard().unwrap();
    for seed in 100..120u64 {
        let mut s = Session::new("Bot", seed, catalog.clone()).unwrap();
        while let Ok(turn) = s.run_turn() {
            match turn {
                Turn::SessionOver(_) => break,
                Turn::Combat(_) => loop {
                    let r = s.combat_round("1").unwrap();
                    assert!((0..=100).contains(&r.player_health));
                    assert!(r.enemy_health >= 0);
                    if r.result.is_some() {
                        break;
                    }
                },
                Turn::WeaponFound(_) => {
                    s.decide_weapon("1").unwrap();
                }
                Turn::Resolved(_) => {}
            }
            let h = s.player().vitals.health();
            assert!((0..=100).contains(&h), "health {} out of bounds", h);
        }
    }
}

//! Combat rules exercised through the public session API.

mod common;

use common::{duel_catalog, session_opening_with};
use sillyquest::game::{CombatStatus, EncounterKind, Outcome, RoundAction, Session, Turn};

#[test]
fn repeated_attack_always_ends_in_win_or_loss() {
    // Hero: 100 HP, broom 3-8. Enemy: 30 HP, claw 5-10.
    let catalog = duel_catalog(30, 5, 10, 10);
    let mut finished = 0;
    for seed in 0..300u64 {
        let mut s = Session::new("Hero", seed, catalog.clone()).unwrap();
        if !matches!(s.run_turn().unwrap(), Turn::Combat(_)) {
            continue;
        }
        let mut rounds = 0;
        let round = loop {
            let r = s.combat_round("1").unwrap();
            rounds += 1;
            assert!(rounds <= 10, "30 HP at >= 3 per hit must fall within 10 rounds");
            if r.result.is_some() {
                break r;
            }
        };
        match round.status {
            CombatStatus::PlayerWon => assert_eq!(round.enemy_health, 0),
            CombatStatus::PlayerLost => assert_eq!(round.player_health, 0),
            other => panic!("attacking can't end in {:?}", other),
        }
        finished += 1;
    }
    assert!(finished > 30, "too few combats sampled: {}", finished);
}

#[test]
fn win_awards_exactly_the_enemy_experience() {
    let catalog = duel_catalog(6, 1, 2, 35);
    let (mut s, _) = session_opening_with(EncounterKind::Combat, &catalog);
    let (score, defeated) = (s.player().score, s.player().enemies_defeated);
    let res = loop {
        let r = s.combat_round("attack").unwrap();
        if let Some(res) = r.result {
            break res;
        }
    };
    assert_eq!(
        res.outcome,
        Outcome::PlayerWon {
            enemy: "Sparring Dummy".into(),
            experience: 35
        }
    );
    assert_eq!(s.player().score, score + 35);
    assert_eq!(s.player().enemies_defeated, defeated + 1);
    assert_eq!(res.score_delta, 35);
}

#[test]
fn successful_flee_costs_nothing() {
    let catalog = duel_catalog(30, 5, 10, 10);
    let mut checked = 0;
    for seed in 0..500u64 {
        let mut s = Session::new("Runner", seed, catalog.clone()).unwrap();
        if !matches!(s.run_turn().unwrap(), Turn::Combat(_)) {
            continue;
        }
        let r = s.combat_round("2").unwrap();
        if r.action != RoundAction::FleeSucceeded {
            continue;
        }
        assert_eq!(r.status, CombatStatus::PlayerFled);
        assert_eq!(r.player_health, 100);
        assert_eq!(r.enemy_health, 30);
        assert_eq!(s.player().score, 0);
        assert_eq!(s.player().enemies_defeated, 0);
        assert!(s.current_enemy().is_none(), "fled combat must be closed");
        checked += 1;
    }
    assert!(checked > 10, "too few successful flees sampled: {}", checked);
}

#[test]
fn flee_succeeds_about_half_the_time() {
    let catalog = duel_catalog(30, 1, 1, 10);
    let (mut ok, mut failed) = (0, 0);
    for seed in 0..2_000u64 {
        let mut s = Session::new("Runner", seed, catalog.clone()).unwrap();
        if !matches!(s.run_turn().unwrap(), Turn::Combat(_)) {
            continue;
        }
        match s.combat_round("flee").unwrap().action {
            RoundAction::FleeSucceeded => ok += 1,
            RoundAction::FleeFailed { taken } => {
                assert_eq!(taken, 1);
                failed += 1;
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    let rate = ok as f64 / (ok + failed) as f64;
    assert!((0.4..0.6).contains(&rate), "flee rate {}", rate);
}

#[test]
fn losing_changes_no_score() {
    let catalog = duel_catalog(10_000, 40, 40, 99);
    let (mut s, _) = session_opening_with(EncounterKind::Combat, &catalog);
    let res = loop {
        let r = s.combat_round("1").unwrap();
        if let Some(res) = r.result {
            break res;
        }
    };
    assert!(matches!(res.outcome, Outcome::PlayerLost { .. }));
    assert_eq!(res.score_delta, 0);
    assert_eq!(s.player().score, 0);
    assert_eq!(s.player().enemies_defeated, 0);
    assert!(s.is_over());
}

#[test]
fn garbage_input_is_rejected_without_side_effects() {
    let catalog = duel_catalog(30, 5, 10, 10);
    let (mut s, _) = session_opening_with(EncounterKind::Combat, &catalog);
    let mut twin = s.clone();
    for junk in ["", "3", "attack!", "fight", "  "] {
        let r = s.combat_round(junk).unwrap();
        assert_eq!(r.action, RoundAction::Rejected);
        assert_eq!((r.player_health, r.enemy_health), (100, 30));
    }
    // Rejections drew nothing, so the next real round matches an untouched twin.
    assert_eq!(s.combat_round("1").unwrap(), twin.combat_round("1").unwrap());
}

mod common;

use common::{level_snapshot, repeated};
use golf_wagers::engine::nassau;
use golf_wagers::model::{NassauConfig, ScoreSnapshot};

fn config() -> NassauConfig {
    NassauConfig {
        front_nine_amount: 10.0,
        back_nine_amount: 10.0,
        total_amount: 20.0,
        auto_press: false,
        press_after_down: 2,
        max_presses: 2,
    }
}

#[test]
fn test2_front_nine_leader_and_margin() {
    // spec scenario: A=[4,3,5,4,4] vs B=[5,4,5,5,4]
    let snapshot = level_snapshot(&[("alice", &[4, 3, 5, 4, 4]), ("bob", &[5, 4, 5, 5, 4])]);
    let state = nassau::calculate_state(&snapshot, &config(), 18);

    let front = state.front_nine.expect("front nine state");
    assert_eq!(front.leader.as_deref(), Some("alice"));
    assert_eq!(front.margin, 3);
    assert_eq!(front.scores["alice"], 20);
    assert_eq!(front.scores["bob"], 23);
}

#[test]
fn test2_tied_segment_has_no_leader() {
    let snapshot = level_snapshot(&[("alice", &[4, 4]), ("bob", &[4, 4])]);
    let state = nassau::calculate_state(&snapshot, &config(), 18);

    let front = state.front_nine.expect("front nine state");
    assert!(front.leader.is_none());
    assert_eq!(front.margin, 0);

    let output = nassau::calculate_results(&snapshot, &config(), 18);
    assert!(output.transactions.is_empty());
}

#[test]
fn test2_fewer_than_two_players_is_empty() {
    let snapshot = level_snapshot(&[("alice", &[4, 4, 4])]);
    let state = nassau::calculate_state(&snapshot, &config(), 18);
    assert!(state.front_nine.is_none());
    assert!(state.overall.is_none());
    assert!(state.presses.is_empty());

    let output = nassau::calculate_results(&snapshot, &config(), 18);
    assert!(output.transactions.is_empty());

    let empty = ScoreSnapshot::new();
    assert!(nassau::calculate_results(&empty, &config(), 18)
        .transactions
        .is_empty());
}

#[test]
fn test2_split_round_settles_front_and_back() {
    // alice takes the front by 9, bob takes the back by 9, total pushes
    let mut alice = repeated(4, 9);
    alice.extend(repeated(5, 9));
    let mut bob = repeated(5, 9);
    bob.extend(repeated(4, 9));
    let snapshot = level_snapshot(&[("alice", &alice), ("bob", &bob)]);

    let output = nassau::calculate_results(&snapshot, &config(), 18);
    assert_eq!(output.transactions.len(), 2);

    let front = &output.transactions[0];
    assert_eq!(front.winner_id, "alice");
    assert_eq!(front.loser_id, "bob");
    assert_eq!(front.amount, 10.0);
    assert_eq!(front.segment, "front_nine");

    let back = &output.transactions[1];
    assert_eq!(back.winner_id, "bob");
    assert_eq!(back.segment, "back_nine");
}

#[test]
fn test2_nine_hole_round_has_no_back_segment() {
    let snapshot = level_snapshot(&[("alice", &repeated(4, 9)), ("bob", &repeated(5, 9))]);
    let state = nassau::calculate_state(&snapshot, &config(), 9);
    assert!(state.back_nine.is_none());

    let output = nassau::calculate_results(&snapshot, &config(), 9);
    // front and total only
    assert_eq!(output.transactions.len(), 2);
    assert!(output.transactions.iter().all(|t| t.segment != "back_nine"));
}

#[test]
fn test2_unplayed_back_nine_pushes() {
    // only front-nine holes recorded: the back segment is 0-0 for both
    let snapshot = level_snapshot(&[("alice", &repeated(4, 9)), ("bob", &repeated(5, 9))]);
    let output = nassau::calculate_results(&snapshot, &config(), 18);
    assert!(output.transactions.iter().all(|t| t.segment != "back_nine"));
}

#[test]
fn test2_auto_press_per_trailing_player() {
    let press_config = NassauConfig {
        auto_press: true,
        ..config()
    };
    let snapshot = level_snapshot(&[
        ("alice", &[4, 4, 4]),
        ("bob", &[5, 5, 5]),
        ("carol", &[5, 5, 5]),
    ]);

    let state = nassau::calculate_state(&snapshot, &press_config, 18);
    assert_eq!(state.presses.len(), 2);
    assert_eq!(state.presses[0].id, "press_front_1");
    assert_eq!(state.presses[0].initiated_by, "bob");
    assert_eq!(state.presses[0].start_hole, 3);
    assert_eq!(state.presses[0].leader.as_deref(), Some("alice"));
    assert_eq!(state.presses[1].initiated_by, "carol");
}

#[test]
fn test2_auto_press_capped_by_max_presses() {
    let press_config = NassauConfig {
        auto_press: true,
        max_presses: 1,
        ..config()
    };
    let snapshot = level_snapshot(&[
        ("alice", &[4, 4, 4]),
        ("bob", &[5, 5, 5]),
        ("carol", &[5, 5, 5]),
    ]);

    let state = nassau::calculate_state(&snapshot, &press_config, 18);
    assert_eq!(state.presses.len(), 1);
}

#[test]
fn test2_no_press_when_margin_too_small() {
    let press_config = NassauConfig {
        auto_press: true,
        press_after_down: 4,
        ..config()
    };
    let snapshot = level_snapshot(&[("alice", &[4, 4, 4]), ("bob", &[5, 5, 5])]);
    let state = nassau::calculate_state(&snapshot, &press_config, 18);
    assert!(state.presses.is_empty());
}

#[test]
fn test2_no_press_past_the_front_nine() {
    let press_config = NassauConfig {
        auto_press: true,
        ..config()
    };
    let snapshot = level_snapshot(&[("alice", &repeated(4, 10)), ("bob", &repeated(5, 10))]);
    let state = nassau::calculate_state(&snapshot, &press_config, 18);
    assert!(state.presses.is_empty());
}

#[test]
fn test2_results_are_idempotent() {
    let snapshot = level_snapshot(&[("alice", &repeated(4, 18)), ("bob", &repeated(5, 18))]);
    let first = nassau::calculate_results(&snapshot, &config(), 18);
    let second = nassau::calculate_results(&snapshot, &config(), 18);
    assert_eq!(first.transactions, second.transactions);
}

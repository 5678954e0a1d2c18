#![allow(dead_code)]

use golf_wagers::model::{HoleScore, ScoreSnapshot};

/// Snapshot builder for scratch play: hole numbers run 1.. in order and net
/// equals gross (no handicap strokes).
#[must_use]
pub fn level_snapshot(players: &[(&str, &[i32])]) -> ScoreSnapshot {
    let mut snapshot = ScoreSnapshot::new();
    for (player_id, strokes) in players {
        let holes = strokes
            .iter()
            .enumerate()
            .map(|(i, &gross)| HoleScore {
                hole: i as u32 + 1,
                gross,
                net: gross,
            })
            .collect();
        snapshot.insert(*player_id, holes);
    }
    snapshot
}

#[must_use]
pub fn repeated(stroke: i32, count: usize) -> Vec<i32> {
    vec![stroke; count]
}

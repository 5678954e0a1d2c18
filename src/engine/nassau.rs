use crate::model::{NassauConfig, ScoreSnapshot, Transaction, round_cents};
use serde::Serialize;
use std::collections::BTreeMap;

use super::EngineOutput;

/// Per-segment live view: the best player across the whole field, the gap to
/// the second-best, and every player's segment total. `leader` is `None` when
/// the two best totals tie.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentState {
    pub leader: Option<String>,
    pub margin: i32,
    pub scores: BTreeMap<String, i32>,
}

/// An auto-press synthesized from the live state. Presses are never persisted
/// by the engine; permanent press records are the caller's job.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PressInfo {
    pub id: String,
    pub start_hole: u32,
    pub initiated_by: String,
    pub segment: String,
    pub leader: Option<String>,
    pub margin: i32,
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct NassauState {
    pub front_nine: Option<SegmentState>,
    pub back_nine: Option<SegmentState>,
    pub overall: Option<SegmentState>,
    pub presses: Vec<PressInfo>,
}

#[must_use]
pub fn calculate_state(
    scores: &ScoreSnapshot,
    config: &NassauConfig,
    total_holes: u32,
) -> NassauState {
    if scores.player_count() < 2 {
        return NassauState::default();
    }

    let front_nine = segment_state(scores, 1, 9);
    let back_nine = if total_holes == 18 {
        Some(segment_state(scores, 10, 18))
    } else {
        None
    };
    let overall = segment_state(scores, 1, total_holes);

    let mut presses: Vec<PressInfo> = Vec::new();
    if config.auto_press {
        let completed = scores.completed_holes();
        for player in scores.players() {
            let Some(leader) = front_nine.leader.as_deref() else {
                break;
            };
            if leader == player.player_id || front_nine.margin < config.press_after_down {
                continue;
            }
            let front_count = presses.iter().filter(|p| p.segment == "front").count();
            if front_count < config.max_presses && completed <= 9 {
                presses.push(PressInfo {
                    id: format!("press_front_{}", presses.len() + 1),
                    start_hole: completed,
                    initiated_by: player.player_id.clone(),
                    segment: "front".to_string(),
                    leader: front_nine.leader.clone(),
                    margin: front_nine.margin,
                });
            }
        }
    }

    NassauState {
        front_nine: Some(front_nine),
        back_nine,
        overall: Some(overall),
        presses,
    }
}

#[must_use]
pub fn calculate_results(
    scores: &ScoreSnapshot,
    config: &NassauConfig,
    total_holes: u32,
) -> EngineOutput {
    let state = calculate_state(scores, config, total_holes);
    let player_ids = scores.player_ids();
    let mut transactions = Vec::new();

    if player_ids.len() < 2 {
        return EngineOutput {
            transactions,
            final_state: super::WagerState::Nassau(state),
        };
    }

    for i in 0..player_ids.len() {
        for j in (i + 1)..player_ids.len() {
            let player_a = player_ids[i];
            let player_b = player_ids[j];

            push_segment_result(
                &mut transactions,
                scores,
                player_a,
                player_b,
                1,
                9,
                config.front_nine_amount,
                "front nine",
                "front_nine",
            );

            // back nine only exists on full rounds
            if total_holes == 18 {
                push_segment_result(
                    &mut transactions,
                    scores,
                    player_a,
                    player_b,
                    10,
                    18,
                    config.back_nine_amount,
                    "back nine",
                    "back_nine",
                );
            }

            push_segment_result(
                &mut transactions,
                scores,
                player_a,
                player_b,
                1,
                total_holes,
                config.total_amount,
                "total",
                "total",
            );
        }
    }

    EngineOutput {
        transactions,
        final_state: super::WagerState::Nassau(state),
    }
}

fn segment_state(scores: &ScoreSnapshot, start_hole: u32, end_hole: u32) -> SegmentState {
    let mut segment_scores: BTreeMap<String, i32> = BTreeMap::new();
    for player in scores.players() {
        let total = segment_total(scores, &player.player_id, start_hole, end_hole);
        segment_scores.insert(player.player_id.clone(), total);
    }

    let mut leader: Option<String> = None;
    let mut best = i32::MAX;
    let mut second_best = i32::MAX;

    // field-wide best vs second best, preserving snapshot player order
    for player in scores.players() {
        let total = segment_scores[&player.player_id];
        if total < best {
            second_best = best;
            best = total;
            leader = Some(player.player_id.clone());
        } else if total < second_best {
            second_best = total;
        }
    }

    let margin = if second_best == i32::MAX {
        0
    } else {
        second_best - best
    };
    if margin == 0 {
        leader = None;
    }

    SegmentState {
        leader,
        margin,
        scores: segment_scores,
    }
}

fn segment_total(scores: &ScoreSnapshot, player_id: &str, start_hole: u32, end_hole: u32) -> i32 {
    scores
        .get(player_id)
        .unwrap_or(&[])
        .iter()
        .filter(|s| s.hole >= start_hole && s.hole <= end_hole)
        .map(|s| s.net)
        .sum()
}

#[allow(clippy::too_many_arguments)]
fn push_segment_result(
    transactions: &mut Vec<Transaction>,
    scores: &ScoreSnapshot,
    player_a: &str,
    player_b: &str,
    start_hole: u32,
    end_hole: u32,
    amount: f64,
    label: &str,
    segment: &str,
) {
    let a_total = segment_total(scores, player_a, start_hole, end_hole);
    let b_total = segment_total(scores, player_b, start_hole, end_hole);

    let (winner, loser, margin) = if a_total < b_total {
        (player_a, player_b, b_total - a_total)
    } else if b_total < a_total {
        (player_b, player_a, a_total - b_total)
    } else {
        // equal segment totals push
        return;
    };

    transactions.push(Transaction {
        winner_id: winner.to_string(),
        loser_id: loser.to_string(),
        amount: round_cents(amount),
        description: format!("nassau {label}: won by {margin} strokes"),
        segment: segment.to_string(),
    });
}

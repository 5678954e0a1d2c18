use crate::model::{ScoreSnapshot, SkinsConfig, Transaction, round_cents};
use serde::Serialize;

use super::EngineOutput;

/// Outcome of one settled hole. A hole with no outright low net has
/// `winner_id = None`; `carried` marks a win that absorbed a carry-over.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SkinOutcome {
    pub hole: u32,
    pub winner_id: Option<String>,
    pub value: f64,
    pub carried: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct SkinsState {
    pub skins: Vec<SkinOutcome>,
    pub carry_over_value: f64,
    pub pending_holes: u32,
    pub total_pot: f64,
}

#[must_use]
pub fn calculate_state(
    scores: &ScoreSnapshot,
    config: &SkinsConfig,
    total_holes: u32,
) -> SkinsState {
    let completed = scores.completed_holes();

    // explicit fold over the settled holes, carrying the unresolved pot
    let mut skins: Vec<SkinOutcome> = Vec::new();
    let mut carry = 0.0;
    for hole in 1..=completed {
        let entries = hole_entries(scores, hole);
        if entries.len() < 2 {
            continue;
        }
        let (outcome, next_carry) = resolve_hole(hole, entries, config, carry);
        skins.push(outcome);
        carry = next_carry;
    }

    let pending_holes = total_holes.saturating_sub(completed);
    let awarded: f64 = skins
        .iter()
        .filter(|s| s.winner_id.is_some())
        .map(|s| s.value)
        .sum();
    // projection of future base value, not a guarantee
    let total_pot = awarded + carry + f64::from(pending_holes) * config.skin_value;

    SkinsState {
        skins,
        carry_over_value: carry,
        pending_holes,
        total_pot,
    }
}

#[must_use]
pub fn calculate_results(
    scores: &ScoreSnapshot,
    config: &SkinsConfig,
    total_holes: u32,
) -> EngineOutput {
    let state = calculate_state(scores, config, total_holes);
    let player_ids = scores.player_ids();
    let mut transactions = Vec::new();

    if player_ids.len() >= 2 {
        for skin in &state.skins {
            let Some(winner_id) = skin.winner_id.as_deref() else {
                continue;
            };

            let per_player = skin.value / (player_ids.len() - 1) as f64;
            let suffix = if skin.carried { " (carry-over)" } else { "" };
            for loser_id in &player_ids {
                if *loser_id == winner_id {
                    continue;
                }
                transactions.push(Transaction {
                    winner_id: winner_id.to_string(),
                    loser_id: (*loser_id).to_string(),
                    amount: round_cents(per_player),
                    description: format!("skin hole {}{suffix}", skin.hole),
                    segment: format!("skin_{}", skin.hole),
                });
            }
        }
    }

    // carry-over left after the last hole pushes: neither distributed
    // nor voided, only reported in the final state

    EngineOutput {
        transactions,
        final_state: super::WagerState::Skins(state),
    }
}

fn hole_entries(scores: &ScoreSnapshot, hole: u32) -> Vec<(String, i32)> {
    scores
        .players()
        .iter()
        .filter_map(|p| {
            scores
                .net_for_hole(&p.player_id, hole)
                .map(|net| (p.player_id.clone(), net))
        })
        .collect()
}

/// Transition function for one hole: takes the players with a recorded score
/// (at least two) and the unresolved carry, returns the hole's outcome and
/// the carry passed to the next hole.
pub(crate) fn resolve_hole(
    hole: u32,
    mut entries: Vec<(String, i32)>,
    config: &SkinsConfig,
    carry: f64,
) -> (SkinOutcome, f64) {
    entries.sort_by_key(|(_, net)| *net);

    if entries[0].1 < entries[1].1 {
        let outcome = SkinOutcome {
            hole,
            winner_id: Some(entries[0].0.clone()),
            value: config.skin_value + carry,
            carried: carry > 0.0,
        };
        (outcome, 0.0)
    } else {
        let outcome = SkinOutcome {
            hole,
            winner_id: None,
            value: config.skin_value,
            carried: false,
        };
        let next_carry = if config.carry_over {
            carry + config.skin_value
        } else {
            0.0
        };
        (outcome, next_carry)
    }
}

//! Wager engines: each turns a read-only score snapshot plus a typed wager
//! configuration into a live state view and, at round completion, a list of
//! winner/loser transactions. Every computation is pure and idempotent;
//! repeated calls over the same snapshot yield identical output.

pub mod match_play;
pub mod nassau;
pub mod skins;

use crate::model::{ScoreSnapshot, Transaction, WagerConfig};
use serde::Serialize;

pub use match_play::{MatchPlayState, MatchView};
pub use nassau::{NassauState, PressInfo, SegmentState};
pub use skins::{SkinOutcome, SkinsState};

/// Live projection for one wager, safe to compute at any point in the round,
/// including before any hole has been played. Serializes to the per-variant
/// field map broadcast to viewers.
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum WagerState {
    Nassau(NassauState),
    Skins(SkinsState),
    MatchPlay(MatchPlayState),
}

/// Terminal output of a wager: the transactions to persist plus the state the
/// wager finished in.
#[derive(Serialize, Clone, Debug)]
pub struct EngineOutput {
    pub transactions: Vec<Transaction>,
    pub final_state: WagerState,
}

#[must_use]
pub fn calculate_state(
    scores: &ScoreSnapshot,
    config: &WagerConfig,
    total_holes: u32,
) -> WagerState {
    match config {
        WagerConfig::Nassau(cfg) => {
            WagerState::Nassau(nassau::calculate_state(scores, cfg, total_holes))
        }
        WagerConfig::Skins(cfg) => {
            WagerState::Skins(skins::calculate_state(scores, cfg, total_holes))
        }
        WagerConfig::MatchPlay(cfg) => {
            WagerState::MatchPlay(match_play::calculate_state(scores, cfg, total_holes))
        }
    }
}

#[must_use]
pub fn calculate_results(
    scores: &ScoreSnapshot,
    config: &WagerConfig,
    total_holes: u32,
) -> EngineOutput {
    match config {
        WagerConfig::Nassau(cfg) => nassau::calculate_results(scores, cfg, total_holes),
        WagerConfig::Skins(cfg) => skins::calculate_results(scores, cfg, total_holes),
        WagerConfig::MatchPlay(cfg) => match_play::calculate_results(scores, cfg, total_holes),
    }
}

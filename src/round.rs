//! Orchestration: assemble the score snapshot from the external store, route
//! each wager to its engine, and reduce a finished round to minimal
//! settlement transfers. Hard errors (missing round or wager, unknown wager
//! kind) live here, never inside the engines.

use crate::engine::{self, EngineOutput, WagerState};
use crate::error::CoreError;
use crate::handicap;
use crate::model::{
    CourseHole, Debt, HoleScore, ScoreSnapshot, WagerConfig, WagerKind,
};
use crate::settlement::simplify_debts;
use crate::storage::{RawScore, RoundDetails, RoundStore, WagerRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A permanent press record, created on explicit activation. The engine only
/// synthesizes transient auto-press views; this is the durable counterpart
/// the caller persists.
#[derive(Serialize, Clone, Debug)]
pub struct PressRecord {
    pub wager_id: i64,
    pub start_hole: u32,
    pub initiated_by: String,
    pub amount: f64,
    pub pressed_at: DateTime<Utc>,
}

/// Build the per-player snapshot the engines consume, applying handicap
/// strokes per hole. A score on a hole the course description does not know
/// keeps its gross as net, matching the store's own fallback.
#[must_use]
pub fn build_snapshot(
    details: &RoundDetails,
    holes: &[CourseHole],
    raw: &[RawScore],
) -> ScoreSnapshot {
    let total_holes = holes.len() as u32;
    let mut snapshot = ScoreSnapshot::new();

    for player in &details.players {
        let hole_scores: Vec<HoleScore> = raw
            .iter()
            .filter(|s| s.player_id == player.player_id)
            .map(|s| {
                let net = holes
                    .iter()
                    .find(|h| h.number == s.hole)
                    .map_or(s.gross, |h| {
                        handicap::net_score(
                            s.gross,
                            h.handicap_index,
                            player.course_handicap,
                            total_holes,
                        )
                    });
                HoleScore {
                    hole: s.hole,
                    gross: s.gross,
                    net,
                }
            })
            .collect();
        snapshot.insert(player.player_id.clone(), hole_scores);
    }

    snapshot
}

/// Live state for one wager of a round.
///
/// # Errors
/// Returns an error when the round or wager is missing, the wager kind is
/// unknown, or the configuration payload does not decode.
pub async fn wager_state(
    store: &dyn RoundStore,
    round_id: i64,
    wager_id: i64,
) -> Result<WagerState, CoreError> {
    let (config, snapshot, total_holes) = load_wager(store, round_id, wager_id).await?;
    Ok(engine::calculate_state(&snapshot, &config, total_holes))
}

/// Terminal results for one wager of a round. Safe to call repeatedly; the
/// caller owns at-most-once persistence of the returned transactions.
///
/// # Errors
/// Same failure modes as [`wager_state`].
pub async fn wager_results(
    store: &dyn RoundStore,
    round_id: i64,
    wager_id: i64,
) -> Result<EngineOutput, CoreError> {
    let (config, snapshot, total_holes) = load_wager(store, round_id, wager_id).await?;
    Ok(engine::calculate_results(&snapshot, &config, total_holes))
}

/// Run every wager of a round to completion, flatten the transactions into
/// debts, and net them down to the minimal transfer set.
///
/// # Errors
/// Returns an error when the round is missing or any wager fails to decode.
pub async fn settle_round(store: &dyn RoundStore, round_id: i64) -> Result<Vec<Debt>, CoreError> {
    let details = round(store, round_id).await?;
    let holes = store.course_holes(round_id).await?;
    let raw = store.raw_scores(round_id).await?;
    let snapshot = build_snapshot(&details, &holes, &raw);

    let mut debts: Vec<Debt> = Vec::new();
    for record in store.wagers_for_round(round_id).await? {
        let config = decode_config(&record)?;
        let output = engine::calculate_results(&snapshot, &config, details.total_holes);
        debts.extend(output.transactions.iter().map(Debt::from));
    }

    Ok(simplify_debts(&debts))
}

/// Explicitly activate a press on a Nassau wager. Presses piggyback on the
/// front-nine stake.
///
/// # Errors
/// Returns an error when the wager is missing or is not a Nassau wager.
pub async fn activate_press(
    store: &dyn RoundStore,
    round_id: i64,
    wager_id: i64,
    player_id: &str,
    start_hole: u32,
) -> Result<PressRecord, CoreError> {
    let record = wager_record(store, round_id, wager_id).await?;
    let kind: WagerKind = record.kind.parse()?;
    let WagerConfig::Nassau(config) = WagerConfig::from_value(kind, &record.config)? else {
        return Err(CoreError::Unsupported(
            "press is only available for nassau wagers".to_string(),
        ));
    };

    Ok(PressRecord {
        wager_id,
        start_hole,
        initiated_by: player_id.to_string(),
        amount: config.front_nine_amount,
        pressed_at: Utc::now(),
    })
}

async fn round(store: &dyn RoundStore, round_id: i64) -> Result<RoundDetails, CoreError> {
    store
        .round_details(round_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("round {round_id}")))
}

async fn wager_record(
    store: &dyn RoundStore,
    round_id: i64,
    wager_id: i64,
) -> Result<WagerRecord, CoreError> {
    store
        .wagers_for_round(round_id)
        .await?
        .into_iter()
        .find(|w| w.wager_id == wager_id)
        .ok_or_else(|| CoreError::NotFound(format!("wager {wager_id}")))
}

fn decode_config(record: &WagerRecord) -> Result<WagerConfig, CoreError> {
    let kind: WagerKind = record.kind.parse()?;
    WagerConfig::from_value(kind, &record.config)
}

async fn load_wager(
    store: &dyn RoundStore,
    round_id: i64,
    wager_id: i64,
) -> Result<(WagerConfig, ScoreSnapshot, u32), CoreError> {
    let details = round(store, round_id).await?;
    let record = wager_record(store, round_id, wager_id).await?;
    let config = decode_config(&record)?;

    let holes = store.course_holes(round_id).await?;
    let raw = store.raw_scores(round_id).await?;
    let snapshot = build_snapshot(&details, &holes, &raw);

    Ok((config, snapshot, details.total_holes))
}

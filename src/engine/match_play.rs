use crate::model::{MatchPlayConfig, ScoreSnapshot, TeamAssignment, Transaction, round_cents};
use serde::Serialize;

use super::EngineOutput;

pub const TEAM_A: &str = "team_a";
pub const TEAM_B: &str = "team_b";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HoleOutcome {
    pub hole: u32,
    pub winner: Option<String>,
    pub label: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct MatchView {
    pub leader: Option<String>,
    pub margin: u32,
    pub status: String,
    pub holes_remaining: u32,
    pub hole_results: Vec<HoleOutcome>,
    pub is_match_over: bool,
    pub match_complete: bool,
}

/// Live state for a match. Unsupported configurations degrade to a structured
/// error value so state polling never aborts a broadcast.
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum MatchPlayState {
    Active(MatchView),
    Unsupported { error: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HoleWinner {
    SideA,
    SideB,
    Halved,
}

#[must_use]
pub fn calculate_state(
    scores: &ScoreSnapshot,
    config: &MatchPlayConfig,
    total_holes: u32,
) -> MatchPlayState {
    let completed = scores.completed_holes();

    if config.is_team_match {
        match config.teams.as_ref() {
            Some(teams) => team_state(scores, teams, config.best_ball, total_holes, completed),
            None => MatchPlayState::Unsupported {
                error: "team configuration required".to_string(),
            },
        }
    } else {
        individual_state(scores, total_holes, completed)
    }
}

#[must_use]
pub fn calculate_results(
    scores: &ScoreSnapshot,
    config: &MatchPlayConfig,
    total_holes: u32,
) -> EngineOutput {
    let state = calculate_state(scores, config, total_holes);
    let mut transactions = Vec::new();

    if let MatchPlayState::Active(view) = &state {
        if view.margin > 0 {
            if let Some(leader) = view.leader.as_deref() {
                if config.is_team_match {
                    if let Some(teams) = config.teams.as_ref() {
                        let (winners, losers) = if leader == TEAM_A {
                            (&teams.team_a, &teams.team_b)
                        } else {
                            (&teams.team_b, &teams.team_a)
                        };
                        // every winner collects from every loser
                        for winner_id in winners {
                            for loser_id in losers {
                                transactions.push(Transaction {
                                    winner_id: winner_id.clone(),
                                    loser_id: loser_id.clone(),
                                    amount: round_cents(config.point_value),
                                    description: format!("match play {}", view.status),
                                    segment: "match_play_team".to_string(),
                                });
                            }
                        }
                    }
                } else {
                    let player_ids = scores.player_ids();
                    if let Some(loser_id) = player_ids.iter().copied().find(|id| *id != leader) {
                        transactions.push(Transaction {
                            winner_id: leader.to_string(),
                            loser_id: loser_id.to_string(),
                            amount: round_cents(config.point_value),
                            description: format!("match play {}", view.status),
                            segment: "match_play".to_string(),
                        });
                    }
                }
            }
        }
    }

    EngineOutput {
        transactions,
        final_state: super::WagerState::MatchPlay(state),
    }
}

fn individual_state(scores: &ScoreSnapshot, total_holes: u32, completed: u32) -> MatchPlayState {
    let player_ids = scores.player_ids();
    if player_ids.len() != 2 {
        return MatchPlayState::Unsupported {
            error: "individual match play requires exactly 2 players".to_string(),
        };
    }

    let player_a = player_ids[0];
    let player_b = player_ids[1];

    let mut hole_results = Vec::new();
    let mut up = 0i32;
    for hole in 1..=completed {
        let a_net = scores.net_for_hole(player_a, hole);
        let b_net = scores.net_for_hole(player_b, hole);
        // both sides must have a score before the hole counts
        let (Some(a_net), Some(b_net)) = (a_net, b_net) else {
            continue;
        };

        let winner = judge_hole(Some(a_net), Some(b_net));
        up = advance(up, winner);
        hole_results.push(match winner {
            HoleWinner::SideA => HoleOutcome {
                hole,
                winner: Some(player_a.to_string()),
                label: player_a.to_string(),
            },
            HoleWinner::SideB => HoleOutcome {
                hole,
                winner: Some(player_b.to_string()),
                label: player_b.to_string(),
            },
            HoleWinner::Halved => HoleOutcome {
                hole,
                winner: None,
                label: "halved".to_string(),
            },
        });
    }

    let leader = match up {
        1.. => Some(player_a.to_string()),
        0 => None,
        _ => Some(player_b.to_string()),
    };
    MatchPlayState::Active(derive_view(leader, up, hole_results, total_holes, completed))
}

fn team_state(
    scores: &ScoreSnapshot,
    teams: &TeamAssignment,
    best_ball: bool,
    total_holes: u32,
    completed: u32,
) -> MatchPlayState {
    let mut hole_results = Vec::new();
    let mut up = 0i32;

    for hole in 1..=completed {
        let a_value = team_value(scores, &teams.team_a, hole, best_ball);
        let b_value = team_value(scores, &teams.team_b, hole, best_ball);

        let winner = judge_hole(a_value, b_value);
        up = advance(up, winner);
        hole_results.push(match winner {
            HoleWinner::SideA => HoleOutcome {
                hole,
                winner: Some(TEAM_A.to_string()),
                label: "team A".to_string(),
            },
            HoleWinner::SideB => HoleOutcome {
                hole,
                winner: Some(TEAM_B.to_string()),
                label: "team B".to_string(),
            },
            HoleWinner::Halved => HoleOutcome {
                hole,
                winner: None,
                label: "halved".to_string(),
            },
        });
    }

    let leader = match up {
        1.. => Some(TEAM_A.to_string()),
        0 => None,
        _ => Some(TEAM_B.to_string()),
    };
    MatchPlayState::Active(derive_view(leader, up, hole_results, total_holes, completed))
}

/// A team's comparison value for one hole. Best ball takes the lowest net
/// among members with a score (`None` when nobody has played the hole);
/// combined sums whoever is present, absent members contributing nothing.
fn team_value(
    scores: &ScoreSnapshot,
    members: &[String],
    hole: u32,
    best_ball: bool,
) -> Option<i32> {
    let nets = members
        .iter()
        .filter_map(|player_id| scores.net_for_hole(player_id, hole));
    if best_ball {
        nets.min()
    } else {
        Some(nets.sum())
    }
}

/// Hole transition: compare the two sides' values; a side with no value loses
/// to a side with one, and two absent sides halve the hole.
pub(crate) fn judge_hole(a: Option<i32>, b: Option<i32>) -> HoleWinner {
    match (a, b) {
        (Some(a), Some(b)) => {
            if a < b {
                HoleWinner::SideA
            } else if b < a {
                HoleWinner::SideB
            } else {
                HoleWinner::Halved
            }
        }
        (Some(_), None) => HoleWinner::SideA,
        (None, Some(_)) => HoleWinner::SideB,
        (None, None) => HoleWinner::Halved,
    }
}

pub(crate) fn advance(up: i32, winner: HoleWinner) -> i32 {
    match winner {
        HoleWinner::SideA => up + 1,
        HoleWinner::SideB => up - 1,
        HoleWinner::Halved => up,
    }
}

fn derive_view(
    leader: Option<String>,
    up: i32,
    hole_results: Vec<HoleOutcome>,
    total_holes: u32,
    completed: u32,
) -> MatchView {
    let holes_remaining = total_holes.saturating_sub(completed);
    let margin = up.unsigned_abs();
    let is_match_over = margin > holes_remaining;

    let status = if is_match_over {
        format!("{margin} & {holes_remaining}")
    } else if margin == 0 {
        "All Square".to_string()
    } else {
        format!("{margin} UP")
    };

    MatchView {
        leader,
        margin,
        status,
        holes_remaining,
        hole_results,
        is_match_over,
        match_complete: completed >= total_holes || is_match_over,
    }
}

use serde::{Deserialize, Serialize};

/// A single hole result for one player. `net` is gross strokes minus the
/// handicap strokes allotted for that hole; it is computed once when the
/// snapshot is assembled and never recomputed by the engines.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole: u32,
    pub gross: i32,
    pub net: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerScores {
    pub player_id: String,
    pub holes: Vec<HoleScore>,
}

/// Read-only view of every player's recorded holes for a round. Player order
/// is insertion order, which keeps engine output deterministic. Hole lists may
/// be sparse or out of order; a missing hole means not yet played.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScoreSnapshot {
    players: Vec<PlayerScores>,
}

impl ScoreSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or add) a player's full hole list.
    pub fn insert(&mut self, player_id: impl Into<String>, holes: Vec<HoleScore>) {
        let player_id = player_id.into();
        if let Some(existing) = self
            .players
            .iter_mut()
            .find(|p| p.player_id == player_id)
        {
            existing.holes = holes;
        } else {
            self.players.push(PlayerScores { player_id, holes });
        }
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerScores] {
        &self.players
    }

    #[must_use]
    pub fn player_ids(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.player_id.as_str()).collect()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn get(&self, player_id: &str) -> Option<&[HoleScore]> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| p.holes.as_slice())
    }

    #[must_use]
    pub fn net_for_hole(&self, player_id: &str, hole: u32) -> Option<i32> {
        self.get(player_id)?
            .iter()
            .find(|s| s.hole == hole)
            .map(|s| s.net)
    }

    /// Minimum number of recorded holes across all players; 0 when the
    /// snapshot is empty. This bounds which holes are settled enough to count
    /// consistently for every engine.
    #[must_use]
    pub fn completed_holes(&self) -> u32 {
        self.players
            .iter()
            .map(|p| p.holes.len() as u32)
            .min()
            .unwrap_or(0)
    }
}

/// One atomic wager outcome, persisted by the caller as a permanent
/// bet-result record. Amounts are raw currency units, 2-decimal rounded;
/// locale formatting stays in the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub winner_id: String,
    pub loser_id: String,
    pub amount: f64,
    pub description: String,
    pub segment: String,
}

/// Directed obligation, the intermediate shape fed to debt netting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Debt {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl Debt {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

impl From<&Transaction> for Debt {
    fn from(tx: &Transaction) -> Self {
        Self {
            from: tx.loser_id.clone(),
            to: tx.winner_id.clone(),
            amount: tx.amount,
        }
    }
}

/// Course hole descriptor used when assembling a snapshot: `handicap_index`
/// is the hole's stroke index (1 = hardest), not a player handicap.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct CourseHole {
    pub number: u32,
    pub par: i32,
    pub handicap_index: i32,
}

#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[must_use]
pub fn score_to_par(gross: i32, par: i32) -> i32 {
    gross - par
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_score_to_par(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::QuadrupleBogey,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_score_to_par(value)
    }
}

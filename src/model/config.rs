use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WagerKind {
    Nassau,
    Skins,
    MatchPlay,
}

impl fmt::Display for WagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WagerKind::Nassau => "NASSAU",
            WagerKind::Skins => "SKINS",
            WagerKind::MatchPlay => "MATCH_PLAY",
        };
        write!(f, "{s}")
    }
}

impl FromStr for WagerKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NASSAU" => Ok(Self::Nassau),
            "SKINS" => Ok(Self::Skins),
            "MATCH_PLAY" => Ok(Self::MatchPlay),
            other => Err(CoreError::Unsupported(format!(
                "unknown wager kind: {other}"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NassauConfig {
    pub front_nine_amount: f64,
    pub back_nine_amount: f64,
    pub total_amount: f64,
    #[serde(default)]
    pub auto_press: bool,
    #[serde(default)]
    pub press_after_down: i32,
    #[serde(default)]
    pub max_presses: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinsConfig {
    pub skin_value: f64,
    #[serde(default)]
    pub carry_over: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamAssignment {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchPlayConfig {
    #[serde(default)]
    pub is_team_match: bool,
    #[serde(default)]
    pub teams: Option<TeamAssignment>,
    #[serde(default)]
    pub best_ball: bool,
    pub point_value: f64,
}

/// Validated, statically shaped wager configuration. Constructed exactly once
/// at the orchestration boundary from the externally stored payload; engines
/// never re-interpret untyped key-value data.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum WagerConfig {
    Nassau(NassauConfig),
    Skins(SkinsConfig),
    MatchPlay(MatchPlayConfig),
}

impl WagerConfig {
    /// Decode a raw configuration payload for the given wager kind.
    ///
    /// # Errors
    /// Returns a parse error when the payload does not match the kind's shape.
    pub fn from_value(kind: WagerKind, config: &serde_json::Value) -> Result<Self, CoreError> {
        Ok(match kind {
            WagerKind::Nassau => Self::Nassau(serde_json::from_value(config.clone())?),
            WagerKind::Skins => Self::Skins(serde_json::from_value(config.clone())?),
            WagerKind::MatchPlay => Self::MatchPlay(serde_json::from_value(config.clone())?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> WagerKind {
        match self {
            Self::Nassau(_) => WagerKind::Nassau,
            Self::Skins(_) => WagerKind::Skins,
            Self::MatchPlay(_) => WagerKind::MatchPlay,
        }
    }
}

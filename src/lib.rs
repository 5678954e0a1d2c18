pub mod engine;
pub mod error;
pub mod handicap;
pub mod model;
pub mod round;
pub mod settlement;
pub mod storage;

pub use engine::{EngineOutput, WagerState, calculate_results, calculate_state};
pub use error::CoreError;
pub use model::{Debt, ScoreSnapshot, Transaction, WagerConfig, WagerKind};
pub use settlement::simplify_debts;

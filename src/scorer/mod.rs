pub mod engine;
pub mod measure;
pub mod movements;
pub mod rules;
pub mod types;

pub use self::engine::{calculate_score, score_value, ScoreCard};
pub use self::measure::{Measurements, ResolvedShape};
pub use self::movements::{strategy_for, Movement, MovementStrategy};
pub use self::rules::MovementRules;
pub use self::types::{Breakdown, Category, ScoreResult, MAX_TOTAL_SCORE};

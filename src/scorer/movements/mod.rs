pub mod cubism;
pub mod fallback;
pub mod impressionism;
pub mod minimalism;
pub mod pop_art;
pub mod surrealism;

use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub use self::cubism::Cubism;
pub use self::fallback::Fallback;
pub use self::impressionism::Impressionism;
pub use self::minimalism::Minimalism;
pub use self::pop_art::PopArt;
pub use self::surrealism::Surrealism;

/// A movement's scoring formula. Strategies are stateless and read only the
/// shared measurements and the movement's rules.
pub trait MovementStrategy: Send + Sync {
    fn score(&self, measurements: &Measurements<'_>, rules: &MovementRules, card: &mut ScoreCard);
}

/// Movements with a dedicated scoring strategy.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, AsRefStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Movement {
    Minimalism,
    PopArt,
    Cubism,
    Impressionism,
    Surrealism,
}

impl Movement {
    pub fn strategy(&self) -> &'static dyn MovementStrategy {
        match self {
            Self::Minimalism => &Minimalism,
            Self::PopArt => &PopArt,
            Self::Cubism => &Cubism,
            Self::Impressionism => &Impressionism,
            Self::Surrealism => &Surrealism,
        }
    }
}

pub fn strategy_for(movement_id: &str) -> &'static dyn MovementStrategy {
    match movement_id.parse::<Movement>() {
        Ok(movement) => movement.strategy(),
        Err(_) => &Fallback,
    }
}

/// Formats a rule value the way players typed it: `3`, not `3.0`.
pub(crate) fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Whole percentage, truncated toward zero.
pub(crate) fn display_percent(ratio: f64) -> i64 {
    (ratio * 100.0) as i64
}

use crate::canvas::CanvasDescription;
use crate::error::ArenaResult;
use crate::scorer::measure::Measurements;
use crate::scorer::movements::strategy_for;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::{round_tenth, Breakdown, Category, ScoreResult, MAX_TOTAL_SCORE};
use serde_json::Value;
use tracing::debug;

/// Accumulates category scores, feedback and the bonus while a strategy runs.
#[derive(Debug, Default)]
pub struct ScoreCard {
    subtotal: f64,
    bonus: f64,
    breakdown: Breakdown,
    feedback: Vec<String>,
}

impl ScoreCard {
    /// Records a category score and counts it toward the total.
    pub fn add(&mut self, category: Category, score: f64) {
        self.subtotal += score;
        self.breakdown.insert(category, score);
    }

    /// Records a category score for display only; it does not count toward the total.
    pub fn record(&mut self, category: Category, score: f64) {
        self.breakdown.insert(category, score);
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.feedback.push(message.into());
    }

    /// Sets the bonus unless one was already awarded. Returns the bonus in effect.
    pub fn award_bonus(&mut self, amount: f64) -> f64 {
        if self.bonus == 0.0 {
            self.bonus = amount;
        }
        self.bonus
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn finish(self) -> ScoreResult {
        let total = (self.subtotal + self.bonus).clamp(0.0, MAX_TOTAL_SCORE);
        ScoreResult {
            total_score: round_tenth(total),
            breakdown: self.breakdown.map_scores(round_tenth),
            feedback: self.feedback,
            bonus: round_tenth(self.bonus),
        }
    }
}

/// Scores a canvas against a movement's rules.
///
/// Unrecognized movement ids fall through to the base strategy. The only
/// failure is a canvas whose measurements cannot be computed.
pub fn calculate_score(
    canvas: &CanvasDescription,
    movement_id: &str,
    rules: &MovementRules,
) -> ArenaResult<ScoreResult> {
    let measurements = Measurements::extract(canvas)?;
    debug!(
        movement_id,
        objects = measurements.num_objects(),
        colors = measurements.num_colors(),
        negative_space = measurements.negative_space,
        "Extracted canvas measurements"
    );

    let mut card = ScoreCard::default();
    strategy_for(movement_id).score(&measurements, rules, &mut card);
    Ok(card.finish())
}

/// Same as [`calculate_score`], for a canvas still in raw JSON form.
pub fn score_value(
    canvas: &Value,
    movement_id: &str,
    rules: &MovementRules,
) -> ArenaResult<ScoreResult> {
    let canvas = CanvasDescription::from_value(canvas)?;
    calculate_score(&canvas, movement_id, rules)
}

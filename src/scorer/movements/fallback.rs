use super::MovementStrategy;
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

const BASE_CAP: f64 = 70.0;

/// Scoring for movement ids without a dedicated strategy.
pub struct Fallback;

impl MovementStrategy for Fallback {
    fn score(&self, m: &Measurements<'_>, _rules: &MovementRules, card: &mut ScoreCard) {
        let base = m.num_objects() as f64 * 5.0 + m.num_colors() as f64 * 10.0;
        card.add(Category::Base, base.min(BASE_CAP));
        card.note("Keep creating!");
    }
}

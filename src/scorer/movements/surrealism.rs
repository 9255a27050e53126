use super::MovementStrategy;
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

/// Floor for the smallest scale so a zero-scaled shape cannot divide by zero.
const MIN_SCALE_FLOOR: f64 = 0.1;
const DISTORTION_RATIO: f64 = 2.0;
const DISTORTION_BONUS: f64 = 15.0;

pub struct Surrealism;

impl MovementStrategy for Surrealism {
    fn score(&self, m: &Measurements<'_>, _rules: &MovementRules, card: &mut ScoreCard) {
        let unique_kinds = m.distinct_kinds();
        card.add(Category::Creativity, (unique_kinds as f64 * 10.0).min(30.0));
        if unique_kinds >= 3 {
            card.note("Great variety of elements!");
        } else {
            card.note("Try using different element types");
        }

        let juxtaposition = if m.num_objects() >= 2 {
            if scale_variety(m) > DISTORTION_RATIO {
                card.note("Surreal scale distortions!");
                card.award_bonus(DISTORTION_BONUS);
                30.0
            } else {
                card.note("Try varying sizes more dramatically");
                15.0
            }
        } else {
            10.0
        };
        card.add(Category::Juxtaposition, juxtaposition);

        card.add(
            Category::DreamlikeColors,
            (m.num_colors() as f64 * 5.0).min(20.0),
        );
    }
}

/// Ratio of the largest to the smallest scale product.
fn scale_variety(m: &Measurements<'_>) -> f64 {
    let largest = m.scales().fold(f64::NEG_INFINITY, f64::max);
    let smallest = m.scales().fold(f64::INFINITY, f64::min);
    largest / smallest.max(MIN_SCALE_FLOOR)
}

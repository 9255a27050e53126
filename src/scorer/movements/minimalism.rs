use super::{display_number, display_percent, MovementStrategy};
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

pub const GEOMETRIC_KINDS: [&str; 5] = ["rect", "circle", "triangle", "polygon", "line"];

const DEFAULT_MAX_COLORS: f64 = 3.0;
const DEFAULT_MAX_ELEMENTS: f64 = 5.0;
const DEFAULT_MIN_NEGATIVE_SPACE: f64 = 0.4;

const COLOR_POINTS: f64 = 30.0;
const PENALTY_PER_EXTRA_COLOR: f64 = 10.0;
const ELEMENT_POINTS: f64 = 30.0;
const PENALTY_PER_EXTRA_ELEMENT: f64 = 6.0;
const SPACE_POINTS: f64 = 25.0;
const GEOMETRIC_BONUS: f64 = 15.0;

/// Restraint: few colors, few elements, open space, plain geometry.
pub struct Minimalism;

impl MovementStrategy for Minimalism {
    fn score(&self, m: &Measurements<'_>, rules: &MovementRules, card: &mut ScoreCard) {
        let num_colors = m.num_colors();
        let max_colors = rules.number("max_colors", DEFAULT_MAX_COLORS);
        if num_colors as f64 <= max_colors {
            card.add(Category::Colors, COLOR_POINTS);
            card.note("Great color restraint!");
        } else {
            let excess = num_colors as f64 - max_colors;
            card.add(
                Category::Colors,
                (COLOR_POINTS - excess * PENALTY_PER_EXTRA_COLOR).max(0.0),
            );
            card.note(format!(
                "Too many colors ({}). Try using {} or fewer.",
                num_colors,
                display_number(max_colors)
            ));
        }

        let num_objects = m.num_objects();
        let max_elements = rules.number("max_elements", DEFAULT_MAX_ELEMENTS);
        if num_objects as f64 <= max_elements {
            card.add(Category::Elements, ELEMENT_POINTS);
            card.note("Perfect element count!");
        } else {
            let excess = num_objects as f64 - max_elements;
            card.add(
                Category::Elements,
                (ELEMENT_POINTS - excess * PENALTY_PER_EXTRA_ELEMENT).max(0.0),
            );
            card.note(format!(
                "Too many elements ({}). Keep it simple with {} or fewer.",
                num_objects,
                display_number(max_elements)
            ));
        }

        let min_negative = rules.number("min_negative_space", DEFAULT_MIN_NEGATIVE_SPACE);
        if m.negative_space >= min_negative {
            card.add(Category::NegativeSpace, SPACE_POINTS);
            card.note("Excellent use of negative space!");
        } else {
            // min_negative > negative_space >= 0 here, so the ratio is well defined.
            card.add(
                Category::NegativeSpace,
                (SPACE_POINTS * (m.negative_space / min_negative)).max(0.0),
            );
            card.note(format!(
                "More negative space needed ({}% vs {}% required)",
                display_percent(m.negative_space),
                display_percent(min_negative)
            ));
        }

        if num_objects > 0 && m.count_kinds(&GEOMETRIC_KINDS) == num_objects {
            card.award_bonus(GEOMETRIC_BONUS);
            card.note("Bonus: All geometric shapes!");
        }
        card.record(Category::GeometricBonus, card.bonus());
    }
}

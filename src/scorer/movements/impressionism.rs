use super::MovementStrategy;
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

const ATMOSPHERE_COVERAGE: f64 = 0.3;
const ATMOSPHERE_BONUS: f64 = 10.0;

pub struct Impressionism;

impl MovementStrategy for Impressionism {
    fn score(&self, m: &Measurements<'_>, _rules: &MovementRules, card: &mut ScoreCard) {
        let num_colors = m.num_colors();
        if num_colors >= 3 {
            card.add(Category::Colors, (num_colors as f64 * 7.0).min(30.0));
            card.note("Beautiful color palette!");
        } else {
            card.add(Category::Colors, num_colors as f64 * 10.0);
            card.note("Try adding more soft pastel colors");
        }

        let num_objects = m.num_objects();
        if num_objects >= 10 {
            card.add(Category::Brushstrokes, 30.0);
            card.note("Wonderful brushwork effect!");
        } else if num_objects >= 5 {
            card.add(Category::Brushstrokes, 20.0);
            card.note("Add more brush strokes for texture");
        } else {
            card.add(Category::Brushstrokes, num_objects as f64 * 4.0);
            card.note("Layer more strokes to capture light");
        }

        if m.coverage_ratio() > ATMOSPHERE_COVERAGE {
            card.add(Category::Atmosphere, 20.0);
            card.award_bonus(ATMOSPHERE_BONUS);
            card.note("Bonus: Great atmospheric effect!");
        } else {
            card.add(Category::Atmosphere, 10.0);
        }
    }
}

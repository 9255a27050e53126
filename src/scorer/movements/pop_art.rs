use super::MovementStrategy;
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

const BOLD_PALETTE_SIZE: usize = 3;
const REPETITION_COUNT: usize = 3;

pub struct PopArt;

impl MovementStrategy for PopArt {
    fn score(&self, m: &Measurements<'_>, _rules: &MovementRules, card: &mut ScoreCard) {
        let num_colors = m.num_colors();
        if num_colors >= BOLD_PALETTE_SIZE {
            card.add(Category::Colors, (num_colors as f64 * 8.0).min(30.0));
            card.note("Great use of bold colors!");
        } else {
            card.add(Category::Colors, num_colors as f64 * 10.0);
            card.note("Add more vibrant colors!");
        }

        let has_repetition = m
            .kind_counts()
            .values()
            .any(|&count| count >= REPETITION_COUNT);
        if has_repetition {
            card.add(Category::Repetition, 25.0);
            card.note("Great repetition pattern!");
        } else {
            card.add(Category::Repetition, 10.0);
            card.note("Try adding more repetition of elements");
        }

        card.add(Category::Contrast, (m.num_objects() as f64 * 3.0).min(25.0));
        card.note("Good visual impact!");

        let outlined = m.outlined_count();
        if outlined > 0 {
            card.award_bonus((outlined as f64 * 5.0).min(20.0));
            card.note("Bonus: Nice use of outlines!");
        }
        card.record(Category::OutlineBonus, card.bonus());
    }
}

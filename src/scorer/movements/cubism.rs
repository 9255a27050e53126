use super::MovementStrategy;
use crate::scorer::engine::ScoreCard;
use crate::scorer::measure::Measurements;
use crate::scorer::rules::MovementRules;
use crate::scorer::types::Category;

pub const FRAGMENT_KINDS: [&str; 3] = ["polygon", "triangle", "rect"];

/// Compared against upper-cased canvas colors.
pub const EARTH_TONES: [&str; 7] = [
    "#8B4513", "#2F4F4F", "#DAA520", "#696969", "#A0522D", "#CD853F", "#D2691E",
];

const FRAGMENTATION_COUNT: usize = 5;
const LAYERING_COUNT: usize = 4;
const EARTH_TONE_BONUS: f64 = 10.0;

pub struct Cubism;

impl MovementStrategy for Cubism {
    fn score(&self, m: &Measurements<'_>, _rules: &MovementRules, card: &mut ScoreCard) {
        let polygon_count = m.count_kinds(&FRAGMENT_KINDS);
        card.add(Category::Polygons, (polygon_count as f64 * 6.0).min(30.0));
        if polygon_count >= FRAGMENTATION_COUNT {
            card.note("Excellent geometric fragmentation!");
        } else {
            card.note("Add more geometric shapes for fragmentation");
        }

        let num_objects = m.num_objects();
        if num_objects >= LAYERING_COUNT {
            card.add(Category::Overlap, 25.0);
            card.note("Good layering of elements!");
        } else {
            card.add(Category::Overlap, num_objects as f64 * 6.0);
            card.note("Try overlapping more shapes");
        }

        // Case variants of one tone are distinct colors and each one counts.
        let earth_count = m
            .colors_used
            .iter()
            .filter(|color| EARTH_TONES.contains(&color.to_uppercase().as_str()))
            .count();
        card.add(Category::EarthTones, (earth_count as f64 * 8.0).min(25.0));

        if earth_count >= 2 {
            card.note("Nice use of earth tones!");
            card.award_bonus(EARTH_TONE_BONUS);
        }
    }
}

use serde::de::{MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Upper bound on an artwork's total score.
pub const MAX_TOTAL_SCORE: f64 = 150.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Shared
    Colors,
    // Minimalism
    Elements,
    NegativeSpace,
    GeometricBonus,
    // Pop Art
    Repetition,
    Contrast,
    OutlineBonus,
    // Cubism
    Polygons,
    Overlap,
    EarthTones,
    // Impressionism
    Brushstrokes,
    Atmosphere,
    // Surrealism
    Creativity,
    Juxtaposition,
    DreamlikeColors,
    // Unrecognized movements
    Base,
}

/// Per-category sub-scores, kept in the order they were evaluated.
///
/// Serializes as a JSON object whose keys follow evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown(Vec<(Category, f64)>);

impl Breakdown {
    /// Sets a category's score. Re-inserting a category keeps its original position.
    pub fn insert(&mut self, category: Category, score: f64) {
        match self.0.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = score,
            None => self.0.push((category, score)),
        }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|&(_, score)| score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().map(|&(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn map_scores(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.into_iter().map(|(c, v)| (c, f(v))).collect())
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, v)| (c, v)))
    }
}

struct BreakdownVisitor;

impl<'de> Visitor<'de> for BreakdownVisitor {
    type Value = Breakdown;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category names to scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakdown, A::Error> {
        let mut breakdown = Breakdown::default();
        while let Some((category, score)) = access.next_entry::<Category, f64>()? {
            breakdown.insert(category, score);
        }
        Ok(breakdown)
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub breakdown: Breakdown,
    pub feedback: Vec<String>,
    pub bonus: f64,
}

impl ScoreResult {
    pub fn score(&self, category: Category) -> Option<f64> {
        self.breakdown.get(category)
    }
}

/// Rounds to one decimal place, half away from zero.
#[inline(always)]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

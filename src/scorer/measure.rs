use crate::canvas::{CanvasDescription, ShapeObject};
use crate::error::{ArenaError, ArenaResult};
use std::collections::{BTreeMap, BTreeSet};

/// Radius assumed for shapes that carry neither a size nor a radius.
pub const DEFAULT_RADIUS: f64 = 50.0;

/// A shape with every optional attribute resolved to its effective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedShape<'a> {
    pub kind: Option<&'a str>,
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
    pub stroke_width: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl<'a> ResolvedShape<'a> {
    pub fn resolve(shape: &'a ShapeObject) -> Self {
        let diameter = shape.radius.unwrap_or(DEFAULT_RADIUS) * 2.0;
        Self {
            kind: shape.kind.as_deref(),
            fill: shape.fill.as_deref().filter(|c| !c.is_empty()),
            stroke: shape.stroke.as_deref().filter(|c| !c.is_empty()),
            stroke_width: shape.stroke_width.unwrap_or(0.0),
            width: shape.width.unwrap_or(diameter),
            height: shape.height.unwrap_or(diameter),
            scale_x: shape.scale_x.unwrap_or(1.0),
            scale_y: shape.scale_y.unwrap_or(1.0),
        }
    }

    #[inline(always)]
    pub fn scale(&self) -> f64 {
        self.scale_x * self.scale_y
    }

    /// Bounding-box area after scaling.
    #[inline(always)]
    pub fn area(&self) -> f64 {
        self.width * self.height * self.scale()
    }

    pub fn is_outlined(&self) -> bool {
        self.stroke.is_some() && self.stroke_width > 0.0
    }

    pub fn is_one_of(&self, kinds: &[&str]) -> bool {
        self.kind.is_some_and(|k| kinds.contains(&k))
    }
}

/// Canvas-wide measurements shared by every movement strategy.
#[derive(Debug, Clone)]
pub struct Measurements<'a> {
    pub shapes: Vec<ResolvedShape<'a>>,
    pub colors_used: BTreeSet<&'a str>,
    pub total_area: f64,
    pub covered_area: f64,
    pub negative_space: f64,
}

impl<'a> Measurements<'a> {
    pub fn extract(canvas: &'a CanvasDescription) -> ArenaResult<Self> {
        let total_area = canvas.area();
        if !(total_area.is_finite() && total_area > 0.0) {
            return Err(ArenaError::InvalidCanvas(format!(
                "canvas area must be positive, got {} x {}",
                canvas.width, canvas.height
            )));
        }

        let shapes: Vec<ResolvedShape<'a>> =
            canvas.objects.iter().map(ResolvedShape::resolve).collect();

        let mut colors_used = BTreeSet::new();
        for shape in &shapes {
            colors_used.extend(shape.fill);
            colors_used.extend(shape.stroke);
        }

        let covered_area: f64 = shapes.iter().map(ResolvedShape::area).sum();
        if !covered_area.is_finite() {
            return Err(ArenaError::InvalidCanvas(
                "shape sizes overflow the covered area".to_string(),
            ));
        }

        let negative_space = (1.0 - covered_area / total_area).max(0.0);

        Ok(Self {
            shapes,
            colors_used,
            total_area,
            covered_area,
            negative_space,
        })
    }

    pub fn num_objects(&self) -> usize {
        self.shapes.len()
    }

    pub fn num_colors(&self) -> usize {
        self.colors_used.len()
    }

    /// Fraction of the canvas covered by shape bounding boxes. Unlike
    /// `negative_space` this is not clamped and may exceed 1.
    pub fn coverage_ratio(&self) -> f64 {
        self.covered_area / self.total_area
    }

    pub fn count_kinds(&self, kinds: &[&str]) -> usize {
        self.shapes.iter().filter(|s| s.is_one_of(kinds)).count()
    }

    /// Number of distinct shape types. Shapes without a type share one bucket.
    pub fn distinct_kinds(&self) -> usize {
        self.shapes
            .iter()
            .map(|s| s.kind)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Occurrences per shape type, with untyped shapes counted as "unknown".
    pub fn kind_counts(&self) -> BTreeMap<&'a str, usize> {
        let mut counts = BTreeMap::new();
        for shape in &self.shapes {
            *counts.entry(shape.kind.unwrap_or("unknown")).or_insert(0) += 1;
        }
        counts
    }

    pub fn outlined_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_outlined()).count()
    }

    pub fn scales(&self) -> impl Iterator<Item = f64> + '_ {
        self.shapes.iter().map(ResolvedShape::scale)
    }
}

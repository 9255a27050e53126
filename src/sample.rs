use crate::canvas::{CanvasDescription, ShapeObject, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

pub const SAMPLE_KINDS: [&str; 7] = ["rect", "circle", "triangle", "polygon", "line", "path", "text"];

const FALLBACK_PALETTE: [&str; 2] = ["#000000", "#FFFFFF"];

/// Generates a random canvas drawn from `palette`, for demos and benchmarks.
pub fn random_canvas(rng: &mut fastrand::Rng, palette: &[String], objects: usize) -> CanvasDescription {
    let palette: Vec<&str> = if palette.is_empty() {
        FALLBACK_PALETTE.to_vec()
    } else {
        palette.iter().map(String::as_str).collect()
    };

    let shapes = (0..objects)
        .map(|_| random_shape(rng, &palette))
        .collect();

    CanvasDescription::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, shapes)
}

fn random_shape(rng: &mut fastrand::Rng, palette: &[&str]) -> ShapeObject {
    let kind = SAMPLE_KINDS[rng.usize(..SAMPLE_KINDS.len())];
    let mut shape = ShapeObject::new(kind).with_fill(palette[rng.usize(..palette.len())]);

    shape = if kind == "circle" {
        shape.with_radius(tenth(10.0 + rng.f64() * 80.0))
    } else {
        shape.with_size(tenth(10.0 + rng.f64() * 200.0), tenth(10.0 + rng.f64() * 200.0))
    };

    if rng.bool() {
        let stroke = palette[rng.usize(..palette.len())];
        shape = shape.with_stroke(stroke, f64::from(rng.u32(1..=6)));
    }

    if rng.f64() < 0.3 {
        let scale = tenth(0.25 + rng.f64() * 2.5);
        shape = shape.with_scale(scale, scale);
    }

    shape
}

fn tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

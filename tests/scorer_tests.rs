use chromatic_arena::canvas::{CanvasDescription, ShapeObject};
use chromatic_arena::catalog::{MovementCatalog, StaticCatalog};
use chromatic_arena::scorer::{calculate_score, score_value, Category, MovementRules, ScoreResult};
use chromatic_arena::ArenaError;
use rstest::rstest;
use serde_json::json;

// --- HELPERS ---

fn canvas(objects: Vec<ShapeObject>) -> CanvasDescription {
    CanvasDescription::new(800.0, 600.0, objects)
}

fn rects(fills: &[&str]) -> Vec<ShapeObject> {
    fills
        .iter()
        .map(|f| ShapeObject::new("rect").with_fill(f).with_size(100.0, 100.0))
        .collect()
}

fn score(canvas: &CanvasDescription, movement_id: &str) -> ScoreResult {
    let rules = StaticCatalog::builtin().unwrap().rules_for(movement_id);
    calculate_score(canvas, movement_id, &rules).unwrap()
}

fn breakdown_sum(result: &ScoreResult) -> f64 {
    result
        .breakdown
        .iter()
        .filter(|(c, _)| !matches!(c, Category::GeometricBonus | Category::OutlineBonus))
        .map(|(_, s)| s)
        .sum()
}

// --- MINIMALISM ---

#[test]
fn test_minimalism_restrained_geometric_canvas() {
    let c = canvas(rects(&["#000000", "#FF0000", "#0000FF", "#000000", "#FF0000"]));
    let res = score(&c, "minimalism");

    assert_eq!(res.score(Category::Colors), Some(30.0));
    assert_eq!(res.score(Category::Elements), Some(30.0));
    assert_eq!(res.score(Category::NegativeSpace), Some(25.0));
    assert_eq!(res.score(Category::GeometricBonus), Some(15.0));
    assert_eq!(res.bonus, 15.0);
    assert_eq!(res.total_score, 100.0);
    assert_eq!(
        res.feedback,
        vec![
            "Great color restraint!",
            "Perfect element count!",
            "Excellent use of negative space!",
            "Bonus: All geometric shapes!",
        ]
    );
}

#[test]
fn test_minimalism_penalizes_extra_colors_to_zero() {
    let c = canvas(rects(&["#111111", "#222222", "#333333", "#444444", "#555555"]).into_iter()
        .chain(std::iter::once(
            ShapeObject::new("circle").with_fill("#666666").with_radius(10.0),
        ))
        .collect());
    let res = score(&c, "minimalism");

    assert_eq!(res.score(Category::Colors), Some(0.0));
    assert_eq!(res.feedback[0], "Too many colors (6). Try using 3 or fewer.");
    // 6 elements against a limit of 5
    assert_eq!(res.score(Category::Elements), Some(24.0));
    assert_eq!(
        res.feedback[1],
        "Too many elements (6). Keep it simple with 5 or fewer."
    );
}

#[test]
fn test_minimalism_partial_negative_space() {
    // 600x600 of an 800x600 canvas leaves a quarter open.
    let c = canvas(vec![ShapeObject::new("rect")
        .with_fill("#000000")
        .with_size(600.0, 600.0)]);
    let res = score(&c, "minimalism");

    assert_eq!(res.score(Category::NegativeSpace), Some(15.6));
    assert!(res
        .feedback
        .contains(&"More negative space needed (25% vs 40% required)".to_string()));
}

#[test]
fn test_minimalism_non_geometric_shape_forfeits_bonus() {
    let mut objects = rects(&["#000000"]);
    objects.push(ShapeObject::new("text").with_fill("#000000"));
    let res = score(&canvas(objects), "minimalism");

    assert_eq!(res.bonus, 0.0);
    assert_eq!(res.score(Category::GeometricBonus), Some(0.0));
    assert_eq!(res.total_score, 85.0);
}

#[test]
fn test_minimalism_reads_rule_overrides() {
    let c = canvas(rects(&["#111111", "#222222", "#333333", "#444444"]));
    let rules = MovementRules::new()
        .with("max_colors", 4)
        .with("max_elements", 2)
        .with("min_negative_space", 0.4);
    let res = calculate_score(&c, "minimalism", &rules).unwrap();

    assert_eq!(res.score(Category::Colors), Some(30.0));
    assert_eq!(res.score(Category::Elements), Some(18.0));
    assert_eq!(
        res.feedback[1],
        "Too many elements (4). Keep it simple with 2 or fewer."
    );
}

// --- POP ART ---

#[test]
fn test_pop_art_repetition_and_outlines() {
    let objects = ["#FF0000", "#FFFF00", "#FF0000"]
        .iter()
        .map(|f| {
            ShapeObject::new("rect")
                .with_fill(f)
                .with_stroke("#000000", 2.0)
                .with_size(50.0, 50.0)
        })
        .collect();
    let res = score(&canvas(objects), "pop_art");

    assert_eq!(res.score(Category::Colors), Some(24.0));
    assert_eq!(res.score(Category::Repetition), Some(25.0));
    assert_eq!(res.score(Category::Contrast), Some(9.0));
    assert_eq!(res.score(Category::OutlineBonus), Some(15.0));
    assert_eq!(res.bonus, 15.0);
    assert_eq!(res.total_score, 73.0);
    assert_eq!(res.feedback.last().unwrap(), "Bonus: Nice use of outlines!");
}

#[test]
fn test_pop_art_two_colors_score_ten_each() {
    let res = score(&canvas(rects(&["#FF0000", "#FFFF00", "#FF0000"])), "pop_art");
    assert_eq!(res.score(Category::Colors), Some(20.0));
    assert_eq!(res.score(Category::Repetition), Some(25.0));
    assert_eq!(res.total_score, 54.0);
    assert_eq!(res.feedback[0], "Add more vibrant colors!");
}

#[test]
fn test_pop_art_untyped_shapes_repeat_as_unknown() {
    let c = CanvasDescription::from_value(&json!({ "objects": [{}, {}, {}] })).unwrap();
    let res = score(&c, "pop_art");
    assert_eq!(res.score(Category::Repetition), Some(25.0));
}

#[test]
fn test_pop_art_stroke_without_width_is_not_an_outline() {
    let c = canvas(vec![ShapeObject::new("circle")
        .with_fill("#FF0000")
        .with_stroke("#000000", 0.0)]);
    let res = score(&c, "pop_art");
    assert_eq!(res.bonus, 0.0);
    assert_eq!(res.score(Category::OutlineBonus), Some(0.0));
}

// --- CUBISM ---

#[test]
fn test_cubism_fragmented_earth_tones() {
    let objects = ["#8b4513", "#8B4513", "#2F4F4F", "#FFFFFF", "#FFFFFF"]
        .iter()
        .zip(["polygon", "triangle", "rect", "polygon", "rect"])
        .map(|(fill, kind)| ShapeObject::new(kind).with_fill(fill).with_size(80.0, 80.0))
        .collect();
    let res = score(&canvas(objects), "cubism");

    assert_eq!(res.score(Category::Polygons), Some(30.0));
    assert_eq!(res.score(Category::Overlap), Some(25.0));
    // Case variants of a tone each count as a match.
    assert_eq!(res.score(Category::EarthTones), Some(24.0));
    assert_eq!(res.bonus, 10.0);
    assert_eq!(res.total_score, 89.0);
    assert_eq!(
        res.feedback,
        vec![
            "Excellent geometric fragmentation!",
            "Good layering of elements!",
            "Nice use of earth tones!",
        ]
    );
}

#[test]
fn test_cubism_sparse_canvas() {
    let c = canvas(vec![
        ShapeObject::new("circle").with_fill("#8B4513"),
        ShapeObject::new("rect").with_fill("#000000"),
    ]);
    let res = score(&c, "cubism");

    assert_eq!(res.score(Category::Polygons), Some(6.0));
    assert_eq!(res.score(Category::Overlap), Some(12.0));
    assert_eq!(res.score(Category::EarthTones), Some(8.0));
    assert_eq!(res.bonus, 0.0);
    assert_eq!(
        res.feedback,
        vec![
            "Add more geometric shapes for fragmentation",
            "Try overlapping more shapes",
        ]
    );
}

// --- IMPRESSIONISM ---

#[test]
fn test_impressionism_full_brushwork() {
    let fills = ["#FFB6C1", "#E6E6FA", "#98FB98"];
    let objects = (0..10)
        .map(|i| {
            ShapeObject::new("path")
                .with_fill(fills[i % 3])
                .with_size(200.0, 100.0)
        })
        .collect();
    let res = score(&canvas(objects), "impressionism");

    assert_eq!(res.score(Category::Colors), Some(21.0));
    assert_eq!(res.score(Category::Brushstrokes), Some(30.0));
    assert_eq!(res.score(Category::Atmosphere), Some(20.0));
    assert_eq!(res.bonus, 10.0);
    assert_eq!(res.total_score, 81.0);
    assert_eq!(res.feedback.last().unwrap(), "Bonus: Great atmospheric effect!");
}

#[rstest]
#[case(4, 16.0, "Layer more strokes to capture light")]
#[case(5, 20.0, "Add more brush strokes for texture")]
#[case(9, 20.0, "Add more brush strokes for texture")]
#[case(10, 30.0, "Wonderful brushwork effect!")]
fn test_impressionism_brushstroke_tiers(
    #[case] count: usize,
    #[case] expected: f64,
    #[case] message: &str,
) {
    let objects = (0..count)
        .map(|_| ShapeObject::new("line").with_fill("#FFFFFF").with_size(1.0, 1.0))
        .collect();
    let res = score(&canvas(objects), "impressionism");

    assert_eq!(res.score(Category::Brushstrokes), Some(expected));
    assert_eq!(res.feedback[1], message);
    // Thin lines leave the canvas bare: no atmosphere bonus, no extra line.
    assert_eq!(res.score(Category::Atmosphere), Some(10.0));
    assert_eq!(res.feedback.len(), 2);
}

// --- SURREALISM ---

#[test]
fn test_surrealism_scale_distortion() {
    let c = canvas(vec![
        ShapeObject::new("circle").with_fill("#4B0082"),
        ShapeObject::new("rect")
            .with_fill("#4B0082")
            .with_size(10.0, 10.0)
            .with_scale(3.0, 1.0),
    ]);
    let res = score(&c, "surrealism");

    assert_eq!(res.score(Category::Creativity), Some(20.0));
    assert_eq!(res.score(Category::Juxtaposition), Some(30.0));
    assert_eq!(res.score(Category::DreamlikeColors), Some(5.0));
    assert_eq!(res.bonus, 15.0);
    assert_eq!(res.total_score, 70.0);
    assert_eq!(
        res.feedback,
        vec!["Try using different element types", "Surreal scale distortions!"]
    );
}

#[test]
fn test_surrealism_zero_scale_is_floored() {
    let c = canvas(vec![
        ShapeObject::new("circle").with_scale(0.0, 0.0),
        ShapeObject::new("circle").with_scale(0.15, 1.0),
    ]);
    // 0.15 / max(0, 0.1) = 1.5, so no distortion bonus.
    let res = score(&c, "surrealism");
    assert_eq!(res.score(Category::Juxtaposition), Some(15.0));
    assert_eq!(res.bonus, 0.0);
}

#[test]
fn test_surrealism_single_object_has_no_juxtaposition_feedback() {
    let c = canvas(vec![ShapeObject::new("text").with_fill("#000000")]);
    let res = score(&c, "surrealism");
    assert_eq!(res.score(Category::Juxtaposition), Some(10.0));
    assert_eq!(res.feedback, vec!["Try using different element types"]);
}

#[test]
fn test_surrealism_untyped_shapes_count_as_one_kind() {
    let c = CanvasDescription::from_value(&json!({
        "objects": [{ "type": "rect" }, { "type": "circle" }, {}, { "fill": "#ff00ff" }]
    }))
    .unwrap();
    let res = score(&c, "surrealism");
    assert_eq!(res.score(Category::Creativity), Some(30.0));
    assert_eq!(res.feedback[0], "Great variety of elements!");
}

// --- FALLBACK ---

#[test]
fn test_unknown_movement_uses_base_score() {
    let c = canvas(rects(&["#000000", "#FFFFFF", "#000000", "#FFFFFF"]));
    let res = score(&c, "dadaism");

    assert_eq!(res.score(Category::Base), Some(40.0));
    assert_eq!(res.breakdown.len(), 1);
    assert_eq!(res.bonus, 0.0);
    assert_eq!(res.total_score, 40.0);
    assert_eq!(res.feedback, vec!["Keep creating!"]);
}

#[test]
fn test_base_score_is_capped() {
    let fills: Vec<String> = (0..8).map(|i| format!("#00000{}", i)).collect();
    let objects = fills
        .iter()
        .map(|f| ShapeObject::new("rect").with_fill(f))
        .collect();
    let res = score(&canvas(objects), "");
    assert_eq!(res.total_score, 70.0);
}

// --- CROSS-MOVEMENT PROPERTIES ---

#[rstest]
#[case("minimalism", 85.0, 4)]
#[case("pop_art", 10.0, 4)]
#[case("cubism", 0.0, 3)]
#[case("impressionism", 10.0, 3)]
#[case("surrealism", 10.0, 3)]
#[case("dadaism", 0.0, 1)]
fn test_empty_canvas_floor_values(
    #[case] movement_id: &str,
    #[case] total: f64,
    #[case] categories: usize,
) {
    let res = score(&CanvasDescription::default(), movement_id);
    assert_eq!(res.total_score, total);
    assert_eq!(res.breakdown.len(), categories);
    assert_eq!(res.bonus, 0.0);
}

#[rstest]
#[case("minimalism")]
#[case("pop_art")]
#[case("cubism")]
#[case("impressionism")]
#[case("surrealism")]
fn test_total_is_breakdown_plus_bonus(#[case] movement_id: &str) {
    let c = canvas(vec![
        ShapeObject::new("rect").with_fill("#8B4513").with_size(300.0, 200.0),
        ShapeObject::new("circle")
            .with_fill("#DAA520")
            .with_stroke("#000000", 3.0)
            .with_scale(2.5, 1.0),
        ShapeObject::new("triangle").with_fill("#FF0000"),
    ]);
    let res = score(&c, movement_id);
    let expected = breakdown_sum(&res) + res.bonus;
    assert!((res.total_score - expected).abs() < 0.2, "{:?}", res);
}

#[test]
fn test_breakdown_serializes_in_evaluation_order() {
    let res = score(&canvas(rects(&["#000000"])), "minimalism");
    let json = serde_json::to_string(&res).unwrap();

    let keys = ["\"colors\"", "\"elements\"", "\"negative_space\"", "\"geometric_bonus\""];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
}

#[test]
fn test_score_value_accepts_raw_json() {
    let payload = json!({
        "width": 400,
        "height": 300,
        "objects": [
            { "type": "circle", "fill": "#FFB6C1" },
            "not a shape",
            { "type": "rect", "fill": "", "stroke": "#000000", "strokeWidth": "thick" }
        ]
    });
    let res = score_value(&payload, "impressionism", &MovementRules::default()).unwrap();
    // "" is ignored, leaving two colors.
    assert_eq!(res.score(Category::Colors), Some(20.0));
    assert_eq!(res.score(Category::Brushstrokes), Some(12.0));
}

#[rstest]
#[case(json!("canvas"))]
#[case(json!({ "objects": 42 }))]
#[case(json!({ "width": 0, "objects": [] }))]
#[case(json!({ "height": -10 }))]
fn test_invalid_canvas_is_rejected(#[case] payload: serde_json::Value) {
    let err = score_value(&payload, "minimalism", &MovementRules::default()).unwrap_err();
    assert!(matches!(err, ArenaError::InvalidCanvas(_)), "{:?}", err);
}

#[test]
fn test_overflowing_shapes_are_rejected() {
    let c = canvas(vec![ShapeObject::new("rect")
        .with_size(f64::MAX, f64::MAX)
        .with_scale(2.0, 2.0)]);
    let err = calculate_score(&c, "cubism", &MovementRules::default()).unwrap_err();
    assert!(matches!(err, ArenaError::InvalidCanvas(_)));
}

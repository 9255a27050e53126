use crate::error::{ArenaError, ArenaResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// A single drawn shape as submitted by the client.
///
/// Every attribute is optional. Values of the wrong JSON type are read as
/// absent, so a stray `"width": "wide"` behaves like a missing width.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeObject {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
}

impl ShapeObject {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }

    /// Reads a shape from an arbitrary JSON value. Anything that is not a
    /// JSON object becomes an empty attribute bag.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        Self {
            kind: text_field(map, "type"),
            fill: text_field(map, "fill"),
            stroke: text_field(map, "stroke"),
            stroke_width: number_field(map, "strokeWidth"),
            width: number_field(map, "width"),
            height: number_field(map, "height"),
            radius: number_field(map, "radius"),
            scale_x: number_field(map, "scaleX"),
            scale_y: number_field(map, "scaleY"),
        }
    }

    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.to_string());
        self
    }

    pub fn with_stroke(mut self, stroke: &str, width: f64) -> Self {
        self.stroke = Some(stroke.to_string());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }
}

impl<'de> Deserialize<'de> for ShapeObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Declarative description of an artwork: canvas bounds plus drawn shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasDescription {
    pub width: f64,
    pub height: f64,
    pub objects: Vec<ShapeObject>,
}

impl Default for CanvasDescription {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            objects: Vec::new(),
        }
    }
}

impl CanvasDescription {
    pub fn new(width: f64, height: f64, objects: Vec<ShapeObject>) -> Self {
        Self {
            width,
            height,
            objects,
        }
    }

    /// Builds a canvas from client JSON, applying defaults for missing or
    /// mistyped fields. Fails only when the payload is not an object or its
    /// `objects` entry is present but not a sequence.
    pub fn from_value(value: &Value) -> ArenaResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            ArenaError::InvalidCanvas(format!(
                "canvas must be a JSON object, found {}",
                json_kind(value)
            ))
        })?;

        let objects = match map.get("objects") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(ShapeObject::from_value).collect(),
            Some(other) => {
                return Err(ArenaError::InvalidCanvas(format!(
                    "`objects` must be a sequence, found {}",
                    json_kind(other)
                )))
            }
        };

        Ok(Self {
            width: number_field(map, "width").unwrap_or(DEFAULT_CANVAS_WIDTH),
            height: number_field(map, "height").unwrap_or(DEFAULT_CANVAS_HEIGHT),
            objects,
        })
    }

    pub fn from_json_str(content: &str) -> ArenaResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ArenaResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl<'de> Deserialize<'de> for CanvasDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

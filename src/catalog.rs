use crate::error::{ArenaError, ArenaResult};
use crate::scorer::{Movement, MovementRules};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_MOVEMENTS: &str = include_str!("../data/movements.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtMovement {
    pub movement_id: String,
    pub name: String,
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default = "default_unlock_level")]
    pub unlock_level: u32,
    #[serde(default)]
    pub color_palette: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub scoring_rules: MovementRules,
}

fn default_unlock_level() -> u32 {
    1
}

impl ArtMovement {
    /// The dedicated strategy this entry scores with, if any.
    pub fn known_movement(&self) -> Option<Movement> {
        self.movement_id.parse().ok()
    }
}

/// Lookup of movement definitions by id.
pub trait MovementCatalog: Send + Sync {
    fn movement(&self, movement_id: &str) -> Option<&ArtMovement>;

    fn movements(&self) -> Vec<&ArtMovement>;

    /// Scoring rules for a movement; empty when the id is not catalogued.
    fn rules_for(&self, movement_id: &str) -> MovementRules {
        self.movement(movement_id)
            .map(|m| m.scoring_rules.clone())
            .unwrap_or_default()
    }

    fn unlocked_at(&self, level: u32) -> Vec<&ArtMovement> {
        self.movements()
            .into_iter()
            .filter(|m| m.unlock_level <= level)
            .collect()
    }
}

/// An immutable catalog held in memory, in definition order.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    movements: Vec<ArtMovement>,
}

impl StaticCatalog {
    pub fn new(movements: Vec<ArtMovement>) -> ArenaResult<Self> {
        let mut seen = HashSet::new();
        for m in &movements {
            if !seen.insert(m.movement_id.as_str()) {
                return Err(ArenaError::Config(format!(
                    "Duplicate movement id '{}' in catalog",
                    m.movement_id
                )));
            }
        }
        Ok(Self { movements })
    }

    /// The five seeded movements.
    pub fn builtin() -> ArenaResult<Self> {
        Self::from_json_str(BUILTIN_MOVEMENTS)
    }

    pub fn from_json_str(content: &str) -> ArenaResult<Self> {
        let movements: Vec<ArtMovement> = serde_json::from_str(content)?;
        Self::new(movements)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ArenaResult<Self> {
        let path = path.as_ref();
        debug!("Loading movement catalog from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

impl MovementCatalog for StaticCatalog {
    fn movement(&self, movement_id: &str) -> Option<&ArtMovement> {
        self.movements.iter().find(|m| m.movement_id == movement_id)
    }

    fn movements(&self) -> Vec<&ArtMovement> {
        self.movements.iter().collect()
    }
}

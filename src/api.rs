use crate::canvas::CanvasDescription;
use crate::catalog::MovementCatalog;
use crate::config::RuleOverrides;
use crate::error::{ArenaError, ArenaResult};
use crate::scorer::{calculate_score, MovementRules, ScoreResult};
use crate::store::{ArtworkRecord, ArtworkStore, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoreRequest {
    pub canvas_data: Value,
    pub movement_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArtworkCreate {
    pub movement_id: String,
    pub canvas_data: Value,
    #[serde(default)]
    pub title: Option<String>,
}

/// Looks up a movement's rules and layers any overrides on top. Unknown
/// movements get empty rules and score with the base strategy.
pub fn resolve_rules(
    catalog: &dyn MovementCatalog,
    movement_id: &str,
    overrides: &RuleOverrides,
) -> MovementRules {
    let mut rules = match catalog.movement(movement_id) {
        Some(movement) => movement.scoring_rules.clone(),
        None => {
            warn!(
                "Movement '{}' is not in the catalog. Using base scoring.",
                movement_id
            );
            MovementRules::default()
        }
    };
    overrides.apply(&mut rules);
    rules
}

/// Scores canvases and records artworks on behalf of authenticated players.
pub struct ScoringService<C, S> {
    catalog: C,
    store: S,
    rng: Mutex<fastrand::Rng>,
}

impl<C: MovementCatalog, S: ArtworkStore> ScoringService<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            store,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Deterministic artwork ids, for tests and replays.
    pub fn with_seed(catalog: C, store: S, seed: u64) -> Self {
        Self {
            catalog,
            store,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn score(&self, request: &ScoreRequest) -> ArenaResult<ScoreResult> {
        let canvas = CanvasDescription::from_value(&request.canvas_data)?;
        self.score_canvas(&canvas, &request.movement_id, &RuleOverrides::default())
    }

    pub fn score_canvas(
        &self,
        canvas: &CanvasDescription,
        movement_id: &str,
        overrides: &RuleOverrides,
    ) -> ArenaResult<ScoreResult> {
        let rules = resolve_rules(&self.catalog, movement_id, overrides);
        calculate_score(canvas, movement_id, &rules)
    }

    /// Scores a new artwork and stores it under the player's name.
    pub fn create_artwork(&self, user: &UserId, request: ArtworkCreate) -> ArenaResult<ArtworkRecord> {
        let canvas = CanvasDescription::from_value(&request.canvas_data)?;
        let score = self.score_canvas(&canvas, &request.movement_id, &RuleOverrides::default())?;

        let title = request
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let record = ArtworkRecord {
            artwork_id: self.next_artwork_id()?,
            user_id: user.clone(),
            movement_id: request.movement_id,
            title,
            canvas_data: canvas,
            score,
            created_at: unix_now(),
        };

        self.store.insert(record.clone())?;
        info!(
            "Artwork {} by {} scored {:.1} in '{}'",
            record.artwork_id, user, record.score.total_score, record.movement_id
        );
        Ok(record)
    }

    pub fn artworks_for(&self, user: &UserId) -> ArenaResult<Vec<ArtworkRecord>> {
        self.store.list_for_user(user)
    }

    fn next_artwork_id(&self) -> ArenaResult<String> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| ArenaError::Storage(e.to_string()))?;
        Ok(format!("art_{:012x}", rng.u64(..1 << 48)))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

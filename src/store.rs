use crate::canvas::CanvasDescription;
use crate::error::{ArenaError, ArenaResult};
use crate::scorer::ScoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;

/// Identity of an authenticated player, established before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub artwork_id: String,
    pub user_id: UserId,
    pub movement_id: String,
    pub title: String,
    pub canvas_data: CanvasDescription,
    pub score: ScoreResult,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

/// Persistence for scored artworks.
pub trait ArtworkStore: Send + Sync {
    fn insert(&self, record: ArtworkRecord) -> ArenaResult<()>;

    fn get(&self, artwork_id: &str) -> ArenaResult<Option<ArtworkRecord>>;

    /// All artworks by one user, newest first.
    fn list_for_user(&self, user: &UserId) -> ArenaResult<Vec<ArtworkRecord>>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    artworks: RwLock<Vec<ArtworkRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> ArenaResult<usize> {
        let guard = self.artworks.read().map_err(poisoned)?;
        Ok(guard.len())
    }
}

impl ArtworkStore for MemoryStore {
    fn insert(&self, record: ArtworkRecord) -> ArenaResult<()> {
        let mut guard = self.artworks.write().map_err(poisoned)?;
        if guard.iter().any(|a| a.artwork_id == record.artwork_id) {
            return Err(ArenaError::Storage(format!(
                "Artwork '{}' already exists",
                record.artwork_id
            )));
        }
        guard.push(record);
        Ok(())
    }

    fn get(&self, artwork_id: &str) -> ArenaResult<Option<ArtworkRecord>> {
        let guard = self.artworks.read().map_err(poisoned)?;
        Ok(guard.iter().find(|a| a.artwork_id == artwork_id).cloned())
    }

    fn list_for_user(&self, user: &UserId) -> ArenaResult<Vec<ArtworkRecord>> {
        let guard = self.artworks.read().map_err(poisoned)?;
        // Insertion order is chronological.
        Ok(guard
            .iter()
            .rev()
            .filter(|a| &a.user_id == user)
            .cloned()
            .collect())
    }
}

fn poisoned<E: fmt::Display>(e: E) -> ArenaError {
    ArenaError::Storage(e.to_string())
}

pub mod api;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod sample;
pub mod scorer;
pub mod store;
// cmd and reports are binary modules (see main.rs).

pub use crate::error::{ArenaError, ArenaResult};
pub use crate::scorer::{calculate_score, ScoreResult};

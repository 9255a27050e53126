pub mod batch;
pub mod movements;
pub mod sample;
pub mod score;

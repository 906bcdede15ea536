#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod attempt;
pub mod generator;
pub mod placement;
pub mod shuffle;
pub mod task;
pub mod word;

pub use generator::{
  generate_word_search, Generation, GenerationConfig, GenerationResult, GenerationStats,
  PuzzleStatus, WordSearchGenerator,
};
pub use placement::{Direction, Placement};
pub use task::{CancelHandle, GenerationTask};

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wordsearch_gen::{
  generator::{
    DEFAULT_COLS, DEFAULT_MAX_GRID_ATTEMPTS, DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_ROWS,
  },
  GenerationConfig,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
}

/// Hide a list of names in a word search puzzle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Names to hide in the grid.
  pub names: Vec<String>,

  /// File with one name per line, or `-` for stdin.
  #[arg(long)]
  pub names_file: Option<PathBuf>,

  #[arg(long, default_value_t = DEFAULT_ROWS)]
  pub rows: u32,

  #[arg(long, default_value_t = DEFAULT_COLS)]
  pub cols: u32,

  /// Place full names (without spaces) instead of first names only.
  #[arg(long)]
  pub maintain_surnames: bool,

  #[arg(long, default_value_t = DEFAULT_MAX_GRID_ATTEMPTS)]
  pub max_grid_attempts: u32,

  #[arg(long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
  pub max_placement_attempts: u32,

  /// Seed to regenerate a puzzle. A random one is picked and logged otherwise.
  #[arg(long)]
  pub seed: Option<u64>,

  #[arg(long, value_enum, default_value = "text")]
  pub format: OutputFormat,

  /// Write the generated puzzle to this file.
  #[arg(long)]
  pub save: Option<PathBuf>,

  /// Show a previously saved puzzle instead of generating one.
  #[arg(long, conflicts_with_all = ["names", "names_file", "save"])]
  pub load: Option<PathBuf>,
}

impl Args {
  pub fn generation_config(&self) -> GenerationConfig {
    GenerationConfig {
      rows: self.rows,
      cols: self.cols,
      maintain_surnames: self.maintain_surnames,
      max_grid_attempts: self.max_grid_attempts,
      max_placement_attempts: self.max_placement_attempts,
    }
  }
}

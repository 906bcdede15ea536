use std::fmt::Write;

use itertools::Itertools;
use util::error::WordSearchResult;
use wordsearch_gen::{GenerationResult, PuzzleStatus};

use crate::args::OutputFormat;

pub fn render(result: &GenerationResult, format: OutputFormat) -> WordSearchResult<String> {
  match format {
    OutputFormat::Text => render_text(result),
    OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
  }
}

fn render_text(result: &GenerationResult) -> WordSearchResult<String> {
  let mut out = String::new();
  write!(out, "{}", result.grid)?;

  writeln!(out)?;
  writeln!(out, "Find these names:")?;
  for placement in result.placed_words.iter().sorted_by(|a, b| a.word.cmp(&b.word)) {
    writeln!(out, "  {}", placement.word)?;
  }

  if result.status() == PuzzleStatus::Impossible {
    writeln!(out)?;
    writeln!(out, "Some names couldn't fit ({}):", result.unplaced_words.len())?;
    writeln!(out, "  {}", result.unplaced_words.iter().join(", "))?;
    writeln!(out, "Try increasing the grid size to include these names.")?;
  }

  Ok(out)
}

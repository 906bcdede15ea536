use std::sync::atomic::{AtomicBool, Ordering};

use bitcode::{Decode, Encode};
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::{debug, info};
use util::{
  error::{WordSearchError, WordSearchResult},
  grid::{Grid, Gridlike},
  time::time_fn,
};

use crate::{
  attempt::Attempt,
  placement::{Cell, Placement},
  shuffle::LengthBuckets,
  word::{Word, WordList},
};

pub const DEFAULT_ROWS: u32 = 15;
pub const DEFAULT_COLS: u32 = 15;
pub const DEFAULT_MAX_GRID_ATTEMPTS: u32 = 2000;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
  pub rows: u32,
  pub cols: u32,
  /// Keep every part of a name (joined, without spaces) instead of only the
  /// first one.
  pub maintain_surnames: bool,
  pub max_grid_attempts: u32,
  /// Random probes per word before falling back to a full scan.
  pub max_placement_attempts: u32,
}

impl GenerationConfig {
  pub fn new(rows: u32, cols: u32) -> Self {
    Self { rows, cols, ..Self::default() }
  }

  pub fn validate(&self) -> WordSearchResult {
    if self.rows < 1 || self.cols < 1 {
      return Err(
        WordSearchError::InvalidConfig(format!(
          "Grid dimensions must be at least 1x1, got {}x{}",
          self.rows, self.cols
        ))
        .into(),
      );
    }
    if self.max_grid_attempts < 1 {
      return Err(
        WordSearchError::InvalidConfig("max_grid_attempts must be positive".to_owned()).into(),
      );
    }
    if self.max_placement_attempts < 1 {
      return Err(
        WordSearchError::InvalidConfig("max_placement_attempts must be positive".to_owned()).into(),
      );
    }
    Ok(())
  }
}

impl Default for GenerationConfig {
  fn default() -> Self {
    Self {
      rows: DEFAULT_ROWS,
      cols: DEFAULT_COLS,
      maintain_surnames: false,
      max_grid_attempts: DEFAULT_MAX_GRID_ATTEMPTS,
      max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleStatus {
  /// Every name made it into the grid.
  Success,
  Impossible,
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
  #[serde(serialize_with = "serialize_grid")]
  pub grid: Grid<char>,
  pub placed_words: Vec<Placement>,
  /// Names as entered, in the order the winning attempt gave up on them,
  /// followed by names too long for the grid.
  pub unplaced_words: Vec<String>,
}

impl GenerationResult {
  pub fn status(&self) -> PuzzleStatus {
    if self.unplaced_words.is_empty() {
      PuzzleStatus::Success
    } else {
      PuzzleStatus::Impossible
    }
  }

  pub fn rows(&self) -> u32 {
    self.grid.height()
  }

  pub fn cols(&self) -> u32 {
    self.grid.width()
  }
}

fn serialize_grid<S: Serializer>(grid: &Grid<char>, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.collect_seq(
    grid
      .rows()
      .map(|row| row.iter().map(char::to_string).collect::<Vec<_>>()),
  )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Grid attempts actually evaluated.
  pub attempts: u32,
  /// Index of the attempt the result came from.
  pub best_attempt: u32,
  pub cancelled: bool,
}

#[derive(Clone, Debug)]
pub struct Generation {
  pub result: GenerationResult,
  pub stats: GenerationStats,
}

/// Snapshot of the best attempt seen so far, with words already resolved to
/// their original spelling.
struct BestAttempt {
  grid: Grid<Cell>,
  placed_words: Vec<Placement>,
  unplaced_words: Vec<String>,
}

impl BestAttempt {
  fn from_attempt(attempt: &Attempt<'_>, too_long: &[Word]) -> Self {
    Self {
      grid: attempt.grid().clone(),
      placed_words: attempt.placed().iter().map(|placed| placed.to_placement()).collect(),
      unplaced_words: attempt
        .unplaced()
        .iter()
        .map(|word| word.original().to_owned())
        .chain(too_long.iter().map(|word| word.original().to_owned()))
        .collect(),
    }
  }

  /// Used when no attempt ran at all.
  fn nothing_placed(rows: u32, cols: u32, words: &WordList) -> Self {
    Self {
      grid: Grid::new(cols, rows),
      placed_words: vec![],
      unplaced_words: words
        .fittable()
        .iter()
        .chain(words.too_long())
        .map(|word| word.original().to_owned())
        .collect(),
    }
  }

  /// Gives every empty cell an independent uniformly random letter A-Z.
  fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> GenerationResult {
    let grid = self
      .grid
      .map(|cell| cell.unwrap_or_else(|| random_letter(rng)));
    GenerationResult {
      grid,
      placed_words: self.placed_words,
      unplaced_words: self.unplaced_words,
    }
  }
}

pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
  (b'A' + rng.random_range(0..26u8)) as char
}

#[derive(Clone, Debug)]
pub struct WordSearchGenerator {
  config: GenerationConfig,
}

impl WordSearchGenerator {
  pub fn new(config: GenerationConfig) -> WordSearchResult<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &GenerationConfig {
    &self.config
  }

  pub fn generate<R: Rng + ?Sized>(&self, names: &[String], rng: &mut R) -> GenerationResult {
    self.generate_until(names, rng, || false).result
  }

  /// Like `generate`, but fails with `WordSearchError::Cancelled` once
  /// `cancelled` is set. The flag is checked between grid attempts.
  pub fn generate_cancellable<R: Rng + ?Sized>(
    &self,
    names: &[String],
    rng: &mut R,
    cancelled: &AtomicBool,
  ) -> WordSearchResult<Generation> {
    let generation = self.generate_until(names, rng, || cancelled.load(Ordering::Relaxed));
    if generation.stats.cancelled {
      Err(WordSearchError::Cancelled.into())
    } else {
      Ok(generation)
    }
  }

  /// Runs grid attempts until one places every fittable word, the attempt
  /// limit is reached, or `should_stop` returns true. The earliest attempt
  /// with the most placed words wins.
  pub fn generate_until<R, F>(&self, names: &[String], rng: &mut R, should_stop: F) -> Generation
  where
    R: Rng + ?Sized,
    F: Fn() -> bool,
  {
    let GenerationConfig { rows, cols, maintain_surnames, .. } = self.config;
    let words = WordList::from_names(names, maintain_surnames, rows, cols);

    let (elapsed, (best, stats)) = time_fn(|| self.search(&words, rng, should_stop));
    let best = best.unwrap_or_else(|| BestAttempt::nothing_placed(rows, cols, &words));
    let result = best.fill(rng);

    info!(
      attempts = stats.attempts,
      best_attempt = stats.best_attempt,
      placed = result.placed_words.len(),
      unplaced = result.unplaced_words.len(),
      cancelled = stats.cancelled,
      ?elapsed,
      "Generated {rows}x{cols} word search"
    );

    Generation { result, stats }
  }

  fn search<R, F>(
    &self,
    words: &WordList,
    rng: &mut R,
    should_stop: F,
  ) -> (Option<BestAttempt>, GenerationStats)
  where
    R: Rng + ?Sized,
    F: Fn() -> bool,
  {
    let mut buckets = LengthBuckets::new(words.fittable());
    let mut order = Vec::with_capacity(words.fittable().len());
    let mut attempt = Attempt::new(self.config.rows, self.config.cols);
    let mut best: Option<BestAttempt> = None;
    let mut stats = GenerationStats::default();

    for index in 0..self.config.max_grid_attempts {
      if should_stop() {
        debug!(attempt = index, "Generation cancelled");
        stats.cancelled = true;
        break;
      }

      buckets.shuffle_into(rng, &mut order);
      attempt.build(&order, self.config.max_placement_attempts, rng);
      stats.attempts += 1;

      let placed = attempt.placed().len();
      if best.as_ref().is_none_or(|best| placed > best.placed_words.len()) {
        debug!(attempt = index, placed, unplaced = attempt.unplaced().len(), "New best attempt");
        best = Some(BestAttempt::from_attempt(&attempt, words.too_long()));
        stats.best_attempt = index;
      }

      if attempt.unplaced().is_empty() {
        break;
      }
    }

    (best, stats)
  }
}

/// One-shot generation with default attempt limits.
pub fn generate_word_search<R: Rng + ?Sized>(
  names: &[String],
  rows: u32,
  cols: u32,
  maintain_surnames: bool,
  rng: &mut R,
) -> WordSearchResult<GenerationResult> {
  let generator = WordSearchGenerator::new(GenerationConfig {
    maintain_surnames,
    ..GenerationConfig::new(rows, cols)
  })?;
  Ok(generator.generate(names, rng))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::{cell::Cell, sync::atomic::AtomicBool};

  use googletest::prelude::*;
  use itertools::Itertools;
  use rand::{rngs::StdRng, SeedableRng};
  use util::{
    error::{as_word_search_error, WordSearchError},
    grid::{Grid, Gridlike},
  };

  use crate::{
    placement::{word_letter_positions, Direction, Placement},
    word::Word,
  };

  use super::{
    generate_word_search, GenerationConfig, GenerationResult, PuzzleStatus, WordSearchGenerator,
  };

  fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
  }

  fn generator(rows: u32, cols: u32, maintain_surnames: bool) -> WordSearchGenerator {
    WordSearchGenerator::new(GenerationConfig {
      maintain_surnames,
      ..GenerationConfig::new(rows, cols)
    })
    .unwrap()
  }

  fn read_back(grid: &Grid<char>, placement: &Placement, clean: &str) -> String {
    word_letter_positions(clean, placement.start(), placement.direction)
      .filter_map(|(_, pos)| grid.get(pos).copied())
      .collect()
  }

  fn expect_well_formed(result: &GenerationResult, rows: u32, cols: u32) {
    expect_that!(result.rows(), eq(rows));
    expect_that!(result.cols(), eq(cols));
    expect_that!(result.grid.rows().count(), eq(rows as usize));
    expect_true!(result.grid.cells().all(|c| c.is_ascii_uppercase()));
  }

  #[gtest]
  fn test_two_short_names_fit() {
    let result =
      generator(3, 3, false).generate(&names(&["Ann", "Bo"]), &mut StdRng::seed_from_u64(1));

    expect_well_formed(&result, 3, 3);
    expect_that!(result.unplaced_words.len(), eq(0));
    expect_that!(result.status(), eq(PuzzleStatus::Success));
    for placement in &result.placed_words {
      let clean = Word::new(placement.word.as_str(), false);
      expect_that!(read_back(&result.grid, placement, clean.clean()), eq(clean.clean()));
    }
  }

  #[gtest]
  fn test_too_long_name_is_unplaced() {
    let generation = generator(5, 5, false).generate_until(
      &names(&["Supercalifragilisticexpialidocious"]),
      &mut StdRng::seed_from_u64(2),
      || false,
    );

    expect_well_formed(&generation.result, 5, 5);
    expect_that!(generation.result.placed_words.len(), eq(0));
    expect_that!(
      generation.result.unplaced_words,
      container_eq(["Supercalifragilisticexpialidocious".to_owned()])
    );
    expect_that!(generation.result.status(), eq(PuzzleStatus::Impossible));
    expect_that!(generation.stats.attempts, eq(1));
  }

  #[gtest]
  fn test_surname_kept() {
    let result =
      generator(10, 10, true).generate(&names(&["Mary Jane"]), &mut StdRng::seed_from_u64(3));

    assert_that!(result.placed_words.len(), eq(1));
    let placement = &result.placed_words[0];
    expect_that!(placement.word, eq("Mary Jane"));
    expect_that!(read_back(&result.grid, placement, "MARYJANE"), eq("MARYJANE"));
  }

  #[gtest]
  fn test_surname_dropped() {
    // Only MARY fits in a 4x4 grid; the surname never takes up space.
    let result =
      generator(4, 4, false).generate(&names(&["Mary Jane"]), &mut StdRng::seed_from_u64(4));

    assert_that!(result.placed_words.len(), eq(1));
    expect_that!(read_back(&result.grid, &result.placed_words[0], "MARY"), eq("MARY"));
    expect_that!(result.unplaced_words.len(), eq(0));
  }

  #[gtest]
  fn test_non_ascii_letters_only_where_placed() {
    let result = generator(3, 3, false).generate(&names(&["Zoë"]), &mut StdRng::seed_from_u64(5));

    assert_that!(result.placed_words.len(), eq(1));
    expect_that!(read_back(&result.grid, &result.placed_words[0], "ZOË"), eq("ZOË"));
    expect_that!(result.grid.cells().filter(|c| !c.is_ascii_uppercase()).count(), eq(1));
  }

  #[gtest]
  fn test_every_name_accounted_for() {
    let input = names(&[
      "Ann",
      "Ann",
      "Bob Smith",
      "Cy",
      "Supercalifragilisticexpialidocious",
      "  ",
    ]);
    let result = generator(6, 6, false).generate(&input, &mut StdRng::seed_from_u64(5));

    expect_well_formed(&result, 6, 6);
    expect_that!(
      result
        .placed_words
        .iter()
        .map(|placement| placement.word.clone())
        .chain(result.unplaced_words.iter().cloned())
        .sorted()
        .collect::<Vec<_>>(),
      container_eq(input.iter().cloned().sorted().collect::<Vec<_>>())
    );
    expect_that!(
      result.unplaced_words,
      superset_of([&"Supercalifragilisticexpialidocious".to_owned(), &"  ".to_owned()])
    );
  }

  #[gtest]
  fn test_same_seed_same_result() {
    let input = names(&["Alexandra", "Ben", "Catherine", "Dmitri", "Eve", "Fitzgerald"]);
    let generator = generator(8, 8, false);
    let first = generator.generate(&input, &mut StdRng::seed_from_u64(42));
    let second = generator.generate(&input, &mut StdRng::seed_from_u64(42));
    expect_that!(first, eq(&second));
  }

  #[gtest]
  fn test_stops_after_full_placement() {
    let generation = generator(15, 15, false).generate_until(
      &names(&["Ann", "Bo", "Cy"]),
      &mut StdRng::seed_from_u64(6),
      || false,
    );
    expect_that!(generation.stats.attempts, eq(1));
    expect_that!(generation.stats.best_attempt, eq(0));
    expect_false!(generation.stats.cancelled);
  }

  #[gtest]
  fn test_runs_every_attempt_when_placement_impossible() {
    let generator = WordSearchGenerator::new(GenerationConfig {
      max_grid_attempts: 7,
      max_placement_attempts: 3,
      ..GenerationConfig::new(1, 1)
    })
    .unwrap();
    let generation =
      generator.generate_until(&names(&["A", "B"]), &mut StdRng::seed_from_u64(7), || false);

    expect_that!(generation.stats.attempts, eq(7));
    // Every attempt places exactly one word, so the first one is kept.
    expect_that!(generation.stats.best_attempt, eq(0));
    expect_that!(generation.result.placed_words.len(), eq(1));
    expect_that!(generation.result.unplaced_words.len(), eq(1));
  }

  #[gtest]
  fn test_invalid_dimensions() {
    let result = WordSearchGenerator::new(GenerationConfig::new(0, 5));
    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    expect_true!(matches!(
      as_word_search_error(error.as_ref()),
      Some(WordSearchError::InvalidConfig(_))
    ));

    expect_that!(
      generate_word_search(&names(&["Ann"]), 3, 0, false, &mut StdRng::seed_from_u64(0)),
      err(anything())
    );
    expect_that!(
      WordSearchGenerator::new(GenerationConfig {
        max_grid_attempts: 0,
        ..GenerationConfig::default()
      }),
      err(anything())
    );
  }

  #[gtest]
  fn test_cancelled_before_first_attempt() {
    let cancelled = AtomicBool::new(true);
    let result = generator(5, 5, false).generate_cancellable(
      &names(&["Ann"]),
      &mut StdRng::seed_from_u64(9),
      &cancelled,
    );
    assert_that!(result, err(anything()));
    expect_that!(
      as_word_search_error(result.unwrap_err().as_ref()),
      eq(Some(&WordSearchError::Cancelled))
    );
  }

  #[gtest]
  fn test_stop_between_attempts() {
    let generator = WordSearchGenerator::new(GenerationConfig {
      max_grid_attempts: 100,
      max_placement_attempts: 1,
      ..GenerationConfig::new(1, 1)
    })
    .unwrap();
    let checks = Cell::new(0);
    let generation =
      generator.generate_until(&names(&["A", "B"]), &mut StdRng::seed_from_u64(10), || {
        checks.set(checks.get() + 1);
        checks.get() > 3
      });

    expect_that!(generation.stats.attempts, eq(3));
    expect_true!(generation.stats.cancelled);
    expect_well_formed(&generation.result, 1, 1);
  }

  #[gtest]
  fn test_json_shape() {
    let result = GenerationResult {
      grid: Grid::from_vec(vec!['A', 'N', 'N'], 3, 1).unwrap(),
      placed_words: vec![Placement {
        word: "Ann".to_owned(),
        start_row: 0,
        start_col: 0,
        direction: Direction::Horizontal,
      }],
      unplaced_words: vec!["Bob".to_owned()],
    };
    expect_that!(
      serde_json::to_string(&result).unwrap(),
      eq(concat!(
        r#"{"grid":[["A","N","N"]],"#,
        r#""placedWords":[{"word":"Ann","startRow":0,"startCol":0,"direction":"horizontal"}],"#,
        r#""unplacedWords":["Bob"]}"#
      ))
    );
  }
}

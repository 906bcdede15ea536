use rand::Rng;
use util::{
  grid::{Grid, Gridlike},
  pos::Pos,
};

use crate::{
  placement::{can_place, place, Cell, Direction, Placement},
  word::Word,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedWord<'w> {
  pub word: &'w Word,
  pub start: Pos,
  pub direction: Direction,
}

impl PlacedWord<'_> {
  pub fn to_placement(&self) -> Placement {
    Placement {
      word: self.word.original().to_owned(),
      start_row: self.start.row(),
      start_col: self.start.col(),
      direction: self.direction,
    }
  }
}

/// Buffers for one grid attempt. They are reset, not reallocated, between
/// attempts.
#[derive(Clone, Debug)]
pub struct Attempt<'w> {
  grid: Grid<Cell>,
  placed: Vec<PlacedWord<'w>>,
  unplaced: Vec<&'w Word>,
}

impl<'w> Attempt<'w> {
  pub fn new(rows: u32, cols: u32) -> Self {
    Self { grid: Grid::new(cols, rows), placed: vec![], unplaced: vec![] }
  }

  pub fn reset(&mut self) {
    self.grid.clear();
    self.placed.clear();
    self.unplaced.clear();
  }

  /// Places `words` in order into an empty grid. Each word gets up to
  /// `max_placement_attempts` random probes, then a row-major scan of every
  /// direction.
  pub fn build<R: Rng + ?Sized>(
    &mut self,
    words: &[&'w Word],
    max_placement_attempts: u32,
    rng: &mut R,
  ) {
    self.reset();
    for &word in words {
      match self.find_position(word, max_placement_attempts, rng) {
        Some((start, direction)) => {
          place(&mut self.grid, word.clean(), start, direction);
          self.placed.push(PlacedWord { word, start, direction });
        }
        None => self.unplaced.push(word),
      }
    }
  }

  fn find_position<R: Rng + ?Sized>(
    &self,
    word: &Word,
    max_placement_attempts: u32,
    rng: &mut R,
  ) -> Option<(Pos, Direction)> {
    self
      .probe(word, max_placement_attempts, rng)
      .or_else(|| self.scan(word))
  }

  fn probe<R: Rng + ?Sized>(
    &self,
    word: &Word,
    max_placement_attempts: u32,
    rng: &mut R,
  ) -> Option<(Pos, Direction)> {
    (0..max_placement_attempts).find_map(|_| {
      let direction = Direction::random(rng);
      let row = rng.random_range(0..self.grid.height());
      let col = rng.random_range(0..self.grid.width());
      let start = Pos::from_row_col(row, col);
      can_place(&self.grid, word.clean(), start, direction).then_some((start, direction))
    })
  }

  fn scan(&self, word: &Word) -> Option<(Pos, Direction)> {
    Direction::ALL.into_iter().find_map(|direction| {
      self
        .grid
        .positions()
        .find(|&start| can_place(&self.grid, word.clean(), start, direction))
        .map(|start| (start, direction))
    })
  }

  pub fn grid(&self) -> &Grid<Cell> {
    &self.grid
  }

  pub fn placed(&self) -> &[PlacedWord<'w>] {
    &self.placed
  }

  pub fn unplaced(&self) -> &[&'w Word] {
    &self.unplaced
  }
}

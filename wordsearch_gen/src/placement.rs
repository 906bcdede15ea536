use bitcode::{Decode, Encode};
use rand::Rng;
use serde::Serialize;
use util::{
  grid::{Gridlike, MutGridlike},
  pos::{Diff, Pos},
};

/// A grid cell while words are being placed. `None` is empty.
pub type Cell = Option<char>;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Encode, Decode, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Horizontal,
  Vertical,
  Diagonal,
}

impl Direction {
  /// Declared order, which is also the systematic scan order.
  pub const ALL: [Direction; 3] = [Direction::Horizontal, Direction::Vertical, Direction::Diagonal];

  pub const fn diff(self) -> Diff {
    match self {
      Direction::Horizontal => Diff::DX,
      Direction::Vertical => Diff::DY,
      Direction::Diagonal => Diff::DXY,
    }
  }

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Self::ALL[rng.random_range(0..Self::ALL.len())]
  }
}

/// Where a name ended up in the finished puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
  /// The name as entered, not the clean token.
  pub word: String,
  pub start_row: u32,
  pub start_col: u32,
  pub direction: Direction,
}

impl Placement {
  pub fn start(&self) -> Pos {
    Pos::from_row_col(self.start_row, self.start_col)
  }
}

pub fn word_letter_positions(
  clean: &str,
  start: Pos,
  direction: Direction,
) -> impl Iterator<Item = (char, Pos)> + '_ {
  let diff = direction.diff();
  clean
    .chars()
    .enumerate()
    .map(move |(idx, c)| (c, start + idx as i32 * diff))
}

/// Every letter must land in bounds, on an empty cell or on a cell already
/// holding the same letter.
pub fn can_place<G: Gridlike<Cell>>(
  grid: &G,
  clean: &str,
  start: Pos,
  direction: Direction,
) -> bool {
  word_letter_positions(clean, start, direction).all(|(c, pos)| match grid.get(pos) {
    Some(Some(existing)) => *existing == c,
    Some(None) => true,
    None => false,
  })
}

/// Writes the word into the grid. Callers check `can_place` first.
pub fn place<G: MutGridlike<Cell>>(grid: &mut G, clean: &str, start: Pos, direction: Direction) {
  debug_assert!(can_place(&*grid, clean, start, direction));
  for (c, pos) in word_letter_positions(clean, start, direction) {
    if let Some(tile) = grid.get_mut(pos) {
      *tile = Some(c);
    }
  }
}

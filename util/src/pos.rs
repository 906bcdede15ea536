use std::ops::{Add, Mul};

/// A grid coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn from_row_col(row: u32, col: u32) -> Self {
    Self { x: col as i32, y: row as i32 }
  }

  /// Only meaningful for in-bounds positions, which are never negative.
  pub const fn row(&self) -> u32 {
    self.y as u32
  }

  pub const fn col(&self) -> u32 {
    self.x as u32
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  pub const DX: Self = Self { x: 1, y: 0 };
  pub const DY: Self = Self { x: 0, y: 1 };
  pub const DXY: Self = Self { x: 1, y: 1 };
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}

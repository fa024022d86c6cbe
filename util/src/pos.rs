use std::{
  fmt::Display,
  ops::{Add, Sub},
  str::FromStr,
};

use crate::error::BoggleError;

/// A grid coordinate. `y` is the row and `x` is the column.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }
}

impl Sub for Pos {
  type Output = Diff;

  fn sub(self, rhs: Self) -> Diff {
    Diff { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// Parses `"x,y"`, with optional surrounding parentheses and whitespace.
impl FromStr for Pos {
  type Err = BoggleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = trimmed
      .split_once(',')
      .ok_or_else(|| BoggleError::Parse(format!("Expected \"x,y\", found \"{s}\"")))?;
    let parse_axis = |axis: &str| {
      axis
        .trim()
        .parse::<i32>()
        .map_err(|err| BoggleError::Parse(format!("Bad coordinate \"{axis}\" in \"{s}\": {err}")))
    };
    Ok(Self { x: parse_axis(x)?, y: parse_axis(y)? })
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  /// True if this step moves at most one cell along each axis, i.e. it
  /// connects two king-move neighbors (or stays in place).
  pub const fn is_unit_step(&self) -> bool {
    self.x.abs() < 2 && self.y.abs() < 2
  }
}

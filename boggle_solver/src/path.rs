use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use util::{error::BoggleError, pos::Pos};

/// An ordered route of board positions.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Path(Vec<Pos>);

impl Path {
  pub fn new(positions: Vec<Pos>) -> Self {
    Self(positions)
  }

  pub fn start(pos: Pos) -> Self {
    Self(vec![pos])
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn last(&self) -> Option<Pos> {
    self.0.last().copied()
  }

  pub fn contains(&self, pos: Pos) -> bool {
    self.0.contains(&pos)
  }

  pub fn positions(&self) -> &[Pos] {
    &self.0
  }

  /// Copy of this path with `pos` appended.
  pub fn extended(&self, pos: Pos) -> Self {
    let mut positions = Vec::with_capacity(self.0.len() + 1);
    positions.extend_from_slice(&self.0);
    positions.push(pos);
    Self(positions)
  }

  pub fn has_repeats(&self) -> bool {
    !self.0.iter().all_unique()
  }
}

impl FromIterator<Pos> for Path {
  fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl Display for Path {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.iter().join(" "))
  }
}

/// Parses whitespace-separated `x,y` pairs. At least one pair is required.
impl FromStr for Path {
  type Err = BoggleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let path = s
      .split_whitespace()
      .map(str::parse::<Pos>)
      .collect::<Result<Self, _>>()?;
    if path.is_empty() {
      return Err(BoggleError::Parse("Path has no positions".to_owned()));
    }
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::Path;

  #[gtest]
  fn test_extended_leaves_original() {
    let path = Path::start(Pos::zero());
    let longer = path.extended(Pos { x: 1, y: 0 });
    expect_eq!(path.len(), 1);
    expect_that!(
      longer.positions().to_vec(),
      container_eq([Pos::zero(), Pos { x: 1, y: 0 }])
    );
    expect_that!(longer.last(), some(eq(Pos { x: 1, y: 0 })));
  }

  #[gtest]
  fn test_repeats() {
    expect_false!(Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }]).has_repeats());
    expect_true!(Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }, Pos::zero()]).has_repeats());
  }

  #[gtest]
  fn test_parse() {
    let path = "0,0 1,0  (1,1)".parse::<Path>();
    assert_that!(path, ok(anything()));
    expect_that!(
      path.unwrap().positions().to_vec(),
      container_eq([Pos::zero(), Pos { x: 1, y: 0 }, Pos { x: 1, y: 1 }])
    );
    expect_that!("0,0 1".parse::<Path>(), err(anything()));
  }

  #[gtest]
  fn test_parse_empty() {
    expect_that!("".parse::<Path>(), err(anything()));
    expect_that!("  \t ".parse::<Path>(), err(anything()));
  }

  #[gtest]
  fn test_display() {
    let path = Path::new(vec![Pos::zero(), Pos { x: 1, y: 1 }]);
    let displayed = path.to_string();
    expect_eq!(displayed.as_str(), "(0, 0) (1, 1)");
  }
}

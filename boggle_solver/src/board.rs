use std::fmt::Display;

use boggle_dict::canonicalize_word;
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use util::{
  error::{BoggleError, BoggleResult},
  grid::{Grid, Gridlike},
  pos::Pos,
};

use crate::{adjacency, path::Path};

pub const BOARD_SIZE: u32 = 4;

/// The sixteen dice of the classic game. The Q face always reads "QU".
#[rustfmt::skip]
const DICE: [[&str; 6]; 16] = [
  ["A", "A", "E", "E", "G", "N"], ["A", "B", "B", "J", "O", "O"],
  ["A", "C", "H", "O", "P", "S"], ["A", "F", "F", "K", "P", "S"],
  ["A", "O", "O", "T", "T", "W"], ["C", "I", "M", "O", "T", "U"],
  ["D", "E", "I", "L", "R", "X"], ["D", "E", "L", "R", "V", "Y"],
  ["D", "I", "S", "T", "T", "Y"], ["E", "E", "G", "H", "N", "W"],
  ["E", "E", "I", "N", "S", "U"], ["E", "H", "R", "T", "V", "W"],
  ["E", "I", "O", "S", "S", "T"], ["E", "L", "R", "T", "T", "Y"],
  ["H", "I", "M", "N", "QU", "U"], ["H", "L", "N", "N", "R", "Z"],
];

/// A 4x4 grid of uppercase, non-empty cell strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
  grid: Grid<String>,
}

impl Board {
  fn parse_cell(cell: &str) -> BoggleResult<String> {
    let cell = canonicalize_word(cell);
    if cell.is_empty() {
      return Err(BoggleError::Parse("Board cells must not be empty".to_owned()).into());
    }
    Ok(cell)
  }

  pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> BoggleResult<Self>
  where
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let (height, cells) = rows.into_iter().try_fold(
      (0, Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize)),
      |(height, mut cells), row| -> BoggleResult<_> {
        let row = row
          .into_iter()
          .map(|cell| Self::parse_cell(cell.as_ref()))
          .collect::<BoggleResult<Vec<_>>>()?;
        if row.len() != BOARD_SIZE as usize {
          return Err(
            BoggleError::Parse(format!(
              "Board row {height} has {} cells, expected {BOARD_SIZE}",
              row.len()
            ))
            .into(),
          );
        }
        cells.extend(row);
        Ok((height + 1, cells))
      },
    )?;

    if height != BOARD_SIZE {
      return Err(
        BoggleError::Parse(format!("Board has {height} rows, expected {BOARD_SIZE}")).into(),
      );
    }

    Ok(Self { grid: Grid::from_vec(cells, BOARD_SIZE, BOARD_SIZE)? })
  }

  /// Parses four lines of four whitespace-separated cells, e.g. `QU E E N`.
  /// Blank lines are ignored.
  pub fn from_layout(layout: &str) -> BoggleResult<Self> {
    Self::from_rows(
      layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::split_whitespace),
    )
  }

  /// Shuffles the dice into the grid and rolls each one.
  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> BoggleResult<Self> {
    let mut dice = DICE;
    dice.shuffle(rng);
    let cells = dice
      .iter()
      .map(|die| die[rng.random_range(0..die.len())].to_owned())
      .collect();

    Ok(Self { grid: Grid::from_vec(cells, BOARD_SIZE, BOARD_SIZE)? })
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  pub fn in_bounds(&self, pos: Pos) -> bool {
    self.grid.in_bounds(pos)
  }

  pub fn cell(&self, pos: Pos) -> Option<&str> {
    self.grid.get(pos).map(|cell| cell.as_str())
  }

  /// Every board position in row-major order.
  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    self.grid.positions()
  }

  /// Neighbors of `pos` in the order the search visits them.
  pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = (Pos, &str)> + '_ {
    adjacency::neighbors(pos).flat_map(move |neighbor| {
      self.cell(neighbor).map(|cell| (neighbor, cell))
    })
  }

  /// The string spelled by `path`, or `None` if it leaves the board.
  pub fn spell(&self, path: &Path) -> Option<String> {
    path.positions().iter().map(|&pos| self.cell(pos)).collect()
  }

  /// How many characters beyond one the multi-letter cells contribute in
  /// total.
  pub fn extra_len(&self) -> usize {
    self
      .grid
      .iter()
      .map(|cell| cell.chars().count().saturating_sub(1))
      .sum()
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height()).try_fold((), |_, y| {
      let row = self
        .grid
        .iter_row(y)
        .map(|cell| format!("{cell:<2}"))
        .join(" ");
      writeln!(f, "{}", row.trim_end())
    })
  }
}

use util::pos::{Diff, Pos};

use crate::board::BOARD_SIZE;

/// King-move offsets, scanned column offset first.
pub const NEIGHBOR_OFFSETS: [Diff; 8] = [
  Diff { x: -1, y: -1 },
  Diff { x: -1, y: 0 },
  Diff { x: -1, y: 1 },
  Diff { x: 0, y: -1 },
  Diff { x: 0, y: 1 },
  Diff { x: 1, y: -1 },
  Diff { x: 1, y: 0 },
  Diff { x: 1, y: 1 },
];

pub fn in_bounds(pos: Pos) -> bool {
  (0..BOARD_SIZE as i32).contains(&pos.x) && (0..BOARD_SIZE as i32).contains(&pos.y)
}

pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
  NEIGHBOR_OFFSETS
    .into_iter()
    .map(move |offset| pos + offset)
    .filter(|&neighbor| in_bounds(neighbor))
}

pub fn is_adjacent(a: Pos, b: Pos) -> bool {
  (b - a).is_unit_step()
}

use util::pos::Pos;

use crate::{board::Board, path::Path, prefix::is_prefix};

/// Everything a search for one word from one starting cell turned up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
  /// Paths whose cells spell the whole word, in depth-first order.
  pub complete: Vec<Path>,
  /// Partial matches with nowhere left to go: no neighbor continues the word,
  /// or every neighbor that would is already on the path.
  pub dead_ends: Vec<Path>,
}

struct Frame {
  path: Path,
  /// Bytes of the word matched by every cell of `path` except the last.
  consumed: usize,
}

/// Enumerates every non-repeating path starting at `start` whose cells spell
/// `word` exactly. `word` must already be canonical (trimmed and uppercase).
///
/// Each branch owns its own copy of the path, so no undo step is needed when
/// the search backs out of a branch. Children are pushed in reverse so they
/// are expanded in neighbor order, which keeps results in the same order a
/// recursive depth-first walk would produce.
pub fn find_word(board: &Board, word: &str, start: Pos) -> SearchOutcome {
  let mut outcome = SearchOutcome::default();
  let mut stack = vec![Frame { path: Path::start(start), consumed: 0 }];

  while let Some(Frame { path, consumed }) = stack.pop() {
    let Some(pos) = path.last() else {
      continue;
    };
    let Some(remaining) = word.get(consumed..) else {
      continue;
    };
    let Some(cell) = board.cell(pos).filter(|cell| is_prefix(cell, remaining)) else {
      continue;
    };

    let consumed = consumed + cell.len();
    let remaining = &remaining[cell.len()..];
    if remaining.is_empty() {
      outcome.complete.push(path);
      continue;
    }

    let extensions: Vec<_> = board
      .neighbors(pos)
      .filter(|&(neighbor, neighbor_cell)| {
        !path.contains(neighbor) && is_prefix(neighbor_cell, remaining)
      })
      .map(|(neighbor, _)| path.extended(neighbor))
      .collect();

    if extensions.is_empty() {
      outcome.dead_ends.push(path);
      continue;
    }

    stack.extend(
      extensions
        .into_iter()
        .rev()
        .map(|path| Frame { path, consumed }),
    );
  }

  log::trace!(
    "{word} from {start}: {} complete, {} dead ends",
    outcome.complete.len(),
    outcome.dead_ends.len()
  );
  outcome
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use crate::{board::Board, path::Path};

  use super::find_word;

  fn alphabet_board() -> Board {
    Board::from_layout(
      "A B C D
       E F G H
       I J K L
       M N O P",
    )
    .unwrap()
  }

  #[gtest]
  fn test_finds_adjacent_word() {
    let outcome = find_word(&alphabet_board(), "ABF", Pos::zero());
    expect_that!(
      outcome.complete,
      container_eq([Path::new(vec![
        Pos::zero(),
        Pos { x: 1, y: 0 },
        Pos { x: 1, y: 1 },
      ])])
    );
  }

  #[gtest]
  fn test_non_adjacent_word() {
    let outcome = find_word(&alphabet_board(), "ACP", Pos::zero());
    expect_true!(outcome.complete.is_empty());
    expect_that!(outcome.dead_ends, container_eq([Path::start(Pos::zero())]));
  }

  #[gtest]
  fn test_dead_end_after_partial_match() {
    let outcome = find_word(&alphabet_board(), "ABZ", Pos::zero());
    expect_true!(outcome.complete.is_empty());
    expect_that!(
      outcome.dead_ends,
      container_eq([Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }])])
    );
  }

  #[gtest]
  fn test_dead_end_when_only_match_is_visited() {
    let outcome = find_word(&alphabet_board(), "ABA", Pos::zero());
    expect_true!(outcome.complete.is_empty());
    expect_that!(
      outcome.dead_ends,
      container_eq([Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }])])
    );
  }

  #[gtest]
  fn test_start_must_match() {
    let outcome = find_word(&alphabet_board(), "BAD", Pos::zero());
    expect_true!(outcome.complete.is_empty());
    expect_true!(outcome.dead_ends.is_empty());
  }

  #[gtest]
  fn test_all_branches_in_neighbor_order() {
    let board = Board::from_layout(
      "B A B C
       D E F G
       H I J K
       L M N O",
    )
    .unwrap();
    let outcome = find_word(&board, "AB", Pos { x: 1, y: 0 });
    expect_that!(
      outcome.complete,
      container_eq([
        Path::new(vec![Pos { x: 1, y: 0 }, Pos { x: 0, y: 0 }]),
        Path::new(vec![Pos { x: 1, y: 0 }, Pos { x: 2, y: 0 }]),
      ])
    );
  }

  #[gtest]
  fn test_no_cell_reuse() {
    let board = Board::from_layout(
      "A B C D
       E F G H
       I J K L
       M N O P",
    )
    .unwrap();
    expect_true!(find_word(&board, "ABA", Pos::zero()).complete.is_empty());
    expect_true!(find_word(&board, "ABFEA", Pos::zero()).complete.is_empty());
  }

  #[gtest]
  fn test_repeated_letters_use_distinct_cells() {
    let board = Board::from_layout(
      "A A X X
       X X X X
       X X X X
       X X X X",
    )
    .unwrap();
    let outcome = find_word(&board, "AAA", Pos::zero());
    expect_true!(outcome.complete.is_empty());
    let outcome = find_word(&board, "AA", Pos::zero());
    expect_that!(
      outcome.complete,
      container_eq([Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }])])
    );
  }

  #[gtest]
  fn test_multi_letter_cell() {
    let board = Board::from_layout(
      "QU E E N
       A B C D
       F G H I
       J K L M",
    )
    .unwrap();
    let outcome = find_word(&board, "QUEEN", Pos::zero());
    expect_that!(
      outcome.complete,
      container_eq([Path::new(vec![
        Pos::zero(),
        Pos { x: 1, y: 0 },
        Pos { x: 2, y: 0 },
        Pos { x: 3, y: 0 },
      ])])
    );
  }

  #[gtest]
  fn test_multi_letter_cell_must_align() {
    let board = Board::from_layout(
      "ST A R E
       S T B C
       D F G H
       I J K L",
    )
    .unwrap();
    // "STAR" can use the "ST" cell or the separate S and T cells.
    let from_multi = find_word(&board, "STAR", Pos::zero());
    expect_that!(
      from_multi.complete,
      container_eq([Path::new(vec![Pos::zero(), Pos { x: 1, y: 0 }, Pos { x: 2, y: 0 }])])
    );
    let from_single = find_word(&board, "STAR", Pos { x: 0, y: 1 });
    expect_that!(
      from_single.complete,
      container_eq([Path::new(vec![
        Pos { x: 0, y: 1 },
        Pos { x: 1, y: 1 },
        Pos { x: 1, y: 0 },
        Pos { x: 2, y: 0 },
      ])])
    );
    // A multi-letter cell can't cover the end of a word partially.
    expect_true!(find_word(&board, "S", Pos::zero()).complete.is_empty());
  }

  #[gtest]
  fn test_every_path_spells_word() {
    let board = Board::from_layout(
      "E E E E
       E E E E
       E E E E
       E E E E",
    )
    .unwrap();
    let outcome = find_word(&board, "EEEE", Pos { x: 1, y: 1 });
    expect_false!(outcome.complete.is_empty());
    for path in &outcome.complete {
      expect_false!(path.has_repeats());
      let spelled = board.spell(path);
      expect_that!(spelled.as_deref(), some(eq("EEEE")));
    }
  }
}

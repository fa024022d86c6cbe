use boggle_dict::canonicalize_word;
use itertools::Itertools;

use crate::{adjacency::is_adjacent, board::Board, path::Path};

/// True if every position is on the board and every step moves to a
/// neighboring cell. Revisits are not checked.
pub fn is_path_legal(board: &Board, path: &Path) -> bool {
  path.positions().iter().all(|&pos| board.in_bounds(pos))
    && path
      .positions()
      .iter()
      .tuple_windows()
      .all(|(&from, &to)| is_adjacent(from, to))
}

/// The word `path` spells, if the path is legal and the word appears in
/// `words`. Entries of `words` are canonicalized before comparison.
pub fn is_valid_path<S>(
  board: &Board,
  path: &Path,
  words: impl IntoIterator<Item = S>,
) -> Option<String>
where
  S: AsRef<str>,
{
  if !is_path_legal(board, path) {
    return None;
  }

  let word = board.spell(path)?;
  words
    .into_iter()
    .any(|candidate| canonicalize_word(candidate.as_ref()) == word)
    .then_some(word)
}

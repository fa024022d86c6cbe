use std::collections::HashSet;

use crate::{
  board::Board,
  filter::{filter_word_length, filter_word_range, max_possible_length},
  path::Path,
  prefix::is_prefix,
  search::find_word,
};

/// Collects, for each word in order and each matching start cell in
/// row-major order, the paths that spell the word and satisfy `keep`,
/// skipping any path already collected.
fn collect_paths(board: &Board, words: &[String], keep: impl Fn(&Path) -> bool) -> Vec<Path> {
  let mut seen = HashSet::new();
  let mut paths = Vec::new();

  for word in words {
    for start in board.positions() {
      if !board.cell(start).is_some_and(|cell| is_prefix(cell, word)) {
        continue;
      }

      for path in find_word(board, word, start).complete {
        if keep(&path)
          && board.spell(&path).as_deref() == Some(word.as_str())
          && seen.insert(path.clone())
        {
          paths.push(path);
        }
      }
    }
  }

  paths
}

/// Every distinct path of exactly `n` cells that spells one of `words`.
///
/// Words up to `n` plus the extra letters of every multi-letter cell are
/// considered, since such cells let a word outgrow its path.
pub fn find_length_n_paths<S>(
  n: usize,
  board: &Board,
  words: impl IntoIterator<Item = S>,
) -> Vec<Path>
where
  S: AsRef<str>,
{
  let candidates = filter_word_range(n, max_possible_length(n, board), words);
  log::debug!("{} candidate words for paths of length {n}", candidates.len());

  let paths = collect_paths(board, &candidates, |path| path.len() == n);
  log::debug!("Found {} paths of length {n}", paths.len());
  paths
}

/// Every distinct path spelling one of the `n`-letter `words`, regardless of
/// how many cells it visits.
pub fn find_length_n_words<S>(
  n: usize,
  board: &Board,
  words: impl IntoIterator<Item = S>,
) -> Vec<Path>
where
  S: AsRef<str>,
{
  let candidates = filter_word_length(n, words);
  log::debug!("{} candidate words of length {n}", candidates.len());

  let paths = collect_paths(board, &candidates, |_| true);
  log::debug!("Found {} paths for words of length {n}", paths.len());
  paths
}

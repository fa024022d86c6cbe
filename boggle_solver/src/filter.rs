use std::ops::RangeInclusive;

use boggle_dict::canonicalize_word;
use itertools::Itertools;

use crate::board::Board;

/// Upper bound on the length of a word that could be spelled by a path of
/// `n` cells on `board`, since each multi-letter cell adds characters without
/// adding a step.
pub fn max_possible_length(n: usize, board: &Board) -> usize {
  n + board.extra_len()
}

fn filter_words<S>(
  words: impl IntoIterator<Item = S>,
  mut keep: impl FnMut(usize) -> bool,
) -> Vec<String>
where
  S: AsRef<str>,
{
  words
    .into_iter()
    .map(|word| canonicalize_word(word.as_ref()))
    .filter(|word| keep(word.chars().count()))
    .unique()
    .collect()
}

/// Canonical words with a length in `n..=m`, deduplicated in input order.
pub fn filter_word_range<S>(n: usize, m: usize, words: impl IntoIterator<Item = S>) -> Vec<String>
where
  S: AsRef<str>,
{
  let lengths: RangeInclusive<usize> = n..=m;
  filter_words(words, |len| lengths.contains(&len))
}

/// Canonical words with exactly `n` characters, deduplicated in input order.
pub fn filter_word_length<S>(n: usize, words: impl IntoIterator<Item = S>) -> Vec<String>
where
  S: AsRef<str>,
{
  filter_words(words, |len| len == n)
}

use boggle_dict::canonicalize_word;

use crate::{board::Board, enumerate::find_length_n_words, path::Path};

/// Picks the path to score `word` by: the first path with one cell per
/// letter, otherwise the first of the longest paths.
pub fn find_max_path<'a>(paths: &'a [Path], word: &str) -> Option<&'a Path> {
  let word_len = word.chars().count();
  if let Some(exact) = paths.iter().find(|path| path.len() == word_len) {
    return Some(exact);
  }

  paths.iter().fold(None, |longest: Option<&Path>, path| match longest {
    Some(longest) if longest.len() >= path.len() => Some(longest),
    _ => Some(path),
  })
}

/// One scoring path per word that can be found on `board`, in the order the
/// words are given. Words with no path are left out.
pub fn max_score_paths<S>(board: &Board, words: impl IntoIterator<Item = S>) -> Vec<Path>
where
  S: AsRef<str>,
{
  words
    .into_iter()
    .filter_map(|word| {
      let word = canonicalize_word(word.as_ref());
      let paths = find_length_n_words(word.chars().count(), board, [word.as_str()]);
      find_max_path(&paths, &word).cloned()
    })
    .collect()
}

use std::{fs, path::Path};

use itertools::Itertools;
use util::error::{BoggleError, BoggleResult};

/// Words are compared against board cells in uppercase, with surrounding
/// whitespace removed.
pub fn canonicalize_word(word: &str) -> String {
  word.trim().to_uppercase()
}

/// An insertion-ordered, deduplicated list of canonical words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
  words: Vec<String>,
}

impl WordList {
  fn parse_line(line: &str) -> BoggleResult<Option<String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      return Ok(None);
    }

    if !line.chars().all(|c| c.is_alphabetic()) {
      return Err(BoggleError::Parse(format!("\"{line}\" is not a single alphabetic word")).into());
    }

    Ok(Some(canonicalize_word(line)))
  }

  pub fn parse<S>(lines: impl IntoIterator<Item = S>) -> BoggleResult<Self>
  where
    S: AsRef<str>,
  {
    let words = lines
      .into_iter()
      .enumerate()
      .map(|(idx, line)| {
        Self::parse_line(line.as_ref())
          .map_err(|err| BoggleError::Parse(format!("Failed to parse line {}: {err}", idx + 1)))
      })
      .filter_map_ok(|word| word)
      .collect::<Result<Vec<_>, _>>()?
      .into_iter()
      .unique()
      .collect();

    Ok(Self { words })
  }

  pub fn load(path: impl AsRef<Path>) -> BoggleResult<Self> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let list = Self::parse(contents.lines())?;
    if list.is_empty() {
      log::warn!("No words in {}", path.display());
    } else {
      log::info!("Loaded {} words from {}", list.len(), path.display());
    }
    Ok(list)
  }

  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(|word| word.as_str())
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

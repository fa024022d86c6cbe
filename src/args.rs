use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
  /// Every path of exactly `--length` cells spelling a word.
  Paths,
  /// Every path spelling a word of exactly `--length` letters.
  Words,
  /// One scoring path per findable word.
  MaxScore,
  /// Check whether `--path` spells a word.
  Check,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, default_value = "words")]
  pub mode: RunMode,

  /// Board file: four lines of four whitespace-separated cells.
  #[arg(long, conflicts_with = "random", required_unless_present = "random")]
  pub board: Option<PathBuf>,

  /// Roll a random board instead of reading one.
  #[arg(long)]
  pub random: bool,

  #[arg(long, requires = "random")]
  pub seed: Option<u64>,

  /// Word list file, one word per line.
  #[arg(long)]
  pub dict: PathBuf,

  #[arg(long, default_value_t = 3)]
  pub length: usize,

  /// Whitespace-separated `x,y` positions, where `y` is the row.
  #[arg(long, required_if_eq("mode", "check"))]
  pub path: Option<String>,

  #[arg(long)]
  pub debug: bool,
}

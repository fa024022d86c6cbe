#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod logger;

use std::{env, fs};

use args::{Args, RunMode};
use boggle_dict::WordList;
use boggle_solver::{
  find_length_n_paths, find_length_n_words, is_valid_path, max_score_paths, Board, Path,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use util::{error::BoggleResult, time::time_fn};

fn load_board(args: &Args) -> BoggleResult<Board> {
  match (&args.board, args.seed) {
    (Some(path), _) => Board::from_layout(&fs::read_to_string(path)?),
    (None, Some(seed)) => Board::random(&mut StdRng::seed_from_u64(seed)),
    (None, None) => Board::random(&mut rand::rng()),
  }
}

fn check_path(args: &Args, board: &Board, words: &WordList) -> BoggleResult<Vec<Path>> {
  let path: Path = args.path.as_deref().unwrap_or_default().parse()?;
  Ok(match is_valid_path(board, &path, words.words()) {
    Some(word) => {
      log::info!("{path} spells {word}");
      vec![path]
    }
    None => {
      log::info!("{path} does not spell a word");
      vec![]
    }
  })
}

fn run(args: &Args, board: &Board, words: &WordList) -> BoggleResult<Vec<Path>> {
  Ok(match args.mode {
    RunMode::Paths => find_length_n_paths(args.length, board, words.words()),
    RunMode::Words => find_length_n_words(args.length, board, words.words()),
    RunMode::MaxScore => max_score_paths(board, words.words()),
    RunMode::Check => check_path(args, board, words)?,
  })
}

fn main() -> BoggleResult {
  let args = Args::parse();
  logger::init_logger(args.debug || env::var("BOGGLE_DEBUG").is_ok());

  let board = load_board(&args)?;
  let words = WordList::load(&args.dict)?;
  println!("{board}");

  let (time, paths) = time_fn(|| run(&args, &board, &words));
  let paths = paths?;
  for path in &paths {
    println!("{}\t{path}", board.spell(path).unwrap_or_default());
  }
  log::info!("{} paths in {}s", paths.len(), time.as_secs_f32());

  Ok(())
}

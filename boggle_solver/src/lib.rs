#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod adjacency;
pub mod board;
pub mod enumerate;
pub mod filter;
pub mod legality;
pub mod path;
pub mod prefix;
pub mod score;
pub mod search;

pub use board::Board;
pub use enumerate::{find_length_n_paths, find_length_n_words};
pub use legality::{is_path_legal, is_valid_path};
pub use path::Path;
pub use score::max_score_paths;

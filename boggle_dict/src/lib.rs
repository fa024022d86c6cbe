#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod word_list;

pub use word_list::{canonicalize_word, WordList};

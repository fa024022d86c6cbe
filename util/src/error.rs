use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum BoggleError {
  Internal(String),
  Parse(String),
}

impl Display for BoggleError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      BoggleError::Internal(msg) => write!(f, "Internal error: {msg}"),
      BoggleError::Parse(msg) => write!(f, "Parse error: {msg}"),
    }
  }
}

impl Error for BoggleError {}

pub type BoggleResult<T = ()> = Result<T, Box<dyn Error>>;

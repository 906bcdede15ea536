use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSearchError {
  InvalidConfig(String),
  Parse(String),
  Internal(String),
  Cancelled,
}

impl Display for WordSearchError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WordSearchError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
      WordSearchError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WordSearchError::Internal(msg) => write!(f, "Internal error: {msg}"),
      WordSearchError::Cancelled => write!(f, "Generation cancelled"),
    }
  }
}

impl Error for WordSearchError {}

/// Errors are boxed with `Send + Sync` so results can be handed back from
/// blocking worker threads.
pub type WordSearchResult<T = ()> = Result<T, Box<dyn Error + Send + Sync>>;

/// Returns the `WordSearchError` behind a boxed error, if that is what it is.
pub fn as_word_search_error<'a>(
  err: &'a (dyn Error + Send + Sync + 'static),
) -> Option<&'a WordSearchError> {
  err.downcast_ref::<WordSearchError>()
}

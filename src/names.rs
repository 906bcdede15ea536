use std::{
  fs,
  io::{self, Read},
  path::Path,
};

use itertools::Itertools;
use util::error::{WordSearchError, WordSearchResult};

pub fn read_names_file(path: &Path) -> WordSearchResult<String> {
  if path.as_os_str() == "-" {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
  } else {
    Ok(fs::read_to_string(path)?)
  }
}

/// Names from the command line followed by one name per line of
/// `file_contents`. Names are trimmed, blank ones skipped, and repeats of an
/// earlier name dropped.
pub fn collect_names(
  arg_names: &[String],
  file_contents: Option<&str>,
) -> WordSearchResult<Vec<String>> {
  let names: Vec<_> = arg_names
    .iter()
    .map(String::as_str)
    .chain(file_contents.into_iter().flat_map(str::lines))
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .unique()
    .map(str::to_owned)
    .collect();

  if names.is_empty() {
    return Err(WordSearchError::Parse("No names given".to_owned()).into());
  }
  Ok(names)
}

/// A name as entered, paired with the token that actually goes into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
  original: String,
  clean: String,
  len: u32,
}

impl Word {
  pub fn new(original: impl Into<String>, maintain_surnames: bool) -> Self {
    let original = original.into();
    let clean = Self::canonicalize(&original, maintain_surnames);
    let len = clean.chars().count() as u32;
    Self { original, clean, len }
  }

  /// Uppercases the name. With surnames kept, all whitespace is dropped;
  /// otherwise only the first whitespace-delimited token survives.
  ///
  /// Uppercasing is Unicode-aware, so letters outside A-Z (`"Zoë"` becomes
  /// `"ZOË"`) and digits are kept and placed in the grid as-is. Only the
  /// random fill is restricted to A-Z.
  pub fn canonicalize(name: &str, maintain_surnames: bool) -> String {
    if maintain_surnames {
      name.split_whitespace().collect::<String>().to_uppercase()
    } else {
      name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase()
    }
  }

  pub fn original(&self) -> &str {
    &self.original
  }

  pub fn clean(&self) -> &str {
    &self.clean
  }

  /// Length of the clean token in characters.
  pub fn len(&self) -> u32 {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

/// Input names split into those that could fit in the grid and those that
/// never can.
#[derive(Clone, Debug)]
pub struct WordList {
  fittable: Vec<Word>,
  too_long: Vec<Word>,
}

impl WordList {
  pub fn from_names<S: AsRef<str>>(
    names: impl IntoIterator<Item = S>,
    maintain_surnames: bool,
    rows: u32,
    cols: u32,
  ) -> Self {
    let max_len = rows.max(cols);
    let (fittable, too_long) = names
      .into_iter()
      .map(|name| Word::new(name.as_ref(), maintain_surnames))
      .partition(|word| !word.is_empty() && word.len() <= max_len);
    Self { fittable, too_long }
  }

  pub fn fittable(&self) -> &[Word] {
    &self.fittable
  }

  /// Words that are reported unplaced by every attempt, in input order.
  pub fn too_long(&self) -> &[Word] {
    &self.too_long
  }
}

use core::fmt;
use serde::{Deserialize, Serialize};

pub type HymnNumber = String;

/// A verse selection attached to a hymn reference. `indices` are zero-based;
/// `display_text` keeps the expression exactly as the user typed it.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct VerseSelection {
  pub indices: Vec<usize>,
  pub display_text: String,
}

/// One parsed hymn directive: the catalog number, an optional liturgical
/// category label (e.g. "Alkuvirsi", "Kiitosvirsi") and an optional verse
/// selection.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct HymnReference {
  pub number: HymnNumber,
  pub category: Option<String>,
  pub verses: Option<VerseSelection>,
}

impl HymnReference {
  pub fn new<N: Into<HymnNumber>>(number: N) -> Self {
    Self {
      number: number.into(),
      category: None,
      verses: None,
    }
  }
}

impl fmt::Display for HymnReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(category) = &self.category {
      write!(f, "{} ", category)?;
    }

    write!(f, "{}", self.number)?;

    if let Some(verses) = &self.verses {
      write!(f, ":{}", verses.display_text)?;
    }

    Ok(())
  }
}

/// A whole hymn program, one entry per non-blank input line.
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct HymnProgram {
  pub entries: Vec<HymnReference>,
  /// Zero-based index of the currently viewed hymn.
  pub current_entry: usize,
}

impl HymnProgram {
  pub fn new(entries: Vec<HymnReference>) -> Self {
    Self {
      entries,
      current_entry: 0,
    }
  }

  pub fn current(&self) -> Option<&HymnReference> {
    self.entries.get(self.current_entry)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

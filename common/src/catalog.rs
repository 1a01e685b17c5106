use std::collections::HashSet;

/// Numbers the 1986 hymnal prints only as `a`/`b` melody variants; the bare
/// number has no entry of its own.
const VARIANT_ONLY_NUMBERS: &[u32] = &[90, 170, 228, 332, 341, 397];

/// Closed, read-only set of the hymn numbers an installation recognizes.
/// Keys are strings because variant letters are part of the number ("228a").
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HymnCatalog {
  numbers: HashSet<String>,
}

impl HymnCatalog {
  pub fn new<I, S>(numbers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      numbers: numbers.into_iter().map(Into::into).collect(),
    }
  }

  pub fn exists(&self, number: &str) -> bool {
    self.numbers.contains(number)
  }

  pub fn len(&self) -> usize {
    self.numbers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.numbers.is_empty()
  }
}

impl Default for HymnCatalog {
  /// The 1986 Finnish hymnal: numbers 1 through 632, variant-only numbers
  /// stored with their melody letters.
  fn default() -> Self {
    let mut numbers = HashSet::new();

    for n in 1..=632u32 {
      if VARIANT_ONLY_NUMBERS.contains(&n) {
        numbers.insert(format!("{}a", n));
        numbers.insert(format!("{}b", n));
      } else {
        numbers.insert(format!("{}", n));
      }
    }

    Self { numbers }
  }
}

use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum VerseRangeError {
  #[error("empty verse expression")]
  Empty,
  #[error("invalid verse number: '{0}'")]
  InvalidNumber(String),
  #[error("verse numbers start at 1")]
  Zero,
  #[error("descending verse range: '{0}'")]
  DescendingRange(String),
}

/// Resolves a compact verse expression like "1-3,6" into the ordered list of
/// 1-based verse numbers it names: [1, 2, 3, 6].
pub fn resolve(expression: &str) -> Result<Vec<usize>, VerseRangeError> {
  let expression = expression.trim();

  if expression.is_empty() {
    return Err(VerseRangeError::Empty);
  }

  let mut verses = Vec::new();

  for item in expression.split(',') {
    let item = item.trim();

    match item.split_once('-') {
      Some((start, end)) => {
        let start = parse_number(start)?;
        let end = parse_number(end)?;

        if end < start {
          return Err(VerseRangeError::DescendingRange(item.to_string()));
        }

        verses.extend(start..=end);
      }
      None => verses.push(parse_number(item)?),
    }
  }

  Ok(verses)
}

fn parse_number(text: &str) -> Result<usize, VerseRangeError> {
  let text = text.trim();

  let number = text
    .parse::<usize>()
    .map_err(|_| VerseRangeError::InvalidNumber(text.to_string()))?;

  if number == 0 {
    return Err(VerseRangeError::Zero);
  }

  Ok(number)
}

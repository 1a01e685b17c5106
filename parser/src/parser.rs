use crate::line_parser;
use hymnlist_common::{HymnCatalog, HymnProgram, HymnReference, VerseRangeError};
use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("invalid hymn")]
    InvalidHymn,
    #[error(transparent)]
    InvalidVerses(#[from] VerseRangeError),
}

/// Failure of a whole-program parse. `line` is the 1-based ordinal among the
/// retained, non-blank lines, not the position in the raw text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("line {line}: {message}")]
pub struct ListInputError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Parser {
    catalog: HymnCatalog,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: HymnCatalog) -> Self {
        Self { catalog }
    }

    pub fn parse_line(&self, line: &str) -> Result<HymnReference, ParseError> {
        line_parser::parse(line, &self.catalog)
    }

    /// Parses a hymn program, one directive per line. Blank lines are
    /// skipped. Stops at the first line that fails to parse; no partial
    /// program is returned.
    pub fn parse(&self, text: &str) -> Result<HymnProgram, ListInputError> {
        let mut entries = Vec::new();

        for (index, line) in text.lines().filter(|line| !line.is_empty()).enumerate() {
            match line_parser::parse(line, &self.catalog) {
                Ok(reference) => entries.push(reference),
                Err(error) => {
                    return Err(ListInputError {
                        line: index + 1,
                        message: error.to_string(),
                    })
                }
            }
        }

        Ok(HymnProgram::new(entries))
    }
}

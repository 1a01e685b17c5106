use hymnlist_common::{HymnProgram, HymnReference};

mod parser;
pub use parser::{ListInputError, ParseError, Parser};

mod line_parser;

/// Parse a whole hymn program against the default catalog.
pub fn parse(text: &str) -> Result<HymnProgram, ListInputError> {
    Parser::new().parse(text)
}

/// Parse a single program line against the default catalog.
pub fn parse_line(line: &str) -> Result<HymnReference, ParseError> {
    Parser::new().parse_line(line)
}

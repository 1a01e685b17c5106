mod hymn;
pub use hymn::*;

mod catalog;
pub use catalog::*;

pub mod verse_range;
pub use verse_range::VerseRangeError;

use crate::ParseError;
use hymnlist_common::{verse_range, HymnCatalog, HymnReference, VerseSelection};
use once_cell::sync::Lazy;
use regex::Regex;

/// A hymn number token: 1-3 digits with an optional melody-variant letter,
/// bounded by word boundaries. The first such token on the line wins, so a
/// category label containing digits can shadow the real number.
static HYMN_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{1,3}[abc]?\b").unwrap());

/// A verse clause: number token, optional space, colon, then the raw verse
/// expression running to end of line.
static VERSE_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,3}[abc]? ?:(.*)$").unwrap());

const EN_DASH: &str = "\u{2013}";
/// The en dash as UTF-8 bytes misread as cp1252, seen in pasted program texts.
const EN_DASH_MOJIBAKE: &str = "â€“";

/// Parses one program line into a hymn reference.
///
/// The grammar is `[category] <number>[a|b|c][:<verses>]` with the category
/// and verse clause both optional. The number must exist in the catalog,
/// either verbatim or with an "a" appended (the shorthand for a hymn whose
/// primary melody variant is written without the letter).
pub fn parse(line: &str, catalog: &HymnCatalog) -> Result<HymnReference, ParseError> {
    let number_match = HYMN_NUMBER.find(line).ok_or(ParseError::InvalidHymn)?;
    let token = number_match.as_str();

    let number = if catalog.exists(token) {
        token.to_string()
    } else {
        let fallback = format!("{}a", token);
        if !catalog.exists(&fallback) {
            return Err(ParseError::InvalidHymn);
        }
        fallback
    };

    let raw_verses = VERSE_CLAUSE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str());

    // Whatever text is left after removing the number token and the verse
    // clause is the category label.
    let mut leftover = line.replacen(token, "", 1);
    if let Some(raw) = raw_verses {
        leftover = leftover.replacen(&format!(":{}", raw), "", 1);
    }
    let leftover = leftover.trim();
    let category = if leftover.is_empty() {
        None
    } else {
        Some(leftover.to_string())
    };

    let verses = match raw_verses {
        Some(raw) => {
            // Dash artifacts are fixed for resolution only; the display text
            // stays exactly as typed.
            let cleaned = raw.replace(EN_DASH_MOJIBAKE, "-").replace(EN_DASH, "-");
            let numbers = verse_range::resolve(&cleaned)?;

            Some(VerseSelection {
                indices: numbers.into_iter().map(|n| n - 1).collect(),
                display_text: raw.to_string(),
            })
        }
        None => None,
    };

    Ok(HymnReference {
        number,
        category,
        verses,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn catalog() -> HymnCatalog {
        HymnCatalog::default()
    }

    #[test]
    fn bare_number() {
        let reference = parse("130", &catalog()).unwrap();
        assert_eq!(reference, HymnReference::new("130"));
    }

    #[test]
    fn bare_number_with_variant_letter() {
        let reference = parse("228a", &catalog()).unwrap();
        assert_eq!(reference, HymnReference::new("228a"));
    }

    #[test]
    fn number_falls_back_to_a_variant() {
        let reference = parse("228", &catalog()).unwrap();
        assert_eq!(reference.number, "228a");
    }

    #[test]
    fn category_before_number() {
        let reference = parse("Kiitosvirsi 130", &catalog()).unwrap();
        assert_eq!(reference.number, "130");
        assert_eq!(reference.category, Some("Kiitosvirsi".to_string()));
        assert_eq!(reference.verses, None);
    }

    #[test]
    fn multi_word_category() {
        let reference = parse("Päivän virsi 13", &catalog()).unwrap();
        assert_eq!(reference.number, "13");
        assert_eq!(reference.category, Some("Päivän virsi".to_string()));
    }

    #[test]
    fn verse_clause_with_fallback_number() {
        let reference = parse("228:1-3", &catalog()).unwrap();
        assert_eq!(reference.number, "228a");
        assert_eq!(reference.category, None);

        let verses = reference.verses.unwrap();
        assert_eq!(verses.indices, vec![0, 1, 2]);
        assert_eq!(verses.display_text, "1-3");
    }

    #[test]
    fn en_dash_resolves_but_displays_verbatim() {
        let reference = parse("228:2–4", &catalog()).unwrap();

        let verses = reference.verses.unwrap();
        assert_eq!(verses.indices, vec![1, 2, 3]);
        assert_eq!(verses.display_text, "2–4");
    }

    #[test]
    fn category_number_and_verses() {
        let reference = parse("Päivän virsi 444:1-3,6", &catalog()).unwrap();
        assert_eq!(reference.number, "444");
        assert_eq!(reference.category, Some("Päivän virsi".to_string()));

        let verses = reference.verses.unwrap();
        assert_eq!(verses.indices, vec![0, 1, 2, 5]);
        assert_eq!(verses.display_text, "1-3,6");
    }

    #[test]
    fn number_past_the_hymnal_is_invalid() {
        assert_eq!(parse("633", &catalog()), Err(ParseError::InvalidHymn));
    }

    #[test]
    fn four_digit_token_never_matches() {
        assert_eq!(parse("3333", &catalog()), Err(ParseError::InvalidHymn));
    }

    #[test]
    fn line_without_a_number_is_invalid() {
        assert_eq!(parse("foo", &catalog()), Err(ParseError::InvalidHymn));
    }

    #[test]
    fn invalid_hymn_message() {
        let error = parse("foo", &catalog()).unwrap_err();
        assert_eq!(format!("{}", error), "invalid hymn");
    }

    #[test]
    fn malformed_verse_expression_propagates() {
        let error = parse("130:1-x", &catalog()).unwrap_err();
        assert!(matches!(error, ParseError::InvalidVerses(_)));
    }

    #[test]
    fn custom_catalog_bounds_what_parses() {
        let catalog = HymnCatalog::new(["12"]);
        assert_eq!(parse("12", &catalog).unwrap().number, "12");
        assert_eq!(parse("130", &catalog), Err(ParseError::InvalidHymn));
    }
}

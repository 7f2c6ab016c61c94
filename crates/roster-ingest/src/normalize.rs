//! Cleaning of raw roster rows into typed profiles.

use roster_model::{Language, Languages, Profile, ProfileId};

use crate::columns::{HOBBIES, IMAGE, INTERESTS, NAME, SKILLS};
use crate::csv_table::RawRecord;

/// Name given to rows whose `NAME` cell is missing or blank.
pub const UNKNOWN_NAME: &str = "Unknown";

/// List entries that carry no information and are dropped on load.
const PLACEHOLDERS: [&str; 2] = [".", "Nothing special"];

/// Build a profile from one raw row at position `index` of the source table.
pub fn normalize_record(record: &RawRecord, index: usize) -> Profile {
    let name = record
        .get(NAME)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    let mut languages = Languages::default();
    for language in Language::ALL {
        languages.set(language, parse_level(record.get(language.column()).unwrap_or("")));
    }

    Profile {
        id: ProfileId::for_row(index),
        name,
        image: record.get(IMAGE).unwrap_or("").to_string(),
        languages,
        skills: clean_list(record.get(SKILLS).unwrap_or("")),
        hobbies: clean_list(record.get(HOBBIES).unwrap_or("")),
        interests: clean_list(record.get(INTERESTS).unwrap_or("")),
    }
}

/// Parse a proficiency cell.
///
/// Reads the leading integer (optional sign, then digits) and ignores whatever
/// follows, so `"4 "` and `"3.5"` give 4 and 3. Cells without a leading
/// integer give 0. The value is not clamped to the nominal `0..=5` range.
///
/// # Examples
///
/// ```
/// use roster_ingest::parse_level;
///
/// assert_eq!(parse_level("4"), 4);
/// assert_eq!(parse_level(" 3.5"), 3);
/// assert_eq!(parse_level("abc"), 0);
/// assert_eq!(parse_level("9"), 9);
/// ```
pub fn parse_level(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end]
        .parse::<i32>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// Split a multi-valued cell (skills, hobbies, interests) into clean entries.
///
/// One pair of quotes wrapping the whole cell is removed, the rest is split on
/// commas, each entry is stripped of surrounding quotes and whitespace with
/// inner whitespace runs collapsed, and empty or placeholder entries are
/// dropped. Order is preserved.
///
/// # Examples
///
/// ```
/// use roster_ingest::clean_list;
///
/// assert_eq!(
///     clean_list("Teaching, ., Nothing special, Coding"),
///     vec!["Teaching", "Coding"]
/// );
/// assert_eq!(clean_list("\"Reading,  'Long   walks' \""), vec!["Reading", "Long walks"]);
/// assert!(clean_list("").is_empty());
/// ```
pub fn clean_list(raw: &str) -> Vec<String> {
    strip_quotes(raw)
        .split(',')
        .map(clean_entry)
        .filter(|entry| !is_placeholder(entry))
        .collect()
}

/// Strip one pair of double quotes wrapping the whole value.
fn strip_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

fn clean_entry(raw: &str) -> String {
    raw.trim_matches(|ch: char| ch == '"' || ch == '\'' || ch.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_placeholder(entry: &str) -> bool {
    entry.is_empty() || PLACEHOLDERS.contains(&entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, &str)]) -> RawRecord {
        cells.iter().copied().collect()
    }

    #[test]
    fn name_is_trimmed_or_defaults_to_unknown() {
        let profile = normalize_record(&record(&[("NAME", "  Amina  ")]), 0);
        assert_eq!(profile.name, "Amina");
        let blank = normalize_record(&record(&[("NAME", "   ")]), 1);
        assert_eq!(blank.name, UNKNOWN_NAME);
        let missing = normalize_record(&record(&[]), 2);
        assert_eq!(missing.name, UNKNOWN_NAME);
    }

    #[test]
    fn ids_follow_row_index() {
        let profile = normalize_record(&record(&[("NAME", "Omar")]), 7);
        assert_eq!(profile.id, "teacher-7");
    }

    #[test]
    fn malformed_language_values_become_zero() {
        let profile = normalize_record(
            &record(&[("ENGLISH", "abc"), ("ARABIC", ""), ("URDU", "3"), ("HINDI", "9")]),
            0,
        );
        assert_eq!(profile.languages.english, 0);
        assert_eq!(profile.languages.arabic, 0);
        assert_eq!(profile.languages.urdu, 3);
        assert_eq!(profile.languages.malayalam, 0);
        assert_eq!(profile.languages.hindi, 9);
    }

    #[test]
    fn level_parsing_reads_leading_integer() {
        assert_eq!(parse_level("-2"), -2);
        assert_eq!(parse_level("+4"), 4);
        assert_eq!(parse_level("5 (native)"), 5);
        assert_eq!(parse_level("-"), 0);
        assert_eq!(parse_level("99999999999999"), 0);
    }

    #[test]
    fn placeholders_are_dropped() {
        assert_eq!(
            clean_list("Teaching, ., Nothing special, Coding"),
            vec!["Teaching", "Coding"]
        );
        assert!(clean_list(" . ,Nothing special,, ").is_empty());
    }

    #[test]
    fn entries_lose_stray_quotes_and_extra_spaces() {
        assert_eq!(
            clean_list("\"Public   speaking\", 'Chess' ,\"Art"),
            vec!["Public speaking", "Chess", "Art"]
        );
    }

    #[test]
    fn image_is_kept_as_given() {
        let profile = normalize_record(&record(&[("Image", "photos/amina.jpg")]), 0);
        assert_eq!(profile.image, "photos/amina.jpg");
        assert!(normalize_record(&record(&[]), 0).image.is_empty());
    }
}

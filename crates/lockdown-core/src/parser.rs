// crates/lockdown-core/src/parser.rs

//! # Line Parser
//!
//! Turns one pasted table line into a [`RawRow`].
//!
//! Column layouts shift between copies of the source table: some rows carry
//! a subdivision, some country names span several words, and some rows have
//! no end date. Tokens are therefore read from the right, where the layout is
//! stable: scope last, then the date columns, then everything else is the
//! place.

use crate::model::RawRow;
use crate::text::strip_reference;
use chrono::NaiveDate;

/// Lines shorter than this many characters carry no data.
pub const MIN_LINE_LEN: usize = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Row(RawRow),
    /// Comment, blank or too short to hold a row.
    Comment,
    Malformed { reason: String },
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.chars().count() < MIN_LINE_LEN || line.starts_with('#') {
        return ParsedLine::Comment;
    }

    let tokens: Vec<&str> = line
        .split_whitespace()
        .map(strip_reference)
        .filter(|t| !t.is_empty())
        .collect();
    let n = tokens.len();
    if n < 3 {
        return ParsedLine::Malformed {
            reason: format!("expected at least 3 columns, found {n}"),
        };
    }

    let scope = tokens[n - 1];

    // Both dates present: <place..> <start> <end> <scope>
    let (place, start, end) = match (n >= 4).then(|| parse_date(tokens[n - 3])).flatten() {
        Some(start) => (&tokens[..n - 3], start, Some(tokens[n - 2])),
        // Roles shift: <place..> <start> <scope>
        None => match parse_date(tokens[n - 2]) {
            Some(start) => (&tokens[..n - 2], start, None),
            None => {
                return ParsedLine::Malformed {
                    reason: format!("no start date in {line:?}"),
                }
            }
        },
    };

    let Some((country, rest)) = place.split_first() else {
        return ParsedLine::Malformed {
            reason: format!("no country name in {line:?}"),
        };
    };
    if place.iter().any(|t| parse_date(t).is_some()) {
        return ParsedLine::Malformed {
            reason: format!("date found in place columns of {line:?}"),
        };
    }

    ParsedLine::Row(RawRow {
        country: country.to_string(),
        subdivision: (!rest.is_empty()).then(|| rest.join(" ")),
        start,
        end: end.map(str::to_string),
        scope: scope.to_string(),
    })
}

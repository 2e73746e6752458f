use thiserror::Error;
use tracing::warn;

use crate::calendar::{self, CalendarDate};

/// Day.month.year, the default output layout.
pub const DEFAULT_TEMPLATE: &str = "02.01.2006";

// Year literals that read like layout tokens but are not the reference year.
const REJECTED_YEAR_LITERALS: &[&str] = &["2001", "2002", "2003", "2004", "2005", "2007"];

/// A rejected format template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("format template cannot be empty")]
    EmptyTemplate,
    #[error(
        "invalid year token `{literal}` in format template; use `2006` for a 4-digit year or `06` for a 2-digit year"
    )]
    InvalidYearToken { literal: &'static str },
}

/// Validates a format template before a session starts.
///
/// A template without any year token is accepted, with a non-fatal warning
/// emitted to standard error.
pub fn validate_template(template: &str) -> Result<(), FormatError> {
    if template.is_empty() {
        return Err(FormatError::EmptyTemplate);
    }

    for literal in REJECTED_YEAR_LITERALS {
        if template.contains(literal) {
            return Err(FormatError::InvalidYearToken { literal });
        }
    }

    if !has_year_token(template) {
        warn!("format template has no year token (2006 or 06)");
    }

    Ok(())
}

/// Returns whether the template carries a 4-digit or 2-digit year token.
pub fn has_year_token(template: &str) -> bool {
    template.contains("2006") || template.contains("06")
}

/// Renders `date` through a reference-date layout template.
///
/// Tokens are matched longest-first in a single left-to-right scan, so
/// rendered output is never re-scanned; unmatched text passes through as
/// literal.
pub fn format_date(date: CalendarDate, template: &str) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        if let Some((consumed, rendered)) = match_token(date, rest) {
            output.push_str(&rendered);
            rest = &rest[consumed..];
        } else if let Some(literal) = rest.chars().next() {
            output.push(literal);
            rest = &rest[literal.len_utf8()..];
        }
    }

    output
}

// Longest tokens first, so `January` wins over `Jan` and `2006` over `2`.
fn match_token(date: CalendarDate, rest: &str) -> Option<(usize, String)> {
    let weekday = calendar::weekday_of(date);

    for (token, rendered) in [
        ("January", calendar::month_name(date.month).to_string()),
        ("Monday", calendar::weekday_name(weekday).to_string()),
        ("2006", format!("{:04}", date.year)),
        ("Jan", calendar::month_abbrev(date.month).to_string()),
        ("Mon", calendar::weekday_abbrev(weekday).to_string()),
        ("06", format!("{:02}", date.year.rem_euclid(100))),
        ("01", format!("{:02}", date.month)),
        ("02", format!("{:02}", date.day)),
        ("1", date.month.to_string()),
        ("2", date.day.to_string()),
    ] {
        if rest.starts_with(token) {
            return Some((token.len(), rendered));
        }
    }

    None
}

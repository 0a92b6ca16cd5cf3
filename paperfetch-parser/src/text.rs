//! Text normalization and email extraction
//!
//! These helpers are shared by the MEDLINE parser and anything that needs to scan
//! free text for a contact address.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::NOT_AVAILABLE;

/// Collapse every run of whitespace into a single space and trim both ends
///
/// Newlines and tabs count as whitespace, so wrapped MEDLINE values come out on
/// one line. The function is idempotent.
///
/// # Example
///
/// ```
/// use paperfetch_parser::normalize;
///
/// assert_eq!(normalize("  CRISPR\n\t screening   study "), "CRISPR screening study");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Failed to compile email regex")
    })
}

/// Find the leftmost email address in `text`
///
/// An address is a local part of `[A-Za-z0-9._%+-]`, an `@`, a domain of
/// `[A-Za-z0-9.-]` and a top-level domain of at least two letters.
pub fn find_email(text: &str) -> Option<&str> {
    email_regex().find(text).map(|m| m.as_str())
}

/// Extract the first email address from a single string
///
/// Returns [`NOT_AVAILABLE`] when the text contains no address.
///
/// # Example
///
/// ```
/// use paperfetch_parser::{extract_email, NOT_AVAILABLE};
///
/// assert_eq!(extract_email("Contact: john.doe@pfizer.com"), "john.doe@pfizer.com");
/// assert_eq!(extract_email("no address"), NOT_AVAILABLE);
/// ```
pub fn extract_email(text: &str) -> String {
    find_email(text)
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Extract the first email address from an ordered sequence of strings
///
/// The parts are joined with single spaces before scanning, so the result is the
/// leftmost match in sequence order.
pub fn extract_email_from_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    extract_email(&joined)
}

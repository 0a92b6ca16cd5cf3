//! Tokenizer for the MEDLINE tagged text format
//!
//! Each field line looks like `TAG - value`, where the tag is two to four
//! upper-case characters padded to four columns (`PMID- 31978945`,
//! `TI  - A pneumonia outbreak...`). Lines starting with whitespace continue the
//! previous value. Records are separated by blank lines.

use std::collections::BTreeMap;
use std::mem;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::medline::tags;

/// Value of one MEDLINE field
///
/// A tag that appears once in a record is [`FieldValue::Single`]; a tag that
/// repeats (authors, per-author affiliations) is [`FieldValue::Multiple`].
/// Callers that do not care about the distinction use [`FieldValue::values`] or
/// [`FieldValue::into_values`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// All values in input order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Single(value) => vec![value.as_str()],
            FieldValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Consume the field into a uniform list of values
    pub fn into_values(self) -> Vec<String> {
        match self {
            FieldValue::Single(value) => vec![value],
            FieldValue::Multiple(values) => values,
        }
    }

    /// All values joined with a single space
    pub fn joined(&self) -> String {
        self.values().join(" ")
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Single(_) => 1,
            FieldValue::Multiple(values) => values.len(),
        }
    }

    /// Whether the field holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(existing) => {
                let first = mem::take(existing);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    fn last_mut(&mut self) -> Option<&mut String> {
        match self {
            FieldValue::Single(value) => Some(value),
            FieldValue::Multiple(values) => values.last_mut(),
        }
    }
}

/// One MEDLINE record: a mapping from field tag to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedlineRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl MedlineRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `tag`, turning the field multi-valued if it already exists
    pub fn push(&mut self, tag: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.get_mut(tag) {
            Some(field) => field.push(value),
            None => {
                self.fields
                    .insert(tag.to_string(), FieldValue::Single(value));
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&FieldValue> {
        self.fields.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.fields.contains_key(tag)
    }

    /// Field value joined into a single string (for text fields such as `TI` or `AB`)
    pub fn text(&self, tag: &str) -> Option<String> {
        self.get(tag).map(FieldValue::joined)
    }

    /// Field values as an owned list, empty when the tag is absent
    pub fn values(&self, tag: &str) -> Vec<String> {
        self.get(tag)
            .cloned()
            .map(FieldValue::into_values)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn append_continuation(&mut self, tag: &str, text: &str) {
        if let Some(last) = self.fields.get_mut(tag).and_then(FieldValue::last_mut) {
            if !last.is_empty() {
                last.push(' ');
            }
            last.push_str(text);
        }
    }
}

fn field_line_regex() -> &'static Regex {
    static FIELD_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    FIELD_LINE_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Z][A-Z0-9]{1,3}) *-(?: (.*))?$")
            .expect("Failed to compile MEDLINE field line regex")
    })
}

/// Split raw MEDLINE text into records
///
/// Blank lines end a record, and so does a second `PMID` line inside the same
/// record. Whitespace-only input yields no records.
///
/// # Errors
///
/// * [`ParseError::MalformedLine`] - a non-blank line is neither a field line nor
///   a continuation line
/// * [`ParseError::OrphanContinuation`] - a continuation line has no field to extend
///
/// # Example
///
/// ```
/// use paperfetch_parser::parse_medline_records;
///
/// let raw = "PMID- 1\nAU  - Doe J\nAU  - Roe R\n\nPMID- 2\nAD  - Pfizer Inc.\n";
/// let records = parse_medline_records(raw).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].values("AU"), vec!["Doe J", "Roe R"]);
/// assert_eq!(records[1].values("AD"), vec!["Pfizer Inc."]);
/// ```
pub fn parse_medline_records(raw: &str) -> Result<Vec<MedlineRecord>> {
    let re = field_line_regex();

    let mut records = Vec::new();
    let mut current = MedlineRecord::new();
    let mut current_tag: Option<String> = None;

    for (index, raw_line) in raw.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.is_empty() {
            if !current.is_empty() {
                records.push(mem::take(&mut current));
            }
            current_tag = None;
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            let tag = current_tag
                .as_deref()
                .ok_or(ParseError::OrphanContinuation { line: line_number })?;
            current.append_continuation(tag, line.trim_start());
            continue;
        }

        let captures = re.captures(line).ok_or_else(|| ParseError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        })?;
        let tag = &captures[1];
        let value = captures.get(2).map_or("", |m| m.as_str()).trim();

        if tag == tags::PMID && current.contains(tags::PMID) {
            records.push(mem::take(&mut current));
        }

        current.push(tag, value);
        current_tag = Some(tag.to_string());
    }

    if !current.is_empty() {
        records.push(current);
    }

    debug!(records = records.len(), "Split MEDLINE text into records");
    Ok(records)
}

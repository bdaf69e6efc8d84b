//! Entry payload validation -- pure logic, no database access.
//!
//! Payloads are checked as raw JSON objects so that every violated field
//! is reported in one pass (a typed deserializer stops at the first
//! problem). Create payloads require `title` and `type`; update payloads
//! accept any subset of fields and only check what is supplied.
//!
//! `null` on any field is treated as "not supplied" and unknown keys
//! (including `id`) are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::entry::{EntryChanges, MediaKind, NewEntry};
use crate::text::canonical_text;

/// Wire names of all entry fields, in reporting order.
pub const ENTRY_FIELDS: [&str; 9] = [
    "title",
    "type",
    "director",
    "budget",
    "location",
    "duration",
    "year",
    "posterUrl",
    "notes",
];

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Every violation found in one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate a create payload.
pub fn validate_new_entry(payload: &Map<String, Value>) -> Result<NewEntry, ValidationFailure> {
    let mut reader = PayloadReader::new(payload);
    let mut changes = reader.read_changes();
    reader.check_rules(&changes);

    let title = reader.require("title", changes.title.take());
    let kind = reader.require("type", changes.kind.take());
    let (Some(title), Some(kind)) = (title, kind) else {
        return Err(reader.into_failure());
    };
    reader.finish()?;

    Ok(NewEntry {
        title,
        kind,
        director: changes.director,
        budget: changes.budget,
        location: changes.location,
        duration: changes.duration,
        year: changes.year,
        poster_url: changes.poster_url,
        notes: changes.notes,
    })
}

/// Validate an update payload. Every field is optional.
pub fn validate_entry_changes(
    payload: &Map<String, Value>,
) -> Result<EntryChanges, ValidationFailure> {
    let mut reader = PayloadReader::new(payload);
    let changes = reader.read_changes();
    reader.check_rules(&changes);
    reader.finish()?;
    Ok(changes)
}

struct PayloadReader<'a> {
    payload: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> PayloadReader<'a> {
    fn new(payload: &'a Map<String, Value>) -> Self {
        Self {
            payload,
            violations: Vec::new(),
        }
    }

    fn read_changes(&mut self) -> EntryChanges {
        EntryChanges {
            title: self.text("title"),
            kind: self.kind("type"),
            director: self.text("director"),
            budget: self.text_or_number("budget"),
            location: self.text("location"),
            duration: self.text("duration"),
            year: self.text_or_number("year"),
            poster_url: self.text("posterUrl"),
            notes: self.text("notes"),
        }
    }

    /// Apply the declarative `validator` rules on the extracted fields.
    fn check_rules(&mut self, changes: &EntryChanges) {
        let Err(errors) = changes.validate() else {
            return;
        };
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                self.reject(wire_name(&field), &error.code, message);
            }
        }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.payload.get(field).filter(|v| !v.is_null())
    }

    fn text(&mut self, field: &str) -> Option<String> {
        match self.value(field)? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.reject(
                    field,
                    "invalid_type",
                    format!("Expected string, received {}", json_type(other)),
                );
                None
            }
        }
    }

    fn text_or_number(&mut self, field: &str) -> Option<String> {
        let value = self.value(field)?;
        let text = canonical_text(value);
        if text.is_none() {
            self.reject(
                field,
                "invalid_type",
                format!("Expected string or number, received {}", json_type(value)),
            );
        }
        text
    }

    fn kind(&mut self, field: &str) -> Option<MediaKind> {
        let raw = self.text(field)?;
        match raw.parse() {
            Ok(kind) => Some(kind),
            Err(_) => {
                self.reject(
                    field,
                    "invalid_enum_value",
                    format!("Expected 'MOVIE' | 'TV_SHOW', received '{raw}'"),
                );
                None
            }
        }
    }

    /// Record a `required` violation when `value` is absent, unless the
    /// field was already rejected for another reason.
    fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() && !self.violations.iter().any(|v| v.field == field) {
            self.reject(field, "required", "Required".to_string());
        }
        value
    }

    fn reject(&mut self, field: &str, code: &str, message: String) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            code: code.to_string(),
            message,
        });
    }

    fn into_failure(mut self) -> ValidationFailure {
        self.violations.sort_by_key(|v| field_rank(&v.field));
        ValidationFailure {
            violations: self.violations,
        }
    }

    fn finish(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.into_failure())
        }
    }
}

fn wire_name(field: &str) -> &str {
    match field {
        "kind" => "type",
        "poster_url" => "posterUrl",
        other => other,
    }
}

fn field_rank(field: &str) -> usize {
    ENTRY_FIELDS
        .iter()
        .position(|f| *f == field)
        .unwrap_or(ENTRY_FIELDS.len())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    fn fields(failure: &ValidationFailure) -> Vec<&str> {
        failure.fields().collect()
    }

    // -- create ----------------------------------------------------------------

    #[test]
    fn minimal_create_payload_is_accepted() {
        let entry =
            validate_new_entry(&object(json!({"title": "Inception", "type": "MOVIE"}))).unwrap();
        assert_eq!(entry, NewEntry::new("Inception", MediaKind::Movie));
    }

    #[test]
    fn empty_title_is_rejected() {
        let failure =
            validate_new_entry(&object(json!({"title": "", "type": "MOVIE"}))).unwrap_err();
        assert_eq!(fields(&failure), ["title"]);
        assert_eq!(failure.violations[0].code, "length");
        assert_eq!(failure.violations[0].message, "Title is required");
    }

    #[test]
    fn every_violated_field_is_reported() {
        let failure = validate_new_entry(&object(json!({
            "type": "DOCUMENTARY",
            "director": 12,
            "notes": ["a"],
        })))
        .unwrap_err();
        assert_eq!(fields(&failure), ["title", "type", "director", "notes"]);
        assert_eq!(failure.violations[0].code, "required");
        assert_eq!(failure.violations[1].code, "invalid_enum_value");
    }

    #[test]
    fn wrong_type_is_not_also_reported_as_missing() {
        let failure = validate_new_entry(&object(json!({"title": 5, "type": "MOVIE"}))).unwrap_err();
        assert_eq!(failure.violations.len(), 1);
        assert_eq!(failure.violations[0].code, "invalid_type");
    }

    #[test]
    fn numeric_budget_and_year_are_normalized_to_text() {
        let entry = validate_new_entry(&object(json!({
            "title": "Inception",
            "type": "MOVIE",
            "budget": 160000000,
            "year": 2010,
        })))
        .unwrap();
        assert_eq!(entry.budget.as_deref(), Some("160000000"));
        assert_eq!(entry.year.as_deref(), Some("2010"));
    }

    #[test]
    fn textual_budget_is_kept_verbatim() {
        let entry = validate_new_entry(&object(json!({
            "title": "Inception",
            "type": "MOVIE",
            "budget": "$3M",
        })))
        .unwrap();
        assert_eq!(entry.budget.as_deref(), Some("$3M"));
    }

    #[test]
    fn nulls_and_unknown_keys_are_ignored() {
        let entry = validate_new_entry(&object(json!({
            "id": 99,
            "title": "Dark",
            "type": "TV_SHOW",
            "posterUrl": null,
            "rating": 5,
        })))
        .unwrap();
        assert_eq!(entry.kind, MediaKind::TvShow);
        assert_eq!(entry.poster_url, None);
    }

    // -- update ----------------------------------------------------------------

    #[test]
    fn empty_update_payload_is_valid() {
        let changes = validate_entry_changes(&Map::new()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn partial_update_only_checks_supplied_fields() {
        let changes = validate_entry_changes(&object(json!({"notes": "rewatch"}))).unwrap();
        assert_eq!(changes.notes.as_deref(), Some("rewatch"));
        assert_eq!(changes.title, None);
        assert_eq!(changes.kind, None);
    }

    #[test]
    fn update_still_rejects_empty_title_and_bad_type() {
        let failure =
            validate_entry_changes(&object(json!({"title": "", "type": "movie"}))).unwrap_err();
        assert_eq!(fields(&failure), ["title", "type"]);
    }

    #[test]
    fn display_joins_violations() {
        let failure = validate_new_entry(&Map::new()).unwrap_err();
        assert_eq!(failure.to_string(), "title: Required; type: Required");
        assert_matches!(failure.violations.as_slice(), [_, _]);
    }
}

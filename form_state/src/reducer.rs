use crate::record::{ErrorMap, Messages, Record};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_-]*$").expect("alias pattern is a valid regex")
});

/// Result of a text edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// The record with the edited field set to the raw input.
    pub updated: Record,
    /// The error map after required-field validation.
    pub err: ErrorMap,
    /// `true` only when no errors remain, which is what enables saving.
    pub changed: bool,
}

/// Result of a numeric edit.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberUpdate {
    pub updated: Record,
    pub value: u64,
    pub changed: bool,
}

/// Binds required-field validation to the current record and error map.
///
/// The returned function takes the raw input and the name of the edited
/// field. The value is stored untrimmed, since trimming only happens when
/// saving. Only fields listed in `messages` ever touch the error map.
/// Blank input (after trimming) inserts the field's message and anything
/// else removes it.
///
/// # Example
///
/// ```rust
/// use form_state::{ErrorMap, Record, bind_update, messages};
///
/// let required = messages([("title", "Title must not be empty")]);
/// let record = Record::new();
/// let errors = ErrorMap::new();
///
/// let update = bind_update(&required, &record, &errors)("  ", "title");
/// assert!(!update.changed);
/// assert!(update.err.contains_key("title"));
/// ```
pub fn bind_update<'a>(
    messages: &'a Messages,
    record: &'a Record,
    errors: &'a ErrorMap,
) -> impl Fn(&str, &str) -> Update + 'a {
    move |raw: &str, field: &str| {
        let mut err = errors.clone();

        if let Some(message) = messages.get(field) {
            if raw.trim().is_empty() {
                err.insert(field.to_string(), message.clone());
            } else {
                err.remove(field);
            }
        }

        let mut updated = record.clone();
        updated.insert(field.to_string(), Value::String(raw.to_string()));

        Update {
            changed: err.is_empty(),
            updated,
            err,
        }
    }
}

/// Edit path for numeric fields. The value goes through [`parse_count`]
/// and required-field validation is skipped, so `changed` is always true.
#[must_use]
pub fn number_update(record: &Record, field: &str, raw: &str) -> NumberUpdate {
    let value = parse_count(raw);

    let mut updated = record.clone();
    updated.insert(field.to_string(), Value::from(value));

    NumberUpdate {
        updated,
        value,
        changed: true,
    }
}

/// Edit path for identifier-like fields: the regular reducer, then the
/// allowed-character check. A violation puts `invalid_message` on the
/// field and forces `changed` to false.
#[must_use]
pub fn alias_update(
    messages: &Messages,
    record: &Record,
    errors: &ErrorMap,
    raw: &str,
    field: &str,
    invalid_message: &str,
) -> Update {
    let mut update = bind_update(messages, record, errors)(raw, field);

    if !is_valid_alias(raw) {
        update
            .err
            .insert(field.to_string(), invalid_message.to_string());
        update.changed = false;
    }

    update
}

/// Lowercase letters, digits, `_` and `-` only. The empty string passes.
#[must_use]
pub fn is_valid_alias(alias: &str) -> bool {
    ALIAS_PATTERN.is_match(alias)
}

/// Reads a non-negative count from raw input.
///
/// Leading whitespace and an optional sign are skipped, then the leading
/// digits are read and anything after them is ignored. Negative or
/// digit-less input gives 0, and overflow saturates.
#[must_use]
pub fn parse_count(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u64::MAX)
}

use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use thiserror::Error;

/// A flat record: field name to value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Field name to the message shown next to it. A missing key means the
/// field is valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Required fields and the message used when they are left blank.
pub type Messages = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("entity does not serialize to a flat object")]
    NotAnObject,
    #[error("failed to convert record: {0}")]
    Convert(#[from] serde_json::Error),
}

/// Serializes an entity into its record form.
///
/// # Errors
///
/// Fails if the entity cannot be serialized or is not a JSON object.
pub fn to_record<T: Serialize>(entity: &T) -> Result<Record, Error> {
    match serde_json::to_value(entity)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject),
    }
}

/// Rebuilds an entity from a record.
///
/// # Errors
///
/// Fails if a field holds a value of the wrong type, e.g. text in a
/// numeric field.
pub fn from_record<T: DeserializeOwned>(record: Record) -> Result<T, Error> {
    Ok(serde_json::from_value(serde_json::Value::Object(record))?)
}

/// Builds a [`Messages`] table from literal pairs.
#[must_use]
pub fn messages<const N: usize>(pairs: [(&str, &str); N]) -> Messages {
    pairs
        .into_iter()
        .map(|(field, message)| (field.to_string(), message.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Channel;

    #[test]
    fn test_record_round_trip_keeps_fields() {
        let channel = Channel {
            id: 1,
            alias: "one".to_string(),
            title: "One".to_string(),
            ..Channel::default()
        };

        let record = to_record(&channel).unwrap();
        assert_eq!(record.get("alias"), Some(&"one".into()));

        let back: Channel = from_record(record).unwrap();
        assert_eq!(back, channel);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(to_record(&42), Err(Error::NotAnObject)));
    }

    #[test]
    fn test_text_in_numeric_field_fails() {
        let mut record = to_record(&Channel::default()).unwrap();
        record.insert("id".to_string(), "abc".into());

        assert!(matches!(
            from_record::<Channel>(record),
            Err(Error::Convert(_))
        ));
    }
}

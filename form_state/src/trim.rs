use crate::record::{Error, Record, from_record, to_record};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Strips leading and trailing whitespace from every string value of
/// `record`. Other values are copied as they are.
#[must_use]
pub fn trim(record: &Record) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => Value::String(s.trim().to_string()),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// [`trim`] applied to a typed entity.
///
/// # Errors
///
/// Fails if the entity does not convert to and from a flat record.
pub fn trim_entity<T>(entity: &T) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned,
{
    from_record(trim(&to_record(entity)?))
}

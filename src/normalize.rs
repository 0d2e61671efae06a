//! Conversion of API responses into [`Table`]s.
//!
//! SkinBaron wraps every record list in an object with a single key
//! (`{"newestItems": [...]}`, `{"map": [...]}`, ...). The records become rows;
//! nested values such as sticker lists stay nested.

use crate::error::{Result, SkinBaronError};
use crate::table::{type_name, Table};
use serde_json::Value;

/// Flatten a response into one row per record.
///
/// The record list is read from the response's first top-level key. An empty
/// list yields an empty table.
///
/// # Errors
///
/// [`SkinBaronError::DataShape`] if the response is not an object, has no
/// keys, its first value is not a list, or a list element is not an object.
pub fn json_to_table(response: &Value) -> Result<Table> {
    let obj = response.as_object().ok_or_else(|| {
        SkinBaronError::DataShape(format!(
            "expected a JSON object holding a record list, got {}",
            type_name(response)
        ))
    })?;

    let (key, records) = obj.iter().next().ok_or_else(|| {
        SkinBaronError::DataShape("response object has no record list".to_string())
    })?;

    let records = records.as_array().ok_or_else(|| {
        SkinBaronError::DataShape(format!(
            "'{}' should be a list of records, got {}",
            key,
            type_name(records)
        ))
    })?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match record {
            Value::Object(map) => rows.push(map.clone()),
            other => {
                return Err(SkinBaronError::DataShape(format!(
                    "record {} of '{}' is {}, not an object",
                    i,
                    key,
                    type_name(other)
                )))
            }
        }
    }

    Ok(Table::from_rows(rows))
}

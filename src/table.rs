//! In-memory table of JSON rows with ordered columns.
//!
//! Every row holds a value for every column; cells that were never set are
//! `Value::Null`. Nested values (arrays, objects) are stored as-is.

use crate::error::{Result, SkinBaronError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single table row, keyed by column name.
pub type Row = Map<String, Value>;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table without columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given columns.
    pub fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from rows; columns are taken in first-seen order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Serialize typed records into rows.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::to_value(record)? {
                Value::Object(map) => rows.push(map),
                other => {
                    return Err(SkinBaronError::DataShape(format!(
                        "record serialized to {} instead of an object",
                        type_name(&other)
                    )))
                }
            }
        }
        Ok(Self::from_rows(rows))
    }

    /// Deserialize every row into `T`.
    pub fn into_records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            out.push(serde_json::from_value(Value::Object(row.clone()))?);
        }
        Ok(out)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell at (`row`, `column`); `Null` when the column does not exist.
    ///
    /// Panics if `row` is out of bounds.
    pub fn get(&self, row: usize, column: &str) -> &Value {
        self.rows[row].get(column).unwrap_or(&NULL)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Vec<&Value> {
        self.rows
            .iter()
            .map(|r| r.get(name).unwrap_or(&NULL))
            .collect()
    }

    /// Append a row. New keys become new columns, back-filled with `Null`.
    pub fn push_row(&mut self, mut row: Row) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
                for existing in &mut self.rows {
                    existing.insert(key.clone(), Value::Null);
                }
            }
        }
        let mut ordered = Row::with_capacity(self.columns.len());
        for col in &self.columns {
            ordered.insert(col.clone(), row.remove(col).unwrap_or(Value::Null));
        }
        self.rows.push(ordered);
    }

    /// Replace (or add) a column computed from each row.
    pub fn derive_column<F: FnMut(&Row) -> Value>(&mut self, name: &str, mut f: F) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for row in &mut self.rows {
            let value = f(row);
            row.insert(name.to_string(), value);
        }
    }

    /// Rename a column in place. Does nothing if `from` does not exist.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        let Some(pos) = self.columns.iter().position(|c| c == from) else {
            return;
        };
        self.columns[pos] = to.to_string();
        for row in &mut self.rows {
            let value = row.remove(from).unwrap_or(Value::Null);
            row.insert(to.to_string(), value);
        }
        self.reorder_rows();
    }

    /// Project onto `columns`, in that order. Missing columns come back as `Null`.
    pub fn select(&self, columns: &[&str]) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| (c.to_string(), row.get(*c).cloned().unwrap_or(Value::Null)))
                    .collect::<Row>()
            })
            .collect();
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Keep only the rows for which `keep` returns `true`.
    pub fn retain<F: FnMut(&Row) -> bool>(&mut self, keep: F) {
        self.rows.retain(keep);
    }

    /// Full outer join on `key`, coalescing shared columns.
    ///
    /// Each column present in both tables (other than `key`) yields a single
    /// output column holding this table's value when it is non-null, and the
    /// other table's value otherwise. Rows whose key is null never match.
    /// Matched and left-only rows come first, in this table's order, followed
    /// by the unmatched rows of `other`.
    pub fn outer_join_coalesce(&self, other: &Table, key: &str) -> Table {
        let mut columns = vec![key.to_string()];
        for col in self.columns.iter().chain(other.columns.iter()) {
            if !columns.contains(col) {
                columns.push(col.clone());
            }
        }

        let index = other.index_by(&[key]);
        let mut matched: HashSet<usize> = HashSet::new();
        let mut rows = Vec::with_capacity(self.rows.len() + other.rows.len());

        for left in &self.rows {
            let hits = join_key(left, &[key]).and_then(|k| index.get(&k));
            match hits {
                Some(hits) => {
                    for &i in hits {
                        matched.insert(i);
                        rows.push(coalesce_rows(&columns, Some(left), Some(&other.rows[i])));
                    }
                }
                None => rows.push(coalesce_rows(&columns, Some(left), None)),
            }
        }
        for (i, right) in other.rows.iter().enumerate() {
            if !matched.contains(&i) {
                rows.push(coalesce_rows(&columns, None, Some(right)));
            }
        }

        Table { columns, rows }
    }

    /// Left join `other` onto this table on the given key columns.
    ///
    /// Null keys match null keys. Columns of `other` that this table already
    /// has keep this table's value; rows without a partner get `Null` for
    /// the added columns.
    pub fn left_join(&self, other: &Table, keys: &[&str]) -> Table {
        let mut columns = self.columns.clone();
        for col in &other.columns {
            if !columns.contains(col) {
                columns.push(col.clone());
            }
        }

        let index = other.index_by_nullable(keys);
        let mut rows = Vec::with_capacity(self.rows.len());
        for left in &self.rows {
            match index.get(&nullable_join_key(left, keys)) {
                Some(hits) => {
                    for &i in hits {
                        rows.push(coalesce_rows(&columns, Some(left), Some(&other.rows[i])));
                    }
                }
                None => rows.push(coalesce_rows(&columns, Some(left), None)),
            }
        }

        Table { columns, rows }
    }

    fn index_by(&self, keys: &[&str]) -> HashMap<String, Vec<usize>> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(k) = join_key(row, keys) {
                index.entry(k).or_default().push(i);
            }
        }
        index
    }

    fn index_by_nullable(&self, keys: &[&str]) -> HashMap<String, Vec<usize>> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in self.rows.iter().enumerate() {
            index.entry(nullable_join_key(row, keys)).or_default().push(i);
        }
        index
    }

    fn reorder_rows(&mut self) {
        for row in &mut self.rows {
            let mut ordered = Row::with_capacity(self.columns.len());
            for col in &self.columns {
                ordered.insert(col.clone(), row.remove(col).unwrap_or(Value::Null));
            }
            *row = ordered;
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Composite key of a row, or `None` if any key cell is null or missing.
fn join_key(row: &Row, keys: &[&str]) -> Option<String> {
    let mut parts = Vec::with_capacity(keys.len());
    for key in keys {
        match row.get(*key) {
            None | Some(Value::Null) => return None,
            Some(v) => parts.push(v.clone()),
        }
    }
    Some(Value::Array(parts).to_string())
}

fn nullable_join_key(row: &Row, keys: &[&str]) -> String {
    let parts = keys
        .iter()
        .map(|k| row.get(*k).cloned().unwrap_or(Value::Null))
        .collect();
    Value::Array(parts).to_string()
}

fn coalesce_rows(columns: &[String], first: Option<&Row>, second: Option<&Row>) -> Row {
    columns
        .iter()
        .map(|col| {
            let a = first.and_then(|r| r.get(col)).filter(|v| !v.is_null());
            let b = second.and_then(|r| r.get(col)).filter(|v| !v.is_null());
            (col.clone(), a.or(b).cloned().unwrap_or(Value::Null))
        })
        .collect()
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| match row.get(c) {
                    Some(Value::String(s)) => s.clone(),
                    Some(v) => v.to_string(),
                    None => "null".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        write!(f, "[{} rows x {} columns]", self.rows.len(), self.columns.len())
    }
}

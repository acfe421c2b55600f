//! Composite key construction

use std::fmt;

use super::header::HeaderRow;

/// Ordered concatenation of a row's key-column values
///
/// With no key columns configured every row yields the empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompositeKey {
    fn from(s: &str) -> Self {
        CompositeKey(s.to_string())
    }
}

/// A data row split into its key and its comparable values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedRow {
    pub key: CompositeKey,
    /// One slot per header column; key and excluded slots are empty
    pub values: Vec<String>,
}

/// Builder for computing composite keys
pub struct KeyBuilder {
    separator: char,
}

impl Default for KeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBuilder {
    /// Create a new key builder joining components with a comma
    pub fn new() -> Self {
        Self { separator: ',' }
    }

    /// Set the separator between key components
    ///
    /// Use the field delimiter so that no component can contain it.
    pub fn with_separator(mut self, sep: char) -> Self {
        self.separator = sep;
        self
    }

    /// Split raw fields into a key and a value sequence aligned to `header`
    ///
    /// Fields beyond the header length are ignored; missing trailing fields
    /// become empty values.
    pub fn split_row<'a, I>(&self, header: &HeaderRow, fields: I) -> KeyedRow
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut key = String::new();
        let mut values = Vec::with_capacity(header.len());

        for (column, token) in header.iter().zip(fields) {
            if column.is_key() {
                key.push(self.separator);
                key.push_str(token);
                values.push(String::new());
            } else if column.is_compared() {
                values.push(token.to_string());
            } else {
                values.push(String::new());
            }
        }
        values.resize(header.len(), String::new());

        let key = key
            .strip_prefix(self.separator)
            .map(str::to_string)
            .unwrap_or(key);

        KeyedRow {
            key: CompositeKey(key),
            values,
        }
    }
}

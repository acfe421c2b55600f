//! Column header metadata

use std::fmt;

/// A single header column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    is_key: bool,
    is_excluded: bool,
}

impl Header {
    /// Create a plain (non-key, non-excluded) column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_key: false,
            is_excluded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column is part of the composite key
    pub fn is_key(&self) -> bool {
        self.is_key
    }

    /// Column is ignored during comparison
    pub fn is_excluded(&self) -> bool {
        self.is_excluded
    }

    /// Column takes part in value comparison
    pub fn is_compared(&self) -> bool {
        !self.is_key && !self.is_excluded
    }

    pub(crate) fn mark_key(&mut self) {
        self.is_key = true;
    }

    pub(crate) fn mark_excluded(&mut self) {
        self.is_excluded = true;
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.is_key, self.is_excluded)
    }
}

/// Ordered header sequence; position N describes column N of every data row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    columns: Vec<Header>,
}

impl HeaderRow {
    pub fn new(columns: Vec<Header>) -> Self {
        Self { columns }
    }

    /// Build unflagged headers from raw names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Header::new).collect())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Header::name)
    }

    /// Same names in the same order
    pub fn matches_names<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.columns.len() == names.len()
            && self
                .columns
                .iter()
                .zip(names)
                .all(|(header, name)| header.name() == name.as_ref())
    }

    pub(crate) fn columns_mut(&mut self) -> std::slice::IterMut<'_, Header> {
        self.columns.iter_mut()
    }
}

impl<'a> IntoIterator for &'a HeaderRow {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

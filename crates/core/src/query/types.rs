//! Request types for the grid start page.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

/// Query-string key holding the comma-separated column counts.
pub const COLS_KEY: &str = "cols";
/// Query-string key holding the font selection, passed through untouched.
pub const FONTS_KEY: &str = "fonts";
/// Query-string key holding the class-name prefix, passed through untouched.
pub const PREFIX_KEY: &str = "prefix";

/// Ordered string-to-string mapping taken from a query string.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps the
/// key in its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    params: Vec<(String, String)>,
}

impl RawQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from ordered key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over key/value pairs in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// One comma-separated segment of the `cols` parameter.
///
/// Segments that do not start with an integer are kept as [`Column::NotANumber`]
/// so the column count still reflects what the caller sent. Serializes as a JSON
/// number, or `null` for the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Column {
    Count(i64),
    NotANumber,
}

impl Column {
    /// The parsed integer, if any.
    pub fn count(&self) -> Option<i64> {
        match self {
            Column::Count(count) => Some(*count),
            Column::NotANumber => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Column::Count(_))
    }
}

impl From<Option<i64>> for Column {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Column::NotANumber, Column::Count)
    }
}

impl From<Column> for Option<i64> {
    fn from(column: Column) -> Self {
        column.count()
    }
}

/// A validated media query, keyed by the query-string parameter it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedMediaQuery {
    pub id: String,
    pub value: String,
}

impl NamedMediaQuery {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Structured form of a [`RawQuery`].
///
/// Every `media_queries` value parses as a media query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<Vec<Column>>,
    #[serde(default)]
    pub media_queries: Vec<NamedMediaQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

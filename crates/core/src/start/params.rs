//! Parameters handed to the grid generator for the start page.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::limits::{check_limits, LimitError};
use crate::query::{normalize_query, Column, NamedMediaQuery, NormalizedQuery, RawQuery};

/// Ordered media query id to expression mapping.
///
/// Folded from a list of [`NamedMediaQuery`]: a repeated id keeps its first
/// position and takes the later value. Serializes as a JSON object in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQueryMap {
    entries: Vec<(String, String)>,
}

impl MediaQueryMap {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a NamedMediaQuery> for MediaQueryMap {
    fn from_iter<I: IntoIterator<Item = &'a NamedMediaQuery>>(iter: I) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for mq in iter {
            match entries.iter_mut().find(|(id, _)| *id == mq.id) {
                Some((_, value)) => value.clone_from(&mq.value),
                None => entries.push((mq.id.clone(), mq.value.clone())),
            }
        }

        Self { entries }
    }
}

impl Serialize for MediaQueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// Accepted start-page request, ready for grid generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridParams {
    /// The normalized query, as exposed to the client.
    pub query: NormalizedQuery,
    /// Media queries keyed by id, as the grid generator expects them.
    pub media_queries: MediaQueryMap,
}

impl GridParams {
    /// Build generator parameters from an already-checked query.
    pub fn new(query: NormalizedQuery) -> Self {
        let media_queries = query.media_queries.iter().collect();
        Self {
            query,
            media_queries,
        }
    }

    pub fn cols(&self) -> Option<&[Column]> {
        self.query.cols.as_deref()
    }
}

/// Normalizes a raw start-page query and enforces the generation limits.
///
/// Invalid media queries are dropped silently; exceeding either limit rejects
/// the whole request with a [`LimitError`].
///
/// # Examples
///
/// ```
/// use gridstart_core::query::{Column, RawQuery};
/// use gridstart_core::start::process_start_query;
///
/// let raw = RawQuery::from_pairs([("cols", "6"), ("sm", "screen and (min-device-width: 480px)")]);
/// let params = process_start_query(&raw).unwrap();
///
/// assert_eq!(params.cols(), Some(&[Column::Count(6)][..]));
/// assert_eq!(params.media_queries.len(), 1);
/// ```
pub fn process_start_query(raw: &RawQuery) -> Result<GridParams, LimitError> {
    let query = normalize_query(raw);
    check_limits(&query)?;
    Ok(GridParams::new(query))
}

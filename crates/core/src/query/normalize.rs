use crate::media::validate_media_query;

use super::cols::normalize_cols;
use super::types::{NamedMediaQuery, NormalizedQuery, RawQuery, COLS_KEY, FONTS_KEY, PREFIX_KEY};

/// Builds a [`NormalizedQuery`] from a raw query-string mapping.
///
/// - `cols` is parsed with [`normalize_cols`] when non-empty.
/// - `fonts` and `prefix` are carried over untouched.
/// - Every other key is a media query candidate. Valid (or repaired) values are
///   kept in encounter order, invalid ones are silently dropped.
///
/// The input is not modified.
///
/// # Examples
///
/// ```
/// use gridstart_core::query::{normalize_query, Column, RawQuery};
///
/// let raw = RawQuery::from_pairs([("cols", "6"), ("med", "48em"), ("bad", "nope nope")]);
/// let query = normalize_query(&raw);
///
/// assert_eq!(query.cols, Some(vec![Column::Count(6)]));
/// assert_eq!(query.media_queries.len(), 1);
/// assert_eq!(query.media_queries[0].value, "screen and (min-width: 48em)");
/// ```
pub fn normalize_query(raw: &RawQuery) -> NormalizedQuery {
    let media_queries = raw
        .iter()
        .filter(|(key, _)| !is_reserved_key(key))
        .filter_map(|(key, value)| {
            validate_media_query(value).map(|valid| NamedMediaQuery::new(key, valid))
        })
        .collect();

    let cols = raw
        .get(COLS_KEY)
        .filter(|cols| !cols.is_empty())
        .map(normalize_cols);

    NormalizedQuery {
        cols,
        media_queries,
        fonts: raw.get(FONTS_KEY).map(str::to_string),
        prefix: raw.get(PREFIX_KEY).map(str::to_string),
    }
}

/// Keys that are never treated as media queries.
fn is_reserved_key(key: &str) -> bool {
    matches!(key, COLS_KEY | FONTS_KEY | PREFIX_KEY)
}

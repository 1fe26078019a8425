use crate::query::{Column, NamedMediaQuery, NormalizedQuery};

use super::error::LimitError;

/// Maximum number of `cols` segments per request.
pub const MAX_COLS: usize = 100;
/// Maximum number of media queries per request.
pub const MAX_MEDIA_QUERIES: usize = 20;

/// Whether the column list is within [`MAX_COLS`]. Absent columns always pass.
///
/// Only the number of segments is checked, not whether each one parsed.
pub fn is_below_col_limit(cols: Option<&[Column]>) -> bool {
    cols.is_none_or(|cols| cols.len() <= MAX_COLS)
}

/// Whether the media query list is within [`MAX_MEDIA_QUERIES`].
pub fn is_below_mq_limit(media_queries: &[NamedMediaQuery]) -> bool {
    media_queries.len() <= MAX_MEDIA_QUERIES
}

/// Checks both limits, rejecting the whole request if either is exceeded.
///
/// # Examples
///
/// ```
/// use gridstart_core::limits::check_limits;
/// use gridstart_core::query::{normalize_query, RawQuery};
///
/// let cols = vec!["1"; 101].join(",");
/// let query = normalize_query(&RawQuery::from_pairs([("cols", cols)]));
///
/// assert!(check_limits(&query).is_err());
/// ```
pub fn check_limits(query: &NormalizedQuery) -> Result<(), LimitError> {
    let cols = query.cols.as_deref();
    if !is_below_col_limit(cols) {
        return Err(LimitError::TooManyColumns {
            count: cols.map_or(0, <[Column]>::len),
        });
    }

    if !is_below_mq_limit(&query.media_queries) {
        return Err(LimitError::TooManyMediaQueries {
            count: query.media_queries.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(count: usize) -> Vec<Column> {
        vec![Column::Count(1); count]
    }

    fn media_queries(count: usize) -> Vec<NamedMediaQuery> {
        (0..count)
            .map(|i| NamedMediaQuery::new(format!("mq{i}"), "screen"))
            .collect()
    }

    // ==================== is_below_col_limit ====================

    #[test]
    fn col_limit_passes_when_absent() {
        assert!(is_below_col_limit(None));
    }

    #[test]
    fn col_limit_holds_up_to_max() {
        for count in [0, 1, 50, MAX_COLS] {
            assert!(is_below_col_limit(Some(&columns(count))), "count {count}");
        }
    }

    #[test]
    fn col_limit_fails_above_max() {
        assert!(!is_below_col_limit(Some(&columns(MAX_COLS + 1))));
        assert!(!is_below_col_limit(Some(&columns(500))));
    }

    #[test]
    fn col_limit_counts_markers() {
        let cols = vec![Column::NotANumber; MAX_COLS + 1];
        assert!(!is_below_col_limit(Some(&cols)));
    }

    // ==================== is_below_mq_limit ====================

    #[test]
    fn mq_limit_passes_when_empty() {
        assert!(is_below_mq_limit(&[]));
    }

    #[test]
    fn mq_limit_holds_up_to_max() {
        assert!(is_below_mq_limit(&media_queries(1)));
        assert!(is_below_mq_limit(&media_queries(MAX_MEDIA_QUERIES)));
    }

    #[test]
    fn mq_limit_fails_above_max() {
        assert!(!is_below_mq_limit(&media_queries(MAX_MEDIA_QUERIES + 1)));
    }

    // ==================== check_limits ====================

    #[test]
    fn check_limits_accepts_within_bounds() {
        let query = NormalizedQuery {
            cols: Some(columns(MAX_COLS)),
            media_queries: media_queries(MAX_MEDIA_QUERIES),
            ..Default::default()
        };
        assert_eq!(check_limits(&query), Ok(()));
    }

    #[test]
    fn check_limits_rejects_too_many_columns() {
        let query = NormalizedQuery {
            cols: Some(columns(101)),
            ..Default::default()
        };
        assert_eq!(
            check_limits(&query),
            Err(LimitError::TooManyColumns { count: 101 })
        );
    }

    #[test]
    fn check_limits_rejects_too_many_media_queries() {
        let query = NormalizedQuery {
            media_queries: media_queries(21),
            ..Default::default()
        };
        assert_eq!(
            check_limits(&query),
            Err(LimitError::TooManyMediaQueries { count: 21 })
        );
    }
}

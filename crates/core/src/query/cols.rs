use super::types::Column;

/// Parses the `cols` parameter into one [`Column`] per comma-separated segment.
///
/// Each segment is read as a base-10 integer prefix: leading whitespace and a
/// sign are allowed, trailing garbage is ignored. Segments without a leading
/// digit become [`Column::NotANumber`].
///
/// # Examples
///
/// ```
/// use gridstart_core::query::{normalize_cols, Column};
///
/// assert_eq!(normalize_cols("6"), vec![Column::Count(6)]);
/// assert_eq!(
///     normalize_cols("5,24px,abc"),
///     vec![Column::Count(5), Column::Count(24), Column::NotANumber]
/// );
/// ```
pub fn normalize_cols(cols: &str) -> Vec<Column> {
    cols.split(',').map(parse_column).collect()
}

fn parse_column(segment: &str) -> Column {
    let trimmed = segment.trim_start();

    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return Column::NotANumber;
    }

    // Out-of-range values cannot be column counts either.
    format!("{sign}{}", &unsigned[..digits_len])
        .parse::<i64>()
        .map_or(Column::NotANumber, Column::Count)
}

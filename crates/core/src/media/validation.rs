//! Media query validation with width-value repair.
//!
//! Query-string values are often bare widths like `48em` rather than full
//! media queries. Those are wrapped as `screen and (min-width: <value>)`
//! before being rejected.

use std::sync::LazyLock;

use regex::Regex;

use super::parser::parse_media_query_list;

/// Maximal runs of ASCII letters or ASCII digits.
static LETTER_OR_DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]+|[0-9]+").expect("valid token pattern"));

/// Splits a string into maximal runs of letters and maximal runs of digits,
/// in order. Every other character is ignored.
///
/// # Examples
///
/// ```
/// use gridstart_core::media::tokenize;
///
/// assert_eq!(tokenize("48em"), vec!["48", "em"]);
/// assert_eq!(tokenize("480 px!"), vec!["480", "px"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    LETTER_OR_DIGIT_RUNS
        .find_iter(input)
        .map(|found| found.as_str())
        .collect()
}

/// Wraps a `<number><unit>` shaped value as a `min-width` screen query.
///
/// Returns `None` unless the value tokenizes to exactly two tokens and the
/// first one is a non-zero number.
///
/// # Examples
///
/// ```
/// use gridstart_core::media::repair_width_value;
///
/// assert_eq!(
///     repair_width_value("48em"),
///     Some("screen and (min-width: 48em)".to_string())
/// );
/// assert_eq!(repair_width_value("em48"), None);
/// assert_eq!(repair_width_value("48em60em"), None);
/// ```
pub fn repair_width_value(input: &str) -> Option<String> {
    let tokens = tokenize(input);

    let [number, _unit] = tokens.as_slice() else {
        return None;
    };

    // Letter runs like `inf` or `nan` must not pass as numbers.
    let is_number = number.bytes().all(|b| b.is_ascii_digit())
        && number.parse::<f64>().is_ok_and(|value| value != 0.0);

    is_number.then(|| format!("screen and (min-width: {input})"))
}

/// Validates a query-string value as a media query.
///
/// Returns the value unchanged when it already parses, the repaired
/// `screen and (min-width: ...)` form when the repair parses, and `None`
/// otherwise. Parse errors never escape this function.
///
/// # Examples
///
/// ```
/// use gridstart_core::media::validate_media_query;
///
/// assert_eq!(
///     validate_media_query("screen and (min-width: 500px)").as_deref(),
///     Some("screen and (min-width: 500px)")
/// );
/// assert_eq!(
///     validate_media_query("480px").as_deref(),
///     Some("screen and (min-width: 480px)")
/// );
/// assert_eq!(validate_media_query("not a query"), None);
/// ```
pub fn validate_media_query(input: &str) -> Option<String> {
    if parse_media_query_list(input).is_ok() {
        return Some(input.to_string());
    }

    let repaired = repair_width_value(input)?;

    parse_media_query_list(&repaired).ok().map(|_| repaired)
}

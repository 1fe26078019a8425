//! Parsed representation of a media query list.
//!
//! Pure data types produced by [`parse_media_query_list`](super::parse_media_query_list).

/// Leading modifier of a media query (`only screen`, `not print`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaModifier {
    Only,
    Not,
}

/// Range prefix on a media feature name (`min-width`, `max-width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePrefix {
    Min,
    Max,
}

/// A single `(feature: value)` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaExpression {
    pub prefix: Option<RangePrefix>,
    /// Feature name, lowercased, without the range prefix.
    pub feature: String,
    /// Raw value text, trimmed. `None` for boolean features such as `(color)`.
    pub value: Option<String>,
}

impl MediaExpression {
    /// Build an expression from a lowercased feature name, splitting off any
    /// `min-`/`max-` prefix.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        let name = name.into();

        let (prefix, feature) = if let Some(rest) = name.strip_prefix("min-") {
            (Some(RangePrefix::Min), rest.to_string())
        } else if let Some(rest) = name.strip_prefix("max-") {
            (Some(RangePrefix::Max), rest.to_string())
        } else {
            (None, name)
        };

        Self {
            prefix,
            feature,
            value,
        }
    }
}

/// One comma-separated entry of a media query list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    pub modifier: Option<MediaModifier>,
    /// Media type, lowercased. `None` when the query starts with an expression.
    pub media_type: Option<String>,
    pub expressions: Vec<MediaExpression>,
}

impl MediaQuery {
    /// The effective media type (`all` when none was written).
    pub fn media_type(&self) -> &str {
        self.media_type.as_deref().unwrap_or("all")
    }

    /// Whether the query is negated with `not`.
    pub fn is_inverse(&self) -> bool {
        self.modifier == Some(MediaModifier::Not)
    }
}

/// A parsed, comma-separated media query list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQueryList {
    pub queries: Vec<MediaQuery>,
}

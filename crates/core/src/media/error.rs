use thiserror::Error;

/// Errors produced by the strict media query grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaQueryError {
    #[error("Media query cannot be empty")]
    Empty,
    #[error("Invalid CSS media query: \"{query}\" (line {line}, column {column})")]
    Invalid {
        query: String,
        line: u32,
        column: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_query_error_display() {
        assert_eq!(
            MediaQueryError::Empty.to_string(),
            "Media query cannot be empty"
        );

        let error = MediaQueryError::Invalid {
            query: "48em".to_string(),
            line: 0,
            column: 1,
        };
        assert_eq!(
            error.to_string(),
            "Invalid CSS media query: \"48em\" (line 0, column 1)"
        );
    }
}

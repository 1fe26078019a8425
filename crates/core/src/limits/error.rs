use thiserror::Error;

/// Message shown when a request exceeds the column or media query ceiling.
pub const OVERLOAD_MESSAGE: &str = "To protect our servers from being overloaded, our online tool can only generate up to 100 columns and 20 media queries. Try again with a lower number of columns or media queries.";

/// A request exceeded one of the generation limits.
///
/// Both variants display the same message; the counts are kept for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("{}", OVERLOAD_MESSAGE)]
    TooManyColumns { count: usize },
    #[error("{}", OVERLOAD_MESSAGE)]
    TooManyMediaQueries { count: usize },
}

mod error;
mod parser;
mod types;
mod validation;

pub use error::MediaQueryError;
pub use parser::parse_media_query_list;
pub use types::{MediaExpression, MediaModifier, MediaQuery, MediaQueryList, RangePrefix};
pub use validation::{repair_width_value, tokenize, validate_media_query};

mod cols;
mod normalize;
mod types;

pub use cols::normalize_cols;
pub use normalize::normalize_query;
pub use types::{
    Column, NamedMediaQuery, NormalizedQuery, RawQuery, COLS_KEY, FONTS_KEY, PREFIX_KEY,
};

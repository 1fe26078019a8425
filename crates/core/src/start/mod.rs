mod params;

pub use params::{process_start_query, GridParams, MediaQueryMap};

mod checks;
mod error;
mod http_mapping;

pub use checks::{
    check_limits, is_below_col_limit, is_below_mq_limit, MAX_COLS, MAX_MEDIA_QUERIES,
};
pub use error::{LimitError, OVERLOAD_MESSAGE};
pub use http_mapping::limit_error_to_status_code;

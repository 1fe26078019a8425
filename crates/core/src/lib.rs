//! Pure grid-request logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Media query parsing, validation and width-value repair
//! - Normalization of raw query-string parameters
//! - Column and media-query limits
//! - The parameter set handed to the grid generator
//!
//! # Example
//!
//! ```
//! use gridstart_core::query::RawQuery;
//! use gridstart_core::start::process_start_query;
//!
//! let raw = RawQuery::from_pairs([("cols", "6"), ("med", "48em"), ("lrg", "60em")]);
//! let params = process_start_query(&raw).unwrap();
//!
//! assert_eq!(
//!     params.media_queries.get("med"),
//!     Some("screen and (min-width: 48em)")
//! );
//! ```

pub mod limits;
pub mod media;
pub mod query;
pub mod start;

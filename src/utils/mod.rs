//! Helpers shared by the web layer.
//!
//! - [`record_id`] - Path segment to record identifier parsing
//! - [`dates`] - ISO-8601 date parsing and input formatting

pub mod dates;
pub mod record_id;

pub use dates::{format_input_date, parse_iso_date};
pub use record_id::parse_record_id;

//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static file handler: MIME
//! inference, cache validation, Range parsing, and response builders.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use range::parse_range_header;
pub use response::{
    build_file_response, build_method_not_allowed_response, build_not_found_response,
    build_not_modified_response, build_options_response, build_partial_response,
    build_payload_too_large_response, build_range_not_satisfiable_response,
};

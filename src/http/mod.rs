//! HTTP protocol layer module
//!
//! Response builders, MIME lookup, and cache revalidation helpers,
//! decoupled from specific business logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_500_response, build_cached_response,
    build_created_response, build_html_response, build_text_response,
};

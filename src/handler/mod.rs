//! Request handler module
//!
//! Request dispatch plus the fixed set of page handlers and the static
//! file collaborator.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

//! REST API module.
//!
//! Read-only access to the stored word statistics.

mod statistics;

pub use statistics::*;

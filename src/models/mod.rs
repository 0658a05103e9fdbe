//! Data models for the statistics service.
//!
//! `Post` and `Comment` mirror the content API payloads; `WordCount` is the
//! only record that is persisted and served.

mod post;
mod word_count;

pub use post::*;
pub use word_count::*;

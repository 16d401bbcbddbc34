// Error types
pub mod error;

// Source trait (public API)
pub mod source;

// HTTP implementation
pub mod http;

// Wire payload shapes and translation into domain types
pub(crate) mod mapper;
pub(crate) mod schema;

pub use error::{Error, Result};
pub use http::{HttpFeedSource, DEFAULT_BASE};
pub use source::FeedSource;

//! Testing infrastructure for crewfeed integration tests.
//!
//! - `fixtures`: canonical sample employees, posts, profiles, and comments
//! - `source`: `StaticFeedSource`, a scriptable in-memory feed source with
//!   per-operation failure injection and call counting

pub mod fixtures;
pub mod source;

pub use source::{Operation, StaticFeedSource};

//! In-memory element tree.
//!
//! The view layer never touches a real output surface directly; it renders
//! into a [`Page`], and the binary decides how to draw that tree (terminal
//! UI, plain text dump). Tests drive the exact same structure.

pub mod node;
pub mod page;

pub use node::{NodeId, Tag};
pub use page::{Descendants, Page};

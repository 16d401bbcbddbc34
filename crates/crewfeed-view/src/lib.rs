//! View layer: element builders, the comment toggle protocol, and the
//! controller that runs the selector-change refresh cycle.
//!
//! Everything here renders into a [`crewfeed_page::Page`]; nothing draws to a
//! terminal. Data arrives through [`crewfeed_api::FeedSource`], with failures
//! degraded to absence at the [`fetch`] seam so one bad request never takes
//! down a whole render.

pub mod build;
pub mod controller;
pub mod fetch;
pub mod registry;
pub mod toggle;

pub use controller::{ControllerState, RefreshCycle, RefreshOutcome, ViewController};
pub use registry::ListenerRegistry;
pub use toggle::ToggleOutcome;

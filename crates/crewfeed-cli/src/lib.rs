//! Command-line entry points for the crewfeed post board client.
//!
//! The binary is a thin shell around [`crewfeed_view::ViewController`]:
//! argument parsing, configuration resolution, and the two front ends
//! (interactive TUI and one-shot text render) live here.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel};
pub use commands::run;

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "crewfeed")]
#[command(about = "Browse a team's post board from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the post board API
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse employees, posts, and comments interactively (default)")]
    Browse,

    #[command(about = "Run one refresh cycle and print the page as text")]
    Render {
        #[arg(long, help = "Employee id to load posts for (defaults to 1)")]
        employee: Option<u64>,
    },

    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration and where it comes from")]
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        write!(f, "{}", s)
    }
}

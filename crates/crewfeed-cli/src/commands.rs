use anyhow::Result;

use crate::args::{Cli, Commands, ConfigCommand};
use crate::config::{Config, Settings};
use crate::handlers;
use crate::logging;

/// Dispatch a parsed command line. No subcommand means `browse`.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load()?;
    let settings = Settings::resolve(&cli, &config);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&settings),
        Commands::Render { employee } => handlers::render::handle(&settings, employee),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle(&settings),
        },
    }
}

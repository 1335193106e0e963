//! shelfrank - rank retail product listings by a weighted desirability score

use clap::Parser;

use shelfrank::cli::{Cli, Commands, ConfigCommands};
use shelfrank::error::Result;
use shelfrank::logging::init_logging;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze { input, top, json, output, no_color, all } => {
            commands::cmd_analyze(&input, top, json, output, no_color, all)
        }

        Commands::Config(ConfigCommands::Show) => commands::cmd_config_show(),
        Commands::Config(ConfigCommands::Path) => commands::cmd_config_path(),
        Commands::Config(ConfigCommands::Init { force }) => commands::cmd_config_init(force),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}

//! Miscellaneous commands: config, completions

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;

use shelfrank::cli::{Cli, CompletionShell};
use shelfrank::config::Config;
use shelfrank::error::{Result, ShelfError};

/// Print the active configuration as TOML
pub fn cmd_config_show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load()?;
    let content = toml::to_string_pretty(&config)
        .map_err(|e| ShelfError::ConfigError(e.to_string()))?;

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", content);
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        return Err(ShelfError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let path = Config::default().save()?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "shelfrank", &mut io::stdout());
    Ok(())
}

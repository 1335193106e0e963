use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "shelfrank")]
#[command(author, version, about = "Score retail product listings and report the top picks", long_about = None)]
#[command(after_help = r#"Examples:
  shelfrank analyze products.json                 Rank the top 3 products
  shelfrank analyze products.json --top 5 --json  Top 5 as JSON
  scrape-tool | shelfrank analyze -               Read records from stdin
  shelfrank config init                           Write a default config file
"#)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize, score and rank a JSON array of product records
    #[command(after_help = r#"Input format:
  [
    {"title": "Smart TV 50", "price": "R$ 2.499,00", "url": "https://...", "rating": 4.7, "rating_count": 120},
    {"title": "Soundbar", "price": "R$ 899,90", "url": "https://...", "review": "4,1 (15)"}
  ]
"#)]
    Analyze {
        /// JSON file with raw records, or `-` for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Number of products to rank (overrides config)
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
        top: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Also list every product with its score (text output)
        #[arg(long)]
        all: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

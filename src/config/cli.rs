use crate::config::toml_config::PortfolioConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "portfolio-sync")]
#[command(about = "Read portfolio content (projects, skills, blog posts) from a spreadsheet")]
pub struct CliArgs {
    /// Path to TOML configuration file; built-in endpoint when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Language for this run only; the saved preference is left untouched
    #[arg(long)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one content domain (projects, skills, posts) or all of them
    Fetch {
        #[arg(default_value = "all")]
        domain: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show one project
    Project { id: String },
    /// Show one blog post
    Post { id: i64 },
    /// Print the saved language, or save a new one
    Language { code: Option<String> },
    /// Print the saved theme, or change it
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
    Light,
    Dark,
}

impl CliArgs {
    pub fn load_config(&self) -> Result<PortfolioConfig> {
        match &self.config {
            Some(path) => PortfolioConfig::from_file(path),
            None => Ok(PortfolioConfig::default()),
        }
    }
}

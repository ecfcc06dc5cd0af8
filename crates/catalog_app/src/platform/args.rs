use catalog_engine::{BASE_URL_ENV, DEFAULT_BASE_URL};
use catalog_logging::LogDestination;
use clap::{Parser, ValueEnum};

/// Terminal client for the product catalog API.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
pub struct Args {
    /// Base URL of the products backend.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log debug messages too.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

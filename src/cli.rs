// src/cli.rs
// CLI definition for the foresight binary

use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing::Level;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "foresight")]
#[command(about = "Projects the outcome of a decision with a generative model")]
#[command(version)]
pub struct Cli {
    /// Bind host (overrides HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Gemini model identifier (overrides GEMINI_MODEL)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Evaluate one decision and print the JSON result
    Ask {
        /// The decision to evaluate (e.g. "learn guitar")
        #[arg(index = 1)]
        decision: String,

        /// Time span (e.g. "2 years")
        #[arg(short, long)]
        time: Option<String>,

        /// Effort level (e.g. "daily 2h")
        #[arg(short, long)]
        intensity: Option<String>,
    },

    /// Validate configuration and print a report
    CheckConfig,
}

impl Cli {
    /// Apply command-line overrides on top of environment configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
    }

    /// Parsed log level, defaulting to INFO on unknown values
    pub fn log_level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::INFO)
    }
}

use std::path::PathBuf;

use clap::Parser;
use console::Term;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in the flag, the environment, or the interactive prompt.
    /// The pipeline must not start without one.
    #[error("no API key provided (set ANTHROPIC_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "appcrew", about = "Build a single-file HTML app with a crew of four AI agents")]
pub struct Config {
    /// Free-text description of the app to build
    pub request: Option<String>,

    /// Build one of the quick examples by number (see --list-examples)
    #[arg(long, conflicts_with = "request")]
    pub example: Option<usize>,

    /// Print the quick examples and exit
    #[arg(long)]
    pub list_examples: bool,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, default_value = appcrew_client::DEFAULT_MODEL)]
    pub model: String,

    /// Directory the generated app file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the result without writing the app file
    #[arg(long)]
    pub no_save: bool,
}

impl Config {
    /// Resolve the API key: flag/env first, then a masked terminal prompt.
    /// An empty answer is a hard stop, not a warning.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }

        let term = Term::stderr();
        term.write_str("Enter Anthropic API key: ")?;
        let key = term.read_secure_line()?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(key.to_string())
    }
}

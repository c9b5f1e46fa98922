//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file at startup
//! - Quiet mode (no welcome banner)
//! - Writing a default config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A stack-based console text editor
#[derive(Parser, Debug)]
#[command(name = "stackpad", version, about = "A stack-based console text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Do not print the welcome banner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty, unnamed buffer
    Empty,
    /// Load an existing file
    LoadFile(PathBuf),
    /// Start empty, with a path to save to later
    NewFile(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What to open
    pub mode: StartupMode,
    /// Whether to print the welcome banner
    pub show_banner: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self, config: &EditorConfig) -> StartupConfig {
        let mode = match self.file {
            None => StartupMode::Empty,
            Some(path) if path.exists() => StartupMode::LoadFile(path),
            Some(path) => StartupMode::NewFile(path),
        };

        StartupConfig {
            mode,
            show_banner: config.show_banner && !self.quiet,
        }
    }
}

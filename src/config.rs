//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::highlight::{DEFAULT_THEME, Highlighter};

/// Input path meaning standard input.
pub const STDIN: &str = "-";

/// Command line configuration for markview.
#[derive(Debug, Clone, Parser)]
#[command(name = "markview", version, about, long_about = None)]
pub struct Config {
    /// Markdown file, or `-` for standard input
    #[arg(default_value = STDIN)]
    pub input: PathBuf,

    /// Output HTML file (standard output when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap output in a standalone HTML page
    #[arg(long)]
    pub standalone: bool,

    /// Page title for standalone output
    #[arg(long)]
    pub title: Option<String>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Write the bundled stylesheet to this path
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Render strong emphasis as <strong> instead of a styled <span>
    #[arg(long)]
    pub semantic_strong: bool,

    /// Open the output file in the default browser
    #[arg(long)]
    pub open: bool,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns true when input is read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN)
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist, `--open` is given
    /// without an output file, or the theme is not bundled.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.open && self.output.is_none() {
            bail!("--open requires --output");
        }

        if !Highlighter::has_theme(&self.theme) {
            bail!("Unknown theme: {}", self.theme);
        }

        Ok(())
    }

    /// Returns page title from configuration or input file name.
    pub fn document_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        if self.reads_stdin() {
            return "Markdown".to_string();
        }

        self.input
            .file_stem()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| "Markdown".to_string())
    }
}

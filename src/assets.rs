//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::highlight::Highlighter;

const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Bundles the markdown stylesheet with the highlighter's theme CSS
pub fn stylesheet(highlighter: &Highlighter) -> Result<String> {
    let theme = highlighter.theme_css()?;
    Ok(bundle(&[MARKDOWN, &theme]))
}

/// Writes the bundled stylesheet to `path`
pub fn write_stylesheet(path: &Path, highlighter: &Highlighter) -> Result<()> {
    let css = stylesheet(highlighter)?;
    fs::write(path, css)
        .with_context(|| format!("Failed to write CSS asset: {}", path.display()))?;
    Ok(())
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

use crate::components::code_block::{CodeBlock, HighlightedCodeBlock};
use crate::highlight::Highlighter;
use crate::visual::VisualTree;

use super::presentation::{Presentation, StrongElement};
use super::syntax::{self, SyntaxNode};

/// Renders markdown to a styled visual tree.
///
/// Parses with GitHub Flavored Markdown extensions (tables, strikethrough,
/// autolinks, task lists), then applies the presentation table to every
/// node. Code is delegated to a [`CodeBlock`] collaborator, by default
/// syntect highlighting with CSS classes.
///
/// The renderer holds no per-call state and is `Send + Sync`, so one
/// instance can serve concurrent readers.
pub struct MarkdownRenderer {
    presentation: Presentation,
}

/// comrak options with the GitHub Flavored Markdown extensions enabled.
fn gfm_options() -> Options<'static> {
    let mut options = Options::default();

    // Extension options (GFM features)
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options
}

impl MarkdownRenderer {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Raw HTML in the source is never emitted as markup; it is presented
    /// as text.
    pub fn new() -> Self {
        Self::with_code_block(HighlightedCodeBlock::new())
    }

    /// Creates renderer that delegates code nodes to `code_block`.
    pub fn with_code_block(code_block: impl CodeBlock + 'static) -> Self {
        Self {
            presentation: Presentation::new(Box::new(code_block)),
        }
    }

    /// Creates renderer highlighting code with the named syntect theme.
    ///
    /// # Errors
    ///
    /// Returns error if the theme is not bundled with syntect
    pub fn with_theme(theme: &str) -> Result<Self> {
        let highlighter = Highlighter::with_theme(theme)
            .with_context(|| format!("Failed to create highlighter with theme: {}", theme))?;
        Ok(Self::with_code_block(HighlightedCodeBlock::with_highlighter(
            highlighter,
        )))
    }

    /// Presents strong emphasis as a `strong` element instead of a `span`.
    pub fn with_semantic_strong(mut self, semantic: bool) -> Self {
        self.presentation.set_strong(if semantic {
            StrongElement::Strong
        } else {
            StrongElement::Span
        });
        self
    }

    /// Parses markdown into the typed syntax tree.
    pub fn parse(&self, content: &str) -> SyntaxNode {
        syntax::parse(content, &gfm_options())
    }

    /// Renders markdown content to a visual tree.
    ///
    /// Never fails: malformed markdown is recovered by the parser.
    pub fn render(&self, content: &str) -> VisualTree {
        tracing::debug!(bytes = content.len(), "Rendering markdown");

        let document = self.parse(content);
        let children = document
            .children
            .iter()
            .map(|node| self.presentation.present(node))
            .collect();

        VisualTree { children }
    }

    /// Renders markdown content to an HTML string.
    pub fn render_html(&self, content: &str) -> String {
        self.render(content).to_html()
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<VisualTree> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

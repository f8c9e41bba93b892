//! Syntax highlighting with syntect.

use anyhow::{Context, Result, bail};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Class prefix of highlighted spans, matching highlight.js conventions.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Highlights code snippets into HTML with CSS classes.
///
/// Spans carry `hljs-` prefixed scope classes; colors come from the
/// stylesheet returned by [`Highlighter::theme_css`].
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Creates highlighter with the default theme.
    pub fn new() -> Self {
        let mut themes = ThemeSet::load_defaults();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: themes.themes.remove(DEFAULT_THEME).unwrap_or_default(),
        }
    }

    /// Creates highlighter with a theme bundled with syntect.
    ///
    /// # Errors
    ///
    /// Returns error if no bundled theme has the given name
    pub fn with_theme(name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let Some(theme) = themes.themes.remove(name) else {
            let mut available: Vec<_> = themes.themes.keys().cloned().collect();
            available.sort();
            bail!(
                "Unknown theme '{}', available: {}",
                name,
                available.join(", ")
            );
        };

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Returns true when syntect bundles a theme with the given name.
    ///
    /// Checks the theme name only; no syntax definitions are loaded.
    pub fn has_theme(name: &str) -> bool {
        ThemeSet::load_defaults().themes.contains_key(name)
    }

    /// Highlights code for a language token or file extension.
    ///
    /// # Returns
    ///
    /// `None` when the language is unknown, otherwise HTML with
    /// `<span class="hljs-*">` tags
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails on a line
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(None);
        };

        if code.is_empty() {
            return Ok(Some(String::new()));
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(Some(generator.finalize()))
    }

    /// Stylesheet coloring the highlighted spans with the configured theme.
    ///
    /// # Errors
    ///
    /// Returns error if syntect cannot generate CSS for the theme
    pub fn theme_css(&self) -> Result<String> {
        css_for_theme_with_class_style(&self.theme, CLASS_STYLE)
            .context("Failed to generate theme stylesheet")
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust_keywords() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight("fn main() {}\n", "rust")
            .expect("Highlighting should succeed")
            .expect("Rust should be known");

        // Assert
        assert!(html.contains("hljs-"), "Should contain highlight classes: {}", html);
        assert!(html.contains("main"), "Should keep identifiers");
    }

    #[test]
    fn test_highlight_by_extension() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight("def bar():\n    pass\n", "py")
            .expect("Highlighting should succeed");

        // Assert
        assert!(html.is_some(), "Extension lookup should find Python");
    }

    #[test]
    fn test_highlight_unknown_language() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight("some code", "unknownlang")
            .expect("Unknown language is not an error");

        // Assert
        assert_eq!(html, None);
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight("", "rust")
            .expect("Should handle empty code");

        // Assert
        assert_eq!(html, Some(String::new()));
    }

    #[test]
    fn test_highlight_escapes_special_chars() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight("const x = \"<script>\";\n", "js")
            .expect("Highlighting should succeed")
            .expect("JavaScript should be known");

        // Assert
        assert!(html.contains("&lt;script&gt;"), "Should escape markup: {}", html);
    }

    #[test]
    fn test_has_theme() {
        // Arrange & Act & Assert
        assert!(Highlighter::has_theme(DEFAULT_THEME));
        assert!(Highlighter::has_theme("base16-ocean.dark"));
        assert!(!Highlighter::has_theme("Nope"));
    }

    #[test]
    fn test_with_theme_known() {
        // Arrange & Act
        let result = Highlighter::with_theme("base16-ocean.dark");

        // Assert
        assert!(result.is_ok(), "Bundled theme should load");
    }

    #[test]
    fn test_with_theme_unknown_lists_available() {
        // Arrange & Act
        let result = Highlighter::with_theme("Nope");

        // Assert
        let err = result.err().expect("Unknown theme should fail").to_string();
        assert!(err.contains("Nope"), "Should name the theme: {}", err);
        assert!(err.contains(DEFAULT_THEME), "Should list themes: {}", err);
    }

    #[test]
    fn test_theme_css_uses_prefix() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let css = highlighter.theme_css().expect("Should generate CSS");

        // Assert
        assert!(css.contains(".hljs-"), "Should target prefixed classes: {}", css);
    }
}

//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module parses markdown using comrak with GFM extensions (tables,
//! strikethrough, autolinks, task lists), converts the parse tree into a
//! typed syntax tree, and presents every node through a fixed styling table.
//! Links are routed between in-app navigation and external anchors.

mod links;
mod memo;
mod presentation;
mod renderer;
mod syntax;

pub use links::{LinkRoute, safe_url};
pub use memo::{MemoizedMarkdown, should_skip_render};
pub use presentation::{Presentation, StrongElement, StyleKey};
pub use renderer::MarkdownRenderer;
pub use syntax::{
    CodeNode, HeadingLevel, ImageNode, LinkNode, ListKind, NodeKind, SyntaxNode, TableCell, parse,
};

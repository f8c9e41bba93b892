//! Styled markdown rendering for web front ends.
//!
//! Markdown is parsed with GitHub Flavored Markdown extensions, mapped node
//! by node onto styled visual elements, and returned as an owned
//! [`VisualTree`] that serializes to HTML. Application paths become in-app
//! navigation links; every other destination opens externally.

pub mod assets;
pub mod components;
mod config;
mod highlight;
mod markdown;
mod visual;

pub use config::Config;
pub use highlight::{DEFAULT_THEME, Highlighter};
pub use markdown::{
    CodeNode, HeadingLevel, ImageNode, LinkNode, LinkRoute, ListKind, MarkdownRenderer,
    MemoizedMarkdown, NodeKind, Presentation, StrongElement, StyleKey, SyntaxNode, TableCell,
    parse, safe_url, should_skip_render,
};
pub use visual::{
    Alignment, AppLink, Attributes, Element, LinkRel, LinkTarget, Tag, VisualNode, VisualTree,
    markup,
};

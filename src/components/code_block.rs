//! Code-block presentation

use crate::highlight::Highlighter;
use crate::markdown::CodeNode;
use crate::visual::{Element, Tag, VisualNode, markup};

const INLINE_CLASS: &str = "px-1.5 py-0.5 rounded bg-gray-100 text-pink-600 font-mono text-sm";
const BLOCK_CLASS: &str = "block overflow-x-auto font-mono text-sm text-gray-100";

/// Presents code nodes on behalf of the presentation table.
///
/// Receives the full code node: language hint, raw text, and whether the
/// code sits inline in a paragraph or inside a preformatted block.
pub trait CodeBlock: Send + Sync {
    fn present(&self, code: &CodeNode) -> VisualNode;
}

/// Default collaborator: syntect highlighting with CSS classes.
///
/// Blocks in a known language get `hljs-*` spans; unknown or missing
/// languages fall back to escaped text. Inline code is never highlighted.
pub struct HighlightedCodeBlock {
    highlighter: Highlighter,
}

impl HighlightedCodeBlock {
    pub fn new() -> Self {
        Self::with_highlighter(Highlighter::new())
    }

    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self { highlighter }
    }

    fn block_body(&self, code: &CodeNode) -> VisualNode {
        let Some(language) = code.language.as_deref() else {
            return VisualNode::text(code.text.clone());
        };

        match self.highlighter.highlight(&code.text, language) {
            Ok(Some(html)) => markup(maud::PreEscaped(html)),
            Ok(None) => VisualNode::text(code.text.clone()),
            Err(e) => {
                tracing::warn!(language, "Falling back to plain code block: {:#}", e);
                VisualNode::text(code.text.clone())
            }
        }
    }
}

impl Default for HighlightedCodeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBlock for HighlightedCodeBlock {
    fn present(&self, code: &CodeNode) -> VisualNode {
        if code.inline {
            return Element::new(Tag::Code)
                .with_class(INLINE_CLASS)
                .with_children(vec![VisualNode::text(code.text.clone())])
                .into();
        }

        let class = match &code.language {
            Some(language) => format!("language-{} {}", language, BLOCK_CLASS),
            None => BLOCK_CLASS.to_string(),
        };

        Element::new(Tag::Code)
            .with_class(class)
            .with_children(vec![self.block_body(code)])
            .into()
    }
}

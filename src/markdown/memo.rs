//! Memoization guard keyed on the markdown input.

use std::sync::Arc;

use crate::visual::VisualTree;

use super::MarkdownRenderer;

/// Returns true when re-rendering can be skipped.
///
/// Inputs are compared by value.
pub fn should_skip_render(previous: &str, next: &str) -> bool {
    previous == next
}

/// Renderer wrapper that reuses the last tree while the input is unchanged.
pub struct MemoizedMarkdown {
    renderer: MarkdownRenderer,
    last: Option<(String, Arc<VisualTree>)>,
}

impl MemoizedMarkdown {
    pub fn new(renderer: MarkdownRenderer) -> Self {
        Self {
            renderer,
            last: None,
        }
    }

    /// Renders `input`, or returns the previous tree when the input is equal
    /// to the previous call's input.
    pub fn render(&mut self, input: &str) -> Arc<VisualTree> {
        if let Some((previous, tree)) = &self.last {
            if should_skip_render(previous, input) {
                tracing::trace!(bytes = input.len(), "Markdown unchanged, reusing tree");
                return Arc::clone(tree);
            }
        }

        let tree = Arc::new(self.renderer.render(input));
        self.last = Some((input.to_owned(), Arc::clone(&tree)));
        tree
    }

    /// Input of the last render, if any.
    pub fn last_input(&self) -> Option<&str> {
        self.last.as_ref().map(|(input, _)| input.as_str())
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }
}

impl Default for MemoizedMarkdown {
    fn default() -> Self {
        Self::new(MarkdownRenderer::default())
    }
}

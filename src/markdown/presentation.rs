//! Node presentation table.
//!
//! Every [`NodeKind`] maps to exactly one arm of [`Presentation::present`].
//! Adding a node kind without a rule is a compile error.

use crate::components::code_block::CodeBlock;
use crate::visual::{Attributes, Element, Tag, VisualNode};

use super::links::{LinkRoute, safe_url};
use super::syntax::{HeadingLevel, ListKind, NodeKind, SyntaxNode};

/// Styling key of a presented element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Preformatted,
    OrderedList,
    UnorderedList,
    ListItem,
    Strong,
    Link,
    Heading(HeadingLevel),
    BlockQuote,
    Table,
    TableHeaderCell,
    TableBodyCell,
}

impl StyleKey {
    /// Utility classes applied for this key.
    pub fn class(&self) -> &'static str {
        match self {
            StyleKey::Preformatted => {
                "bg-gradient-to-br from-gray-900 via-gray-800 to-gray-700 p-4 rounded-lg shadow-lg my-4 transition-transform duration-300 hover:scale-105 border border-gray-700"
            }
            StyleKey::OrderedList => "list-decimal ml-6 space-y-2",
            StyleKey::UnorderedList => "list-disc ml-6 space-y-2",
            StyleKey::ListItem => "py-1 hover:bg-blue-50 rounded transition-colors duration-200",
            StyleKey::Strong => "font-extrabold text-blue-700",
            StyleKey::Link => {
                "text-gradient bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent hover:underline transition-colors duration-200"
            }
            StyleKey::Heading(HeadingLevel::H1) => {
                "text-4xl font-black mt-10 mb-4 text-transparent bg-clip-text bg-gradient-to-r from-blue-500 via-purple-600 to-pink-500 animate-gradient-x"
            }
            StyleKey::Heading(HeadingLevel::H2) => "text-3xl font-bold mt-8 mb-3 text-purple-500",
            StyleKey::Heading(HeadingLevel::H3) => "text-2xl font-semibold mt-6 mb-2 text-pink-500",
            StyleKey::Heading(HeadingLevel::H4) => "text-xl font-medium mt-4 mb-2 text-blue-500",
            StyleKey::Heading(HeadingLevel::H5) => "text-lg mt-3 mb-1 text-gray-700",
            StyleKey::Heading(HeadingLevel::H6) => "text-base mt-2 mb-1 text-gray-500",
            StyleKey::BlockQuote => "border-l-4 border-blue-400 pl-4 italic bg-blue-50 rounded my-4",
            StyleKey::Table => "min-w-full bg-white rounded-lg shadow overflow-hidden my-4",
            StyleKey::TableHeaderCell => {
                "px-4 py-2 bg-gradient-to-r from-blue-400 to-purple-400 text-white font-bold"
            }
            StyleKey::TableBodyCell => "px-4 py-2 border-t",
        }
    }
}

/// How strong emphasis is presented.
///
/// `Span` keeps the styled generic container, which hides the emphasis from
/// assistive technology. `Strong` keeps the semantic element with the same
/// styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrongElement {
    #[default]
    Span,
    Strong,
}

impl StrongElement {
    fn tag(&self) -> Tag {
        match self {
            StrongElement::Span => Tag::Span,
            StrongElement::Strong => Tag::Strong,
        }
    }
}

/// Presentation table applied to every syntax node.
pub struct Presentation {
    code_block: Box<dyn CodeBlock>,
    strong: StrongElement,
}

impl Presentation {
    pub fn new(code_block: Box<dyn CodeBlock>) -> Self {
        Self {
            code_block,
            strong: StrongElement::default(),
        }
    }

    pub fn set_strong(&mut self, strong: StrongElement) {
        self.strong = strong;
    }

    /// Presents a node and its subtree.
    pub fn present(&self, node: &SyntaxNode) -> VisualNode {
        match &node.kind {
            NodeKind::Document | NodeKind::Unknown => VisualNode::Fragment(self.children(node)),
            NodeKind::Paragraph => self.plain(Tag::Paragraph, node),
            NodeKind::Heading(level) => {
                self.styled(Tag::Heading(*level), StyleKey::Heading(*level), node)
            }
            NodeKind::List(ListKind::Ordered { start }) => Element::new(Tag::OrderedList)
                .styled(StyleKey::OrderedList)
                .with_attrs(Attributes {
                    start: (*start != 1).then_some(*start),
                    ..Attributes::default()
                })
                .with_children(self.children(node))
                .into(),
            NodeKind::List(ListKind::Unordered) => {
                self.styled(Tag::UnorderedList, StyleKey::UnorderedList, node)
            }
            NodeKind::ListItem { checked: None } => {
                self.styled(Tag::ListItem, StyleKey::ListItem, node)
            }
            NodeKind::ListItem {
                checked: Some(checked),
            } => self.task_item(*checked, node),
            NodeKind::Emphasis => self.plain(Tag::Emphasis, node),
            NodeKind::Strong => self.styled(self.strong.tag(), StyleKey::Strong, node),
            NodeKind::Strikethrough => self.plain(Tag::Strikethrough, node),
            NodeKind::Link(link) => LinkRoute::resolve(link.destination.as_deref()).present(
                link.title.clone(),
                self.children(node),
            ),
            NodeKind::Image(image) => Element::new(Tag::Image)
                .with_attrs(Attributes {
                    src: image.source.as_deref().and_then(safe_url).map(String::from),
                    alt: Some(node.text_content()),
                    title: image.title.clone(),
                    ..Attributes::default()
                })
                .into(),
            NodeKind::BlockQuote => self.styled(Tag::BlockQuote, StyleKey::BlockQuote, node),
            NodeKind::Table => self.styled(Tag::Table, StyleKey::Table, node),
            NodeKind::TableHead => self.plain(Tag::TableHead, node),
            NodeKind::TableBody => self.plain(Tag::TableBody, node),
            NodeKind::TableRow => self.plain(Tag::TableRow, node),
            NodeKind::TableCell(cell) => {
                let (tag, style) = if cell.header {
                    (Tag::TableHeaderCell, StyleKey::TableHeaderCell)
                } else {
                    (Tag::TableDataCell, StyleKey::TableBodyCell)
                };
                Element::new(tag)
                    .styled(style)
                    .with_attrs(Attributes {
                        align: cell.align,
                        ..Attributes::default()
                    })
                    .with_children(self.children(node))
                    .into()
            }
            NodeKind::Code(code) => self.code_block.present(code),
            NodeKind::Preformatted => self.styled(Tag::Pre, StyleKey::Preformatted, node),
            NodeKind::ThematicBreak => Element::new(Tag::ThematicBreak).into(),
            NodeKind::LineBreak => Element::new(Tag::LineBreak).into(),
            NodeKind::Text(text) | NodeKind::Html(text) => VisualNode::text(text.clone()),
        }
    }

    fn children(&self, node: &SyntaxNode) -> Vec<VisualNode> {
        node.children.iter().map(|child| self.present(child)).collect()
    }

    fn plain(&self, tag: Tag, node: &SyntaxNode) -> VisualNode {
        Element::new(tag).with_children(self.children(node)).into()
    }

    fn styled(&self, tag: Tag, style: StyleKey, node: &SyntaxNode) -> VisualNode {
        Element::new(tag)
            .styled(style)
            .with_children(self.children(node))
            .into()
    }

    /// Task list item: a disabled checkbox followed by the item content.
    fn task_item(&self, checked: bool, node: &SyntaxNode) -> VisualNode {
        let checkbox = Element::new(Tag::Input).with_attrs(Attributes {
            checked: Some(checked),
            disabled: true,
            ..Attributes::default()
        });

        let mut children = Vec::with_capacity(node.children.len() + 1);
        children.push(checkbox.into());
        children.extend(self.children(node));

        Element::new(Tag::ListItem)
            .styled(StyleKey::ListItem)
            .with_class("task-list-item")
            .with_attrs(Attributes {
                checked: Some(checked),
                ..Attributes::default()
            })
            .with_children(children)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::syntax::{CodeNode, TableCell};
    use crate::visual::Alignment;
    use std::collections::HashSet;

    /// Records code nodes without highlighting.
    struct EchoCodeBlock;

    impl CodeBlock for EchoCodeBlock {
        fn present(&self, code: &CodeNode) -> VisualNode {
            Element::new(Tag::Code)
                .with_children(vec![VisualNode::text(code.text.clone())])
                .into()
        }
    }

    fn presentation() -> Presentation {
        Presentation::new(Box::new(EchoCodeBlock))
    }

    fn text(s: &str) -> SyntaxNode {
        SyntaxNode::leaf(NodeKind::Text(s.to_string()))
    }

    fn element(node: VisualNode) -> Element {
        match node {
            VisualNode::Element(element) => element,
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_classes_are_distinct() {
        // Arrange
        let classes: HashSet<&str> = HeadingLevel::ALL
            .iter()
            .map(|level| StyleKey::Heading(*level).class())
            .collect();

        // Assert
        assert_eq!(classes.len(), 6, "No two heading levels share styling");
    }

    #[test]
    fn test_heading_uses_level_tag_and_style() {
        // Arrange
        let node = SyntaxNode::new(NodeKind::Heading(HeadingLevel::H2), vec![text("Intro")]);

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Heading(HeadingLevel::H2));
        assert_eq!(presented.style, Some(StyleKey::Heading(HeadingLevel::H2)));
        assert_eq!(presented.children, vec![VisualNode::text("Intro")]);
    }

    #[test]
    fn test_strong_defaults_to_span() {
        // Arrange
        let node = SyntaxNode::new(NodeKind::Strong, vec![text("bold")]);

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Span);
        assert_eq!(presented.style, Some(StyleKey::Strong));
    }

    #[test]
    fn test_strong_semantic_element_keeps_style() {
        // Arrange
        let mut presentation = presentation();
        presentation.set_strong(StrongElement::Strong);
        let node = SyntaxNode::new(NodeKind::Strong, vec![text("bold")]);

        // Act
        let presented = element(presentation.present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Strong);
        assert_eq!(presented.style, Some(StyleKey::Strong));
    }

    #[test]
    fn test_ordered_list_forwards_start_except_one() {
        // Arrange
        let from_one = SyntaxNode::leaf(NodeKind::List(ListKind::Ordered { start: 1 }));
        let from_five = SyntaxNode::leaf(NodeKind::List(ListKind::Ordered { start: 5 }));

        // Act
        let one = element(presentation().present(&from_one));
        let five = element(presentation().present(&from_five));

        // Assert
        assert_eq!(one.attrs.start, None);
        assert_eq!(five.attrs.start, Some(5));
        assert_eq!(five.style, Some(StyleKey::OrderedList));
    }

    #[test]
    fn test_task_item_prepends_disabled_checkbox() {
        // Arrange
        let node = SyntaxNode::new(
            NodeKind::ListItem {
                checked: Some(true),
            },
            vec![text("done")],
        );

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::ListItem);
        assert_eq!(presented.attrs.checked, Some(true));
        assert_eq!(presented.class.as_deref(), Some("task-list-item"));
        let checkbox = element(presented.children[0].clone());
        assert_eq!(checkbox.tag, Tag::Input);
        assert_eq!(checkbox.attrs.checked, Some(true));
        assert!(checkbox.attrs.disabled);
        assert_eq!(presented.children[1], VisualNode::text("done"));
    }

    #[test]
    fn test_table_cells_distinguish_header_from_body() {
        // Arrange
        let header = SyntaxNode::new(
            NodeKind::TableCell(TableCell {
                header: true,
                align: Some(Alignment::Center),
            }),
            vec![text("Name")],
        );
        let body = SyntaxNode::new(
            NodeKind::TableCell(TableCell {
                header: false,
                align: None,
            }),
            vec![text("a")],
        );

        // Act
        let th = element(presentation().present(&header));
        let td = element(presentation().present(&body));

        // Assert
        assert_eq!(th.tag, Tag::TableHeaderCell);
        assert_eq!(td.tag, Tag::TableDataCell);
        assert_ne!(th.style, td.style);
        assert_ne!(
            StyleKey::TableHeaderCell.class(),
            StyleKey::TableBodyCell.class()
        );
        assert_eq!(th.attrs.align, Some(Alignment::Center));
    }

    #[test]
    fn test_code_is_delegated_to_collaborator() {
        // Arrange
        let node = SyntaxNode::leaf(NodeKind::Code(CodeNode::inline("x + 1")));

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Code);
        assert_eq!(presented.children, vec![VisualNode::text("x + 1")]);
    }

    #[test]
    fn test_unknown_node_passes_children_through() {
        // Arrange
        let node = SyntaxNode::new(NodeKind::Unknown, vec![text("kept")]);

        // Act
        let presented = presentation().present(&node);

        // Assert
        assert_eq!(
            presented,
            VisualNode::Fragment(vec![VisualNode::text("kept")])
        );
    }

    #[test]
    fn test_image_unsafe_source_dropped() {
        // Arrange
        let node = SyntaxNode::new(
            NodeKind::Image(crate::markdown::syntax::ImageNode {
                source: Some("javascript:alert(1)".to_string()),
                title: None,
            }),
            vec![text("i")],
        );

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Image);
        assert_eq!(presented.attrs.src, None);
        assert_eq!(presented.attrs.alt.as_deref(), Some("i"));
    }

    #[test]
    fn test_image_alt_from_children() {
        // Arrange
        let node = SyntaxNode::new(
            NodeKind::Image(crate::markdown::syntax::ImageNode {
                source: Some("logo.png".to_string()),
                title: None,
            }),
            vec![text("Logo")],
        );

        // Act
        let presented = element(presentation().present(&node));

        // Assert
        assert_eq!(presented.tag, Tag::Image);
        assert_eq!(presented.attrs.src.as_deref(), Some("logo.png"));
        assert_eq!(presented.attrs.alt.as_deref(), Some("Logo"));
        assert!(presented.children.is_empty());
    }
}

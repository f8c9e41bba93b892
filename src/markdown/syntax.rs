//! Typed syntax tree converted from comrak's arena AST.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{Arena, Options};

use crate::visual::Alignment;

/// Node of the parsed markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        Self { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Concatenated literal text below this node.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(t) | NodeKind::Html(t) => out.push_str(t),
            NodeKind::Code(code) => out.push_str(&code.text),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Node type tag with its node-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading(HeadingLevel),
    List(ListKind),
    ListItem { checked: Option<bool> },
    Emphasis,
    Strong,
    Strikethrough,
    Link(LinkNode),
    Image(ImageNode),
    BlockQuote,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell(TableCell),
    Code(CodeNode),
    Preformatted,
    ThematicBreak,
    LineBreak,
    Text(String),
    /// Raw HTML source, shown as text.
    Html(String),
    /// Parser node without a presentation rule of its own.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Maps a parser level to a heading level, clamping into 1..=6.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered { start: usize },
    Unordered,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkNode {
    pub destination: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageNode {
    pub source: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCell {
    pub header: bool,
    pub align: Option<Alignment>,
}

/// Code handed to the code-block collaborator.
///
/// Inline spans and fenced blocks share this shape; `language` is the first
/// word of a fence info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeNode {
    pub language: Option<String>,
    pub text: String,
    pub inline: bool,
}

impl CodeNode {
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            language: None,
            text: text.into(),
            inline: true,
        }
    }

    pub fn block(language: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            language: language.map(String::from),
            text: text.into(),
            inline: false,
        }
    }
}

/// Deepest nesting converted node by node.
///
/// Subtrees below this depth collapse into a single text node, which keeps
/// every recursive pass over the tree within a bounded stack.
pub const MAX_NESTING: usize = 128;

/// Parses markdown with the given comrak options into a syntax tree.
///
/// Never fails: comrak recovers from malformed input on its own.
pub fn parse(input: &str, options: &Options) -> SyntaxNode {
    let arena = Arena::new();
    let root = comrak::parse_document(&arena, input, options);
    convert(root, &Context::default(), 0)
}

/// Table state inherited by descendants during conversion.
#[derive(Default)]
struct Context {
    alignments: Vec<Option<Alignment>>,
    header_row: bool,
}

fn convert<'a>(node: &'a AstNode<'a>, ctx: &Context, depth: usize) -> SyntaxNode {
    if depth >= MAX_NESTING {
        tracing::debug!(depth, "Flattening deeply nested markdown");
        return SyntaxNode::leaf(NodeKind::Text(flatten_text(node)));
    }

    let value = node.data.borrow().value.clone();

    match value {
        NodeValue::Table(table) => {
            let inner = Context {
                alignments: table.alignments.iter().map(alignment).collect(),
                header_row: false,
            };
            convert_table(node, &inner, depth)
        }
        NodeValue::TableRow(header) => {
            let inner = Context {
                alignments: ctx.alignments.clone(),
                header_row: header,
            };
            let cells = node
                .children()
                .enumerate()
                .map(|(column, cell)| convert_cell(cell, column, &inner, depth + 1))
                .collect();
            SyntaxNode::new(NodeKind::TableRow, cells)
        }
        NodeValue::CodeBlock(block) => {
            let language = block.info.split_whitespace().next();
            let code = SyntaxNode::leaf(NodeKind::Code(CodeNode::block(language, block.literal)));
            SyntaxNode::new(NodeKind::Preformatted, vec![code])
        }
        other => {
            let kind = node_kind(other);
            let children = node
                .children()
                .map(|child| convert(child, ctx, depth + 1))
                .collect();
            SyntaxNode::new(kind, children)
        }
    }
}

/// Groups rows into a head holding the header row and a body holding the rest.
fn convert_table<'a>(node: &'a AstNode<'a>, ctx: &Context, depth: usize) -> SyntaxNode {
    let mut head = Vec::new();
    let mut body = Vec::new();

    for row in node.children() {
        let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let converted = convert(row, ctx, depth + 2);
        if is_header {
            head.push(converted);
        } else {
            body.push(converted);
        }
    }

    let mut sections = Vec::with_capacity(2);
    if !head.is_empty() {
        sections.push(SyntaxNode::new(NodeKind::TableHead, head));
    }
    if !body.is_empty() {
        sections.push(SyntaxNode::new(NodeKind::TableBody, body));
    }
    SyntaxNode::new(NodeKind::Table, sections)
}

fn convert_cell<'a>(
    node: &'a AstNode<'a>,
    column: usize,
    ctx: &Context,
    depth: usize,
) -> SyntaxNode {
    let cell = TableCell {
        header: ctx.header_row,
        align: ctx.alignments.get(column).copied().flatten(),
    };
    let children = node
        .children()
        .map(|child| convert(child, ctx, depth + 1))
        .collect();
    SyntaxNode::new(NodeKind::TableCell(cell), children)
}

/// Literal text of a subtree, collected without recursion.
fn flatten_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::CodeBlock(block) => text.push_str(&block.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push('\n'),
            _ => {}
        }
    }
    text
}

fn node_kind(value: NodeValue) -> NodeKind {
    match value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Heading(HeadingLevel::from_level(heading.level)),
        NodeValue::List(list) => NodeKind::List(match list.list_type {
            ListType::Ordered => ListKind::Ordered { start: list.start },
            ListType::Bullet => ListKind::Unordered,
        }),
        NodeValue::Item(_) => NodeKind::ListItem { checked: None },
        NodeValue::TaskItem(symbol) => NodeKind::ListItem {
            checked: Some(symbol.is_some()),
        },
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Strikethrough,
        NodeValue::Link(link) => NodeKind::Link(LinkNode {
            destination: non_empty(link.url),
            title: non_empty(link.title),
        }),
        NodeValue::Image(link) => NodeKind::Image(ImageNode {
            source: non_empty(link.url),
            title: non_empty(link.title),
        }),
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::Code(code) => NodeKind::Code(CodeNode::inline(code.literal)),
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::LineBreak => NodeKind::LineBreak,
        NodeValue::SoftBreak => NodeKind::Text("\n".to_string()),
        NodeValue::Text(text) => NodeKind::Text(text),
        NodeValue::HtmlInline(html) => NodeKind::Html(html),
        NodeValue::HtmlBlock(block) => NodeKind::Html(block.literal),
        _ => NodeKind::Unknown,
    }
}

fn alignment(align: &TableAlignment) -> Option<Alignment> {
    match align {
        TableAlignment::None => None,
        TableAlignment::Left => Some(Alignment::Left),
        TableAlignment::Center => Some(Alignment::Center),
        TableAlignment::Right => Some(Alignment::Right),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

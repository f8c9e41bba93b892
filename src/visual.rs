//! Visual tree produced by the presentation table.
//!
//! The tree is plain owned data so callers can inspect it, compare two
//! renders structurally, or serialize it to HTML through [`maud::Render`].

use maud::{Markup, Render};

use crate::components::link::app_link;
use crate::markdown::{HeadingLevel, StyleKey};

/// Rendered document returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualTree {
    pub children: Vec<VisualNode>,
}

impl VisualTree {
    /// Serializes the tree to an HTML string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    /// Visits every node in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a VisualNode)) {
        for child in &self.children {
            child.walk(visit);
        }
    }
}

impl Render for VisualTree {
    fn render_to(&self, buffer: &mut String) {
        for child in &self.children {
            child.render_to(buffer);
        }
    }
}

/// Single node of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualNode {
    Element(Element),
    /// In-app navigation element for application routes.
    AppLink(AppLink),
    Text(String),
    /// Trusted, already escaped HTML produced by a collaborator.
    Markup(String),
    Fragment(Vec<VisualNode>),
}

impl VisualNode {
    pub fn text(text: impl Into<String>) -> Self {
        VisualNode::Text(text.into())
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Element(element) => &element.children,
            VisualNode::AppLink(link) => &link.children,
            VisualNode::Fragment(children) => children,
            VisualNode::Text(_) | VisualNode::Markup(_) => &[],
        }
    }

    /// Visits this node and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a VisualNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Concatenated text of all descendant text nodes.
    ///
    /// Collaborator markup is skipped since it is already HTML.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.walk(&mut |node| {
            if let VisualNode::Text(t) = node {
                text.push_str(t);
            }
        });
        text
    }
}

impl Render for VisualNode {
    fn render_to(&self, buffer: &mut String) {
        match self {
            VisualNode::Element(element) => element.render_to(buffer),
            VisualNode::AppLink(link) => app_link(link).render_to(buffer),
            VisualNode::Text(text) => text.render_to(buffer),
            VisualNode::Markup(html) => buffer.push_str(html),
            VisualNode::Fragment(children) => {
                for child in children {
                    child.render_to(buffer);
                }
            }
        }
    }
}

/// HTML element with its styling key and forwarded attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub style: Option<StyleKey>,
    /// Extra classes appended after the style key classes.
    pub class: Option<String>,
    pub attrs: Attributes,
    pub children: Vec<VisualNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            style: None,
            class: None,
            attrs: Attributes::default(),
            children: Vec::new(),
        }
    }

    pub fn styled(mut self, style: StyleKey) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_children(mut self, children: Vec<VisualNode>) -> Self {
        self.children = children;
        self
    }

    /// Full class attribute value, if any class applies.
    pub fn class_attr(&self) -> Option<String> {
        match (self.style.map(|s| s.class()), self.class.as_deref()) {
            (Some(style), Some(extra)) => Some(format!("{} {}", style, extra)),
            (Some(style), None) => Some(style.to_string()),
            (None, Some(extra)) => Some(extra.to_string()),
            (None, None) => None,
        }
    }
}

impl From<Element> for VisualNode {
    fn from(element: Element) -> Self {
        VisualNode::Element(element)
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        let name = self.tag.name();

        buffer.push('<');
        buffer.push_str(name);
        if let Some(class) = self.class_attr() {
            write_attr(buffer, "class", &class);
        }
        self.attrs.write_to(self.tag, buffer);
        buffer.push('>');

        if self.tag.is_void() {
            return;
        }

        for child in &self.children {
            child.render_to(buffer);
        }

        buffer.push_str("</");
        buffer.push_str(name);
        buffer.push('>');
    }
}

/// In-app navigation element.
///
/// Carries no browsing context or referrer policy: navigation stays inside
/// the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLink {
    pub href: String,
    pub title: Option<String>,
    pub style: StyleKey,
    pub children: Vec<VisualNode>,
}

/// Element names the presentation table emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    Heading(HeadingLevel),
    OrderedList,
    UnorderedList,
    ListItem,
    Input,
    Emphasis,
    Strong,
    Span,
    Strikethrough,
    Anchor,
    Image,
    BlockQuote,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeaderCell,
    TableDataCell,
    Code,
    Pre,
    ThematicBreak,
    LineBreak,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Paragraph => "p",
            Tag::Heading(level) => level.tag_name(),
            Tag::OrderedList => "ol",
            Tag::UnorderedList => "ul",
            Tag::ListItem => "li",
            Tag::Input => "input",
            Tag::Emphasis => "em",
            Tag::Strong => "strong",
            Tag::Span => "span",
            Tag::Strikethrough => "del",
            Tag::Anchor => "a",
            Tag::Image => "img",
            Tag::BlockQuote => "blockquote",
            Tag::Table => "table",
            Tag::TableHead => "thead",
            Tag::TableBody => "tbody",
            Tag::TableRow => "tr",
            Tag::TableHeaderCell => "th",
            Tag::TableDataCell => "td",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::ThematicBreak => "hr",
            Tag::LineBreak => "br",
        }
    }

    /// Void elements have no closing tag and no children.
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            Tag::Input | Tag::Image | Tag::ThematicBreak | Tag::LineBreak
        )
    }
}

/// Browsing context for anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// New browsing context.
    Blank,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
        }
    }
}

/// Link relationship for anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRel {
    /// Strip the referrer header on navigation.
    NoReferrer,
}

impl LinkRel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRel::NoReferrer => "noreferrer",
        }
    }
}

/// Table cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Attributes forwarded from syntax nodes to visual elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub href: Option<String>,
    pub title: Option<String>,
    pub target: Option<LinkTarget>,
    pub rel: Option<LinkRel>,
    /// Ordered list start index.
    pub start: Option<usize>,
    /// Task list state, on both the item and its checkbox.
    pub checked: Option<bool>,
    pub disabled: bool,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub align: Option<Alignment>,
}

impl Attributes {
    fn write_to(&self, tag: Tag, buffer: &mut String) {
        if let Some(href) = &self.href {
            write_attr(buffer, "href", href);
        }
        if let Some(target) = self.target {
            write_attr(buffer, "target", target.as_str());
        }
        if let Some(rel) = self.rel {
            write_attr(buffer, "rel", rel.as_str());
        }
        if let Some(src) = &self.src {
            write_attr(buffer, "src", src);
        }
        if let Some(alt) = &self.alt {
            write_attr(buffer, "alt", alt);
        }
        if let Some(title) = &self.title {
            write_attr(buffer, "title", title);
        }
        if let Some(start) = self.start {
            write_attr(buffer, "start", &start.to_string());
        }
        if let Some(align) = self.align {
            write_attr(buffer, "style", &format!("text-align: {}", align.as_str()));
        }
        if tag == Tag::Input {
            buffer.push_str(" type=\"checkbox\"");
            if self.checked == Some(true) {
                buffer.push_str(" checked");
            }
        } else if let Some(checked) = self.checked {
            write_attr(buffer, "data-checked", if checked { "true" } else { "false" });
        }
        if self.disabled {
            buffer.push_str(" disabled");
        }
    }
}

fn write_attr(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    value.render_to(buffer);
    buffer.push('"');
}

/// Wraps trusted HTML produced outside the presentation table.
pub fn markup(html: Markup) -> VisualNode {
    VisualNode::Markup(html.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_renders_style_and_extra_class() {
        // Arrange
        let element = Element::new(Tag::ListItem)
            .styled(StyleKey::ListItem)
            .with_class("task-list-item")
            .with_children(vec![VisualNode::text("done")]);

        // Act
        let html = element.render().into_string();

        // Assert
        assert_eq!(
            html,
            format!(
                "<li class=\"{} task-list-item\">done</li>",
                StyleKey::ListItem.class()
            )
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        // Arrange
        let element = Element::new(Tag::LineBreak);

        // Act
        let html = element.render().into_string();

        // Assert
        assert_eq!(html, "<br>");
    }

    #[test]
    fn test_text_is_escaped() {
        // Arrange
        let node = VisualNode::text("<script>alert('x')</script> & more");

        // Act
        let html = node.render().into_string();

        // Assert
        assert!(html.contains("&lt;script&gt;"), "Should escape tags: {}", html);
        assert!(html.contains("&amp;"), "Should escape ampersand: {}", html);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        // Arrange
        let element = Element::new(Tag::Anchor).with_attrs(Attributes {
            href: Some("https://example.com/?a=\"b\"&c".to_string()),
            ..Attributes::default()
        });

        // Act
        let html = element.render().into_string();

        // Assert
        assert!(
            html.contains("href=\"https://example.com/?a=&quot;b&quot;&amp;c\""),
            "Should escape attribute value: {}",
            html
        );
    }

    #[test]
    fn test_checkbox_input_attributes() {
        // Arrange
        let element = Element::new(Tag::Input).with_attrs(Attributes {
            checked: Some(true),
            disabled: true,
            ..Attributes::default()
        });

        // Act
        let html = element.render().into_string();

        // Assert
        assert_eq!(html, "<input type=\"checkbox\" checked disabled>");
    }

    #[test]
    fn test_markup_passes_through_unescaped() {
        // Arrange
        let node = markup(maud::PreEscaped("<span class=\"hljs-keyword\">fn</span>".to_string()));

        // Act
        let html = node.render().into_string();

        // Assert
        assert_eq!(html, "<span class=\"hljs-keyword\">fn</span>");
    }

    #[test]
    fn test_text_content_flattens_descendants() {
        // Arrange
        let node: VisualNode = Element::new(Tag::Paragraph)
            .with_children(vec![
                VisualNode::text("Hello "),
                Element::new(Tag::Emphasis)
                    .with_children(vec![VisualNode::text("world")])
                    .into(),
            ])
            .into();

        // Act
        let text = node.text_content();

        // Assert
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_class_attr_absent_without_style() {
        // Arrange
        let element = Element::new(Tag::Paragraph);

        // Act & Assert
        assert_eq!(element.class_attr(), None);
    }
}

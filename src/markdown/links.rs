//! Link routing between in-app navigation and external anchors.

use crate::visual::{AppLink, Attributes, Element, LinkRel, LinkTarget, Tag, VisualNode};

use super::presentation::StyleKey;

/// URL schemes allowed in `href` and `src` attributes.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Returns the destination when it is safe to emit as a URL.
///
/// Scheme-less destinations (paths, relative references, fragments) pass.
/// A scheme outside [`SAFE_SCHEMES`] such as `javascript:` or `data:` is
/// dropped.
pub fn safe_url(destination: &str) -> Option<&str> {
    let scheme_end = destination.find([':', '/', '?', '#']);
    match scheme_end {
        Some(end) if destination[end..].starts_with(':') => {
            let scheme = &destination[..end];
            if SAFE_SCHEMES
                .iter()
                .any(|safe| scheme.eq_ignore_ascii_case(safe))
            {
                Some(destination)
            } else {
                tracing::debug!(scheme, "Dropping destination with unsafe scheme");
                None
            }
        }
        _ => Some(destination),
    }
}

/// Navigation decision for a link destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRoute<'a> {
    /// Application path rooted at `/`, navigated client side.
    InApp(&'a str),
    /// Anything else, including a missing destination.
    External(Option<&'a str>),
}

impl<'a> LinkRoute<'a> {
    /// Routes a link destination.
    ///
    /// Paths rooted at `/` stay inside the application. Every other
    /// destination (other hosts, `mailto:` and `tel:` schemes, fragment and
    /// relative links, or no destination at all) leaves it. Destinations
    /// rejected by [`safe_url`] route externally without a destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use markview::LinkRoute;
    ///
    /// assert_eq!(LinkRoute::resolve(Some("/docs")), LinkRoute::InApp("/docs"));
    /// assert_eq!(
    ///     LinkRoute::resolve(Some("https://example.com")),
    ///     LinkRoute::External(Some("https://example.com"))
    /// );
    /// assert_eq!(LinkRoute::resolve(None), LinkRoute::External(None));
    /// assert_eq!(
    ///     LinkRoute::resolve(Some("javascript:alert(1)")),
    ///     LinkRoute::External(None)
    /// );
    /// ```
    pub fn resolve(destination: Option<&'a str>) -> Self {
        match destination.and_then(safe_url) {
            Some(path) if path.starts_with('/') => LinkRoute::InApp(path),
            other => LinkRoute::External(other),
        }
    }

    pub fn is_in_app(&self) -> bool {
        matches!(self, LinkRoute::InApp(_))
    }

    /// Builds the visual node for this route around already presented children.
    ///
    /// External anchors open in a new browsing context and strip the
    /// referrer; in-app links set neither.
    pub fn present(&self, title: Option<String>, children: Vec<VisualNode>) -> VisualNode {
        match self {
            LinkRoute::InApp(path) => VisualNode::AppLink(AppLink {
                href: (*path).to_string(),
                title,
                style: StyleKey::Link,
                children,
            }),
            LinkRoute::External(destination) => Element::new(Tag::Anchor)
                .styled(StyleKey::Link)
                .with_attrs(Attributes {
                    href: destination.map(String::from),
                    title,
                    target: Some(LinkTarget::Blank),
                    rel: Some(LinkRel::NoReferrer),
                    ..Attributes::default()
                })
                .with_children(children)
                .into(),
        }
    }
}

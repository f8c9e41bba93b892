//! In-app navigation link component

use maud::{Markup, html};

use crate::visual::AppLink;

/// Renders an in-app navigation link
///
/// Produces a same-context anchor marked with `data-app-link` so a client
/// router can take over the transition without a full page reload. No
/// `target` or `rel` is set.
///
/// # Arguments
///
/// * `link`: In-app link with route path, optional title, and children
///
/// # Returns
///
/// Anchor markup with the link styling classes
pub fn app_link(link: &AppLink) -> Markup {
    html! {
        a href=(link.href) class=(link.style.class()) title=[link.title.as_deref()] data-app-link {
            @for child in &link.children {
                (child)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::StyleKey;
    use crate::visual::VisualNode;

    #[test]
    fn test_app_link_markup() {
        // Arrange
        let link = AppLink {
            href: "/chat".to_string(),
            title: None,
            style: StyleKey::Link,
            children: vec![VisualNode::text("Chat")],
        };

        // Act
        let html = app_link(&link).into_string();

        // Assert
        assert_eq!(
            html,
            format!(
                "<a href=\"/chat\" class=\"{}\" data-app-link>Chat</a>",
                StyleKey::Link.class()
            )
        );
    }

    #[test]
    fn test_app_link_title_and_no_target() {
        // Arrange
        let link = AppLink {
            href: "/".to_string(),
            title: Some("Go home".to_string()),
            style: StyleKey::Link,
            children: vec![VisualNode::text("Home")],
        };

        // Act
        let html = app_link(&link).into_string();

        // Assert
        assert!(html.contains("title=\"Go home\""), "Should forward title: {}", html);
        assert!(!html.contains("target="), "In-app links keep the context");
        assert!(!html.contains("rel="), "In-app links keep the referrer");
    }
}

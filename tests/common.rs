//! Shared test utilities for integration tests.
//!
//! Provides helpers for walking rendered visual trees and collecting the
//! nodes a test asserts on.

#![allow(dead_code)]

use markview::{AppLink, Element, Tag, VisualNode, VisualTree};

/// Collects every element with the given tag, in document order.
pub fn elements_with_tag(tree: &VisualTree, tag: Tag) -> Vec<&Element> {
    let mut found = Vec::new();
    tree.walk(&mut |node| {
        if let VisualNode::Element(element) = node {
            if element.tag == tag {
                found.push(element);
            }
        }
    });
    found
}

/// Collects every in-app navigation link, in document order.
pub fn app_links(tree: &VisualTree) -> Vec<&AppLink> {
    let mut found = Vec::new();
    tree.walk(&mut |node| {
        if let VisualNode::AppLink(link) = node {
            found.push(link);
        }
    });
    found
}

/// Concatenated text of an element's descendants.
pub fn element_text(element: &Element) -> String {
    element.children.iter().map(VisualNode::text_content).collect()
}

/// Concatenated text of an in-app link's descendants.
pub fn link_text(link: &AppLink) -> String {
    link.children.iter().map(VisualNode::text_content).collect()
}

//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Utility-class runtime resolving the style key classes in the browser.
const UTILITY_CSS_RUNTIME: &str = "https://cdn.tailwindcss.com";

/// Wraps rendered markdown with standard HTML structure
///
/// Used for standalone output. The wrapper handles viewport configuration,
/// charset, the utility-class runtime, and inlines the bundled stylesheet,
/// while the caller provides the rendered document.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheet`: CSS inlined into the page head
/// * `body`: Rendered markdown markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(UTILITY_CSS_RUNTIME) {}
                style { (PreEscaped(stylesheet)) }
            }
            body {
                main class="markdown-body max-w-3xl mx-auto px-6 py-10" {
                    (body)
                }
            }
        }
    }
}

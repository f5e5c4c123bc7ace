// src/core/html.rs
//
// Small navigation helpers over `scraper` trees. The GREC pages are old
// table layouts with bold labels followed by bare text nodes, so most of
// the work is "what text sits next to this node".

use scraper::{ElementRef, Node};
use scraper::node::Text;

use super::sanitize::normalize_ws;

/// All text below `el`, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of `el`'s first child: the text node itself, or the visible text of
/// a child element. `None` for an empty element.
pub fn first_text(el: ElementRef<'_>) -> Option<String> {
    let child = el.first_child()?;
    match child.value() {
        Node::Text(t) => Some(text_node(t)),
        Node::Element(_) => ElementRef::wrap(child).map(text_of),
        _ => None,
    }
}

/// Text content that immediately follows `el` in its parent.
pub fn following_text(el: ElementRef<'_>) -> Option<String> {
    let next = el.next_sibling()?;
    match next.value() {
        Node::Text(t) => Some(text_node(t)),
        Node::Element(_) => ElementRef::wrap(next).map(text_of),
        _ => None,
    }
}

/// Nearest enclosing element named `tag` (lowercase).
pub fn ancestor<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Parent element of `el`, if it is an element.
pub fn parent_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Listing anchors wrap their target in `javascript:open('<url>')`.
/// Take the first quoted part; plain hrefs pass through.
pub fn clean_href(href: &str) -> &str {
    let mut parts = href.split('\'');
    match (parts.next(), parts.next()) {
        (Some(_), Some(inner)) => inner,
        _ => href.trim(),
    }
}

fn text_node(t: &Text) -> String {
    normalize_ws(t)
}

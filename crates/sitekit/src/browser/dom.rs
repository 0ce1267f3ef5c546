//! Small DOM lookup and mutation helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

fn collect(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector`, in document order.
///
/// An invalid selector yields no elements.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect(&list),
        Err(_) => {
            log::warn!("invalid selector '{selector}'");
            Vec::new()
        }
    }
}

/// Descendants of `root` matching `selector`.
pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect(&list),
        Err(_) => {
            log::warn!("invalid selector '{selector}'");
            Vec::new()
        }
    }
}

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            log::warn!("invalid selector '{selector}'");
            None
        }
    }
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Show as a block or hide with `display: none`.
pub(crate) fn set_display(element: &Element, visible: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let value = if visible { "block" } else { "none" };
        let _ = html.style().set_property("display", value);
    }
}

pub(crate) fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

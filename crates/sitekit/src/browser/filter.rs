//! Tag filter for the work grid.

use super::dom;
use super::events::Listener;
use sitekit_core::{FilterConfig, WorkFilter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

/// Wired filter buttons.
pub struct FilterBar {
    _listeners: Vec<Listener>,
}

struct FilterView {
    filter: RefCell<WorkFilter>,
    buttons: Vec<Element>,
    items: Vec<Element>,
    config: FilterConfig,
}

impl FilterView {
    fn select(&self, button: &Element) {
        for other in &self.buttons {
            dom::set_class(other, &self.config.active_class, false);
        }
        dom::set_class(button, &self.config.active_class, true);

        let tag = button
            .get_attribute(&self.config.filter_attribute)
            .unwrap_or_default();
        let mut filter = self.filter.borrow_mut();
        filter.select(&tag);
        for item in &self.items {
            let tags = item
                .get_attribute(&self.config.tags_attribute)
                .unwrap_or_default();
            dom::set_display(item, filter.shows(&tags));
        }
    }
}

impl FilterBar {
    /// Wire every filter button. Returns `None` when there are none.
    pub fn mount(document: &Document, config: &FilterConfig) -> Option<Self> {
        let buttons = dom::query_all(document, &config.buttons);
        if buttons.is_empty() {
            return None;
        }
        let view = Rc::new(FilterView {
            filter: RefCell::new(WorkFilter::new()),
            items: dom::query_all(document, &config.items),
            buttons,
            config: config.clone(),
        });

        let listeners = view
            .buttons
            .iter()
            .filter_map(|button| {
                let view = view.clone();
                let target = button.clone();
                Listener::click(button, move |_| view.select(&target))
            })
            .collect();
        Some(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const GRID: &str = r#"
        <button class="filter is-active" data-filter="all">All</button>
        <button class="filter" data-filter="web" id="web">Web</button>
        <button class="filter" data-filter="brand" id="brand">Brand</button>
        <article class="work" id="a" data-tags="web brand"></article>
        <article class="work" id="b" data-tags="webapp"></article>
        <article class="work" id="c"></article>
    "#;

    fn display(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("display")
            .unwrap()
    }

    fn press(document: &Document, id: &str) {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    #[wasm_bindgen_test]
    fn test_filter_by_exact_tag() {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(GRID);
        let _bar = FilterBar::mount(&document, &FilterConfig::default()).unwrap();

        press(&document, "web");
        assert_eq!(display(&document, "a"), "block");
        assert_eq!(display(&document, "b"), "none");
        assert_eq!(display(&document, "c"), "none");

        let web = document.get_element_by_id("web").unwrap();
        let all = document.query_selector("[data-filter=all]").unwrap().unwrap();
        assert!(web.class_list().contains("is-active"));
        assert!(!all.class_list().contains("is-active"));
    }

    #[wasm_bindgen_test]
    fn test_all_shows_everything() {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(GRID);
        let _bar = FilterBar::mount(&document, &FilterConfig::default()).unwrap();

        press(&document, "brand");
        document
            .query_selector("[data-filter=all]")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
        for id in ["a", "b", "c"] {
            assert_eq!(display(&document, id), "block");
        }
    }
}

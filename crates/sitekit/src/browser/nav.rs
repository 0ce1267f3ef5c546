//! Mobile navigation toggle.

use super::dom;
use super::events::Listener;
use sitekit_core::{NavConfig, NavState};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Document, Element};

/// Wired navigation panel and its toggle control.
pub struct NavToggle {
    _listeners: Vec<Listener>,
}

impl NavToggle {
    /// Wire the toggle control and panel links.
    ///
    /// Returns `None` when the page has no navigation panel. Without a toggle
    /// control, links still close the panel.
    pub fn mount(document: &Document, config: &NavConfig) -> Option<Self> {
        let panel = dom::query(document, &config.panel)?;
        let toggle = dom::query(document, &config.toggle);
        let view = Rc::new(NavView {
            state: Cell::new(NavState::new(dom::has_class(&panel, &config.open_class))),
            panel: panel.clone(),
            toggle: toggle.clone(),
            open_class: config.open_class.clone(),
        });

        let mut listeners = Vec::new();
        if let Some(toggle) = &toggle {
            let view = view.clone();
            listeners.extend(Listener::click(toggle, move |_| {
                view.update(|nav| {
                    nav.toggle();
                });
            }));
        }
        for link in dom::query_all_within(&panel, &config.links) {
            let view = view.clone();
            listeners.extend(Listener::click(&link, move |_| view.update(NavState::close)));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}

struct NavView {
    state: Cell<NavState>,
    panel: Element,
    toggle: Option<Element>,
    open_class: String,
}

impl NavView {
    fn update(&self, f: impl FnOnce(&mut NavState)) {
        let mut nav = self.state.get();
        f(&mut nav);
        self.state.set(nav);
        dom::set_class(&self.panel, &self.open_class, nav.is_open());
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-expanded", nav.aria_expanded());
        }
    }
}

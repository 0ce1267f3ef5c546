//! Modal dialogs opened by trigger buttons.

use super::dom;
use super::events::{self, Listener};
use sitekit_core::{is_backdrop_click, modal_target_id, ModalConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDialogElement};

/// Wired modal triggers, close controls, and backdrops.
pub struct Modals {
    _listeners: Vec<Listener>,
}

impl Modals {
    /// Wire every trigger, close control, and dialog.
    ///
    /// Returns `None` when the page has none of them.
    pub fn mount(document: &Document, config: &ModalConfig) -> Option<Self> {
        let mut listeners = Vec::new();

        for trigger in dom::query_all(document, &config.triggers) {
            let document = document.clone();
            let attribute = config.trigger_attribute.clone();
            let source = trigger.clone();
            listeners.extend(Listener::click(&trigger, move |_| {
                open_target(&document, &source, &attribute);
            }));
        }

        for closer in dom::query_all(document, &config.closers) {
            let source = closer.clone();
            listeners.extend(Listener::click(&closer, move |_| close_enclosing(&source)));
        }

        for dialog in dom::query_all(document, &config.dialogs)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlDialogElement>().ok())
        {
            let target = dialog.clone();
            listeners.extend(Listener::click(&dialog, move |event| {
                let Some(point) = events::client_point(&event) else {
                    return;
                };
                if is_backdrop_click(&events::client_rect(&target), &point) {
                    target.close();
                }
            }));
        }

        if listeners.is_empty() {
            None
        } else {
            Some(Self {
                _listeners: listeners,
            })
        }
    }
}

fn open_target(document: &Document, trigger: &Element, attribute: &str) {
    let raw = trigger.get_attribute(attribute);
    let Some(id) = modal_target_id(raw.as_deref()) else {
        return;
    };
    let Some(dialog) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlDialogElement>().ok())
    else {
        log::debug!("modal: no dialog with id '{id}'");
        return;
    };
    if let Err(err) = dialog.show_modal() {
        log::warn!("modal: could not open '{id}': {err:?}");
    }
}

fn close_enclosing(control: &Element) {
    let dialog = control
        .closest("dialog")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlDialogElement>().ok());
    if let Some(dialog) = dialog {
        dialog.close();
    }
}

//! Testimonial slider.

use super::dom;
use super::events::Listener;
use sitekit_core::{QuoteSlider, SliderConfig};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Document, Element};

/// Wired quote slider controls.
pub struct Testimonials {
    _listeners: Vec<Listener>,
}

struct SliderView {
    slider: Cell<QuoteSlider>,
    quotes: Vec<Element>,
    active_class: String,
}

impl SliderView {
    fn show(&self) {
        let slider = self.slider.get();
        for (i, quote) in self.quotes.iter().enumerate() {
            dom::set_class(quote, &self.active_class, slider.is_active(i));
        }
    }

    fn step(&self, f: impl FnOnce(&mut QuoteSlider) -> Option<usize>) {
        let mut slider = self.slider.get();
        if f(&mut slider).is_some() {
            self.slider.set(slider);
            self.show();
        }
    }
}

impl Testimonials {
    /// Wire the previous/next controls.
    ///
    /// Always starts at the first quote and marks only that one, whatever
    /// the markup says. Returns `None` when there are no quotes.
    pub fn mount(document: &Document, config: &SliderConfig) -> Option<Self> {
        let quotes = dom::query_all(document, &config.quotes);
        if quotes.is_empty() {
            return None;
        }
        let view = Rc::new(SliderView {
            slider: Cell::new(QuoteSlider::new(quotes.len())),
            quotes,
            active_class: config.active_class.clone(),
        });
        view.show();

        let mut listeners = Vec::new();
        if let Some(prev) = document.get_element_by_id(&config.prev_id) {
            let view = view.clone();
            listeners.extend(Listener::click(&prev, move |_| view.step(QuoteSlider::prev)));
        }
        if let Some(next) = document.get_element_by_id(&config.next_id) {
            let view = view.clone();
            listeners.extend(Listener::click(&next, move |_| view.step(QuoteSlider::next)));
        }
        Some(Self {
            _listeners: listeners,
        })
    }
}

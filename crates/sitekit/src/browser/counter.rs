//! Animated statistic counters.

use super::dom;
use sitekit_core::{CounterAnimation, CounterConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start a count-up animation on every counter element.
///
/// The first frame is written immediately; the rest run on animation frames.
/// Returns the number of counters found.
pub fn start_counters(window: &Window, document: &Document, config: &CounterConfig) -> usize {
    let elements = dom::query_all(document, &config.selector);
    for element in &elements {
        let raw = element.get_attribute(&config.attribute);
        let target = CounterAnimation::parse_target(raw.as_deref());
        animate(window, element.clone(), CounterAnimation::with_steps(target, config.steps));
    }
    elements.len()
}

/// Write the next frame; true while more frames follow.
fn render(element: &Element, animation: &mut CounterAnimation) -> bool {
    let frame = animation.advance();
    dom::set_text(element, &frame.value().to_string());
    !frame.is_finished()
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
    if window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("counter: requestAnimationFrame failed");
    }
}

fn animate(window: &Window, element: Element, mut animation: CounterAnimation) {
    if !render(&element, &mut animation) {
        return;
    }

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move || {
        if render(&element, &mut animation) {
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(&win, callback);
            }
        } else {
            // Drops this closure and breaks the Rc cycle.
            let _ = next.borrow_mut().take();
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(window, callback);
    }
}

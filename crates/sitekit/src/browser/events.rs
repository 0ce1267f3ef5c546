//! Owned event listeners and timers.
//!
//! Each handle keeps its `Closure` alive and unregisters it when dropped, so
//! dropping a [`Site`](super::Site) detaches every behaviour it wired.

use sitekit_core::{Point, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent, Window};

/// An event listener registered on a DOM target.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event_type` on `target`.
    ///
    /// Returns `None` if the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Register a click handler on an element.
    pub fn click<F>(element: &Element, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::new(element.as_ref(), "click", handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A repeating `setInterval` timer, cleared on drop.
pub struct Interval {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Start calling `tick` every `period_ms` milliseconds.
    pub fn start<F>(window: &Window, period_ms: u32, tick: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(tick);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .ok()?;
        Some(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Viewport coordinates of a pointer event.
pub fn client_point(event: &Event) -> Option<Point> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| Point::new(f64::from(e.client_x()), f64::from(e.client_y())))
}

/// Viewport rectangle occupied by an element.
pub fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_edges(r.left(), r.top(), r.right(), r.bottom())
}

//! Live wall clock for a fixed time zone.

use super::events::Interval;
use sitekit_core::{ClockConfig, ClockFace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

/// Formats the current time as `HH:MM`.
///
/// Uses `Intl.DateTimeFormat` for the configured zone and locale. When the
/// runtime rejects either, a fixed UTC offset is used instead.
pub struct TimeFormatter {
    intl: Option<js_sys::Function>,
    face: ClockFace,
}

impl TimeFormatter {
    /// Build a formatter from clock settings.
    pub fn new(config: &ClockConfig) -> Self {
        let intl = match intl_format(config) {
            Ok(format) => Some(format),
            Err(err) => {
                log::warn!(
                    "clock: time zone '{}' unavailable ({err:?}); using UTC{:+} minutes",
                    config.time_zone,
                    config.fallback_utc_offset_minutes
                );
                None
            }
        };
        Self {
            intl,
            face: ClockFace::new(config.fallback_utc_offset_minutes),
        }
    }

    /// True when the fixed-offset fallback is in use.
    pub fn is_fallback(&self) -> bool {
        self.intl.is_none()
    }

    /// Current time in the configured zone.
    pub fn now(&self) -> String {
        let date = js_sys::Date::new_0();
        self.intl
            .as_ref()
            .and_then(|format| format.call1(&JsValue::NULL, &date).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| self.face.format(date.get_time() as i64))
    }
}

/// Build a bound `Intl.DateTimeFormat#format` for the configured zone.
fn intl_format(config: &ClockConfig) -> Result<js_sys::Function, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"timeZone".into(), &config.time_zone.as_str().into())?;
    js_sys::Reflect::set(&options, &"hour".into(), &"2-digit".into())?;
    js_sys::Reflect::set(&options, &"minute".into(), &"2-digit".into())?;
    js_sys::Reflect::set(&options, &"hour12".into(), &JsValue::FALSE)?;

    let intl = js_sys::Reflect::get(&js_sys::global(), &"Intl".into())?;
    let constructor: js_sys::Function =
        js_sys::Reflect::get(&intl, &"DateTimeFormat".into())?.dyn_into()?;
    let locales = js_sys::Array::of1(&config.locale.as_str().into());
    // Throws RangeError for unknown zones or malformed locales.
    let formatter = js_sys::Reflect::construct(&constructor, &js_sys::Array::of2(&locales, &options))?;
    let format = js_sys::Reflect::get(&formatter, &"format".into())?.dyn_into()?;
    Ok(format)
}

/// A clock element refreshed on a timer.
pub struct LiveClock {
    _interval: Option<Interval>,
}

impl LiveClock {
    /// Render the time now and on every tick.
    ///
    /// Returns `None` when the clock element is absent.
    pub fn mount(window: &Window, document: &Document, config: &ClockConfig) -> Option<Self> {
        let element = document.get_element_by_id(&config.element_id)?;
        let formatter = TimeFormatter::new(config);
        render(&element, &formatter);

        let interval = Interval::start(window, config.interval_ms, move || {
            render(&element, &formatter);
        });
        if interval.is_none() {
            log::warn!("clock: could not start interval timer");
        }
        Some(Self {
            _interval: interval,
        })
    }
}

fn render(element: &Element, formatter: &TimeFormatter) {
    element.set_text_content(Some(&formatter.now()));
}

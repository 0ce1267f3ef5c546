//! WASM entry point: mounts every behaviour on the current page.

use super::clock::LiveClock;
use super::contact::ContactFormView;
use super::counter::start_counters;
use super::error::MountError;
use super::filter::FilterBar;
use super::logging;
use super::modal::Modals;
use super::nav::NavToggle;
use super::slider::Testimonials;
use super::year::stamp_year;
use sitekit_core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// The behaviours wired onto a page.
///
/// Keep this value alive for as long as the page should stay interactive;
/// dropping it removes every listener and stops the clock.
#[wasm_bindgen]
pub struct Site {
    mounted: Vec<&'static str>,
    _nav: Option<NavToggle>,
    _clock: Option<LiveClock>,
    _filter: Option<FilterBar>,
    _slider: Option<Testimonials>,
    _modals: Option<Modals>,
    _contact: Option<ContactFormView>,
}

#[wasm_bindgen]
impl Site {
    /// Mount with the default page conventions.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Site, JsValue> {
        Self::mount(SiteConfig::default()).map_err(to_js)
    }

    /// Mount with a JSON configuration; omitted keys keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<Site, JsValue> {
        SiteConfig::from_json(json)
            .map_err(MountError::from)
            .and_then(Self::mount)
            .map_err(to_js)
    }

    /// Names of the behaviours that found their elements.
    pub fn mounted(&self) -> js_sys::Array {
        self.mounted.iter().map(|name| JsValue::from_str(name)).collect()
    }

    /// Check whether a behaviour was mounted.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self, behaviour: &str) -> bool {
        self.mounted.iter().any(|name| *name == behaviour)
    }
}

impl Site {
    /// Mount every behaviour described by `config`.
    ///
    /// Behaviours whose elements are missing are skipped.
    pub fn mount(config: SiteConfig) -> Result<Self, MountError> {
        config.validate()?;
        logging::init(config.log_level);

        let window = window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let mut mounted = Vec::new();
        let mut note = |name: &'static str, present: bool| {
            if present {
                mounted.push(name);
            } else {
                log::debug!("{name}: elements not found, skipped");
            }
        };

        let nav = NavToggle::mount(&document, &config.nav);
        note("nav", nav.is_some());
        let counters = start_counters(&window, &document, &config.counter);
        note("counters", counters > 0);
        let clock = LiveClock::mount(&window, &document, &config.clock);
        note("clock", clock.is_some());
        let filter = FilterBar::mount(&document, &config.filter);
        note("filter", filter.is_some());
        let slider = Testimonials::mount(&document, &config.slider);
        note("slider", slider.is_some());
        let modals = Modals::mount(&document, &config.modal);
        note("modals", modals.is_some());
        let contact = ContactFormView::mount(&document, &config.contact);
        note("contact", contact.is_some());
        note("year", stamp_year(&document, &config.year));

        log::debug!("mounted: {}", mounted.join(", "));
        Ok(Self {
            mounted,
            _nav: nav,
            _clock: clock,
            _filter: filter,
            _slider: slider,
            _modals: modals,
            _contact: contact,
        })
    }

    /// Names of the behaviours that found their elements.
    pub fn mounted_names(&self) -> &[&'static str] {
        &self.mounted
    }
}

fn to_js(err: MountError) -> JsValue {
    log::error!("{err}");
    JsValue::from_str(&err.to_string())
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

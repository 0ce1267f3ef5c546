//! Core state and rules for sitekit page behaviours.
//!
//! Everything here is platform-agnostic and runs natively; the `sitekit`
//! crate binds it to the browser DOM.
//!
//! - Navigation toggle: [`NavState`]
//! - Count-up counters: [`CounterAnimation`]
//! - Live clock: [`ClockFace`], [`format_hm`]
//! - Work filter: [`WorkFilter`], [`tag_matches`]
//! - Testimonial slider: [`QuoteSlider`]
//! - Modal dialogs: [`is_backdrop_click`], [`modal_target_id`]
//! - Contact form: [`ContactForm`] driven through [`State`] / [`Command`]
//! - Configuration: [`SiteConfig`]

mod clock;
mod config;
mod contact;
mod counter;
mod error;
mod filter;
mod geometry;
mod modal;
mod nav;
mod slider;
mod state;
pub mod validation;

pub use clock::{format_hm, ClockFace};
pub use config::{
    ClockConfig, ContactConfig, CounterConfig, FilterConfig, FormMessages, LogLevel, ModalConfig,
    NavConfig, SiteConfig, SliderConfig, YearConfig,
};
pub use contact::{
    ContactFields, ContactForm, ContactMessage, FormPhase, SubmitOutcome, FIELD_NAMES,
};
pub use counter::{CounterAnimation, CounterFrame, DEFAULT_STEPS};
pub use error::ConfigError;
pub use filter::{tag_matches, WorkFilter, ALL_TAG};
pub use geometry::{Point, Rect};
pub use modal::{is_backdrop_click, target_id as modal_target_id};
pub use nav::NavState;
pub use slider::QuoteSlider;
pub use state::{Command, State};
pub use validation::{FieldErrors, ValidationResult};

//! Site configuration: selectors, class names, clock settings and the
//! user-facing form messages.
//!
//! Every key has a default matching the stock page markup, so a config
//! document only needs the keys it changes:
//!
//! ```
//! use sitekit_core::SiteConfig;
//!
//! let config = SiteConfig::from_yaml("clock:\n  element_id: local-time\n").unwrap();
//! assert_eq!(config.clock.element_id, "local-time");
//! assert_eq!(config.clock.time_zone, "Africa/Johannesburg");
//! ```

use crate::counter::DEFAULT_STEPS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Browser console verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including mount reports
    Debug,
    /// Informational messages
    Info,
    /// Recoverable problems
    #[default]
    Warn,
    /// Failures only
    Error,
    /// Silent
    Off,
}

/// Top-level configuration for a mounted site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Navigation toggle
    pub nav: NavConfig,
    /// Count-up counters
    pub counter: CounterConfig,
    /// Live clock
    pub clock: ClockConfig,
    /// Work filter
    pub filter: FilterConfig,
    /// Testimonial slider
    pub slider: SliderConfig,
    /// Modal dialogs
    pub modal: ModalConfig,
    /// Contact form
    pub contact: ContactConfig,
    /// Footer year
    pub year: YearConfig,
}

impl SiteConfig {
    /// Parse a config from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is unusable.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is unusable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Reject values no behaviour can run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.steps == 0 {
            return Err(ConfigError::invalid("counter.steps", "must be at least 1"));
        }
        if self.clock.interval_ms == 0 {
            return Err(ConfigError::invalid("clock.interval_ms", "must be at least 1"));
        }
        if self.clock.fallback_utc_offset_minutes.abs() > 14 * 60 {
            return Err(ConfigError::invalid(
                "clock.fallback_utc_offset_minutes",
                "must be within ±14 hours",
            ));
        }
        if self.clock.time_zone.trim().is_empty() {
            return Err(ConfigError::invalid("clock.time_zone", "must not be empty"));
        }
        Ok(())
    }
}

/// Navigation toggle selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Hamburger button
    pub toggle: String,
    /// Collapsible panel
    pub panel: String,
    /// Links inside the panel that close it
    pub links: String,
    /// Class marking the panel open
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle: ".nav__toggle".to_string(),
            panel: "[data-nav]".to_string(),
            links: "a".to_string(),
            open_class: "is-open".to_string(),
        }
    }
}

/// Count-up counter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Counter elements
    pub selector: String,
    /// Attribute holding the numeric target
    pub attribute: String,
    /// Frames to reach the target
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: "[data-counter]".to_string(),
            attribute: "data-counter".to_string(),
            steps: DEFAULT_STEPS,
        }
    }
}

/// Live clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Id of the display element
    pub element_id: String,
    /// IANA time zone name
    pub time_zone: String,
    /// BCP 47 locale used for formatting
    pub locale: String,
    /// Offset used when the host rejects `time_zone`
    pub fallback_utc_offset_minutes: i32,
    /// Refresh period
    pub interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            element_id: "sa-time".to_string(),
            time_zone: "Africa/Johannesburg".to_string(),
            locale: "en-ZA".to_string(),
            fallback_utc_offset_minutes: 120,
            interval_ms: 1000,
        }
    }
}

/// Work filter selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter buttons
    pub buttons: String,
    /// Work items
    pub items: String,
    /// Attribute on a button naming its tag
    pub filter_attribute: String,
    /// Attribute on an item listing its tags
    pub tags_attribute: String,
    /// Class marking the selected button
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            buttons: ".filter".to_string(),
            items: ".work".to_string(),
            filter_attribute: "data-filter".to_string(),
            tags_attribute: "data-tags".to_string(),
            active_class: "is-active".to_string(),
        }
    }
}

/// Testimonial slider selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Quote elements, in display order
    pub quotes: String,
    /// Id of the "previous" control
    pub prev_id: String,
    /// Id of the "next" control
    pub next_id: String,
    /// Class marking the visible quote
    pub active_class: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            quotes: ".quote".to_string(),
            prev_id: "prev".to_string(),
            next_id: "next".to_string(),
            active_class: "is-active".to_string(),
        }
    }
}

/// Modal dialog selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Controls that open a dialog
    pub triggers: String,
    /// Attribute on a trigger naming the dialog id
    pub trigger_attribute: String,
    /// Controls that close their enclosing dialog
    pub closers: String,
    /// Dialogs dismissed by backdrop clicks
    pub dialogs: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            triggers: "[data-modal]".to_string(),
            trigger_attribute: "data-modal".to_string(),
            closers: "[data-close]".to_string(),
            dialogs: "dialog.modal".to_string(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Id of the form element
    pub form_id: String,
    /// Id of the status element
    pub status_id: String,
    /// Attribute naming the field an error slot belongs to
    pub error_attribute: String,
    /// User-facing text
    pub messages: FormMessages,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            status_id: "formStatus".to_string(),
            error_attribute: "data-error".to_string(),
            messages: FormMessages::default(),
        }
    }
}

/// User-facing contact form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    /// Name shorter than two characters
    pub name_invalid: String,
    /// Email not shaped like an address
    pub email_invalid: String,
    /// No service selected
    pub service_missing: String,
    /// Message shorter than ten characters
    pub message_too_short: String,
    /// Request in flight
    pub sending: String,
    /// Server accepted the submission
    pub sent: String,
    /// Server answered with a non-success status
    pub rejected: String,
    /// Request never completed
    pub network_error: String,
    /// No submission target configured
    pub demo_sent: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_invalid: "Please enter your name.".to_string(),
            email_invalid: "Please enter a valid email.".to_string(),
            service_missing: "Please select a service.".to_string(),
            message_too_short: "Please add a short message (10+ chars).".to_string(),
            sending: "Sending...".to_string(),
            sent: "Thanks! Your message has been sent.".to_string(),
            rejected: "Oops — something went wrong. Please try again.".to_string(),
            network_error: "Network error — please check your connection and try again."
                .to_string(),
            demo_sent: "✅ Message sent!".to_string(),
        }
    }
}

/// Footer year settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearConfig {
    /// Id of the year element
    pub element_id: String,
}

impl Default for YearConfig {
    fn default() -> Self {
        Self {
            element_id: "year".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = SiteConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.nav.toggle, ".nav__toggle");
        assert_eq!(config.counter.steps, 40);
        assert_eq!(config.clock.time_zone, "Africa/Johannesburg");
        assert_eq!(config.clock.locale, "en-ZA");
        assert_eq!(config.clock.interval_ms, 1000);
        assert_eq!(config.filter.active_class, "is-active");
        assert_eq!(config.slider.prev_id, "prev");
        assert_eq!(config.modal.dialogs, "dialog.modal");
        assert_eq!(config.contact.form_id, "contactForm");
        assert_eq!(config.contact.messages.sending, "Sending...");
        assert_eq!(config.year.element_id, "year");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
log_level: debug
slider:
  active_class: "current"
contact:
  messages:
    demo_sent: "Saved locally"
"#;
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.slider.active_class, "current");
        assert_eq!(config.slider.quotes, ".quote");
        assert_eq!(config.contact.messages.demo_sent, "Saved locally");
        assert_eq!(config.contact.messages.sending, "Sending...");
        assert_eq!(config.contact.form_id, "contactForm");
    }

    #[test]
    fn test_empty_documents_are_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_yaml("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config =
            SiteConfig::from_json(r#"{"clock": {"time_zone": "Europe/London", "fallback_utc_offset_minutes": 0}}"#)
                .unwrap();
        assert_eq!(config.clock.time_zone, "Europe/London");
        assert_eq!(config.clock.fallback_utc_offset_minutes, 0);
        assert_eq!(config.clock.element_id, "sa-time");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SiteConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SiteConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_steps() {
        let err = SiteConfig::from_yaml("counter:\n  steps: 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'counter.steps': must be at least 1"
        );
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = SiteConfig::from_json(r#"{"clock": {"interval_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "clock.interval_ms"));
    }

    #[test]
    fn test_rejects_wild_offset() {
        let err = SiteConfig::from_json(r#"{"clock": {"fallback_utc_offset_minutes": 2000}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("fallback_utc_offset_minutes"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SiteConfig::from_yaml("nav: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_unknown_log_level() {
        assert!(SiteConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn test_log_level_order() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Error < LogLevel::Off);
    }
}

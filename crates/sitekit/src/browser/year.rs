//! Footer year stamp.

use sitekit_core::YearConfig;
use web_sys::Document;

/// Write the current calendar year into the year element.
///
/// Returns false when the element is absent.
pub fn stamp_year(document: &Document, config: &YearConfig) -> bool {
    let Some(element) = document.get_element_by_id(&config.element_id) else {
        return false;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
    true
}

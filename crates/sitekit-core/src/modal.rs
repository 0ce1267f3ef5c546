//! Modal dialog rules: trigger resolution and backdrop hit-testing.

use crate::geometry::{Point, Rect};

/// Resolve the dialog id named by a trigger's `data-modal` attribute.
///
/// The value is used as-is; an absent or empty attribute names no dialog.
#[must_use]
pub fn target_id(raw: Option<&str>) -> Option<&str> {
    raw.filter(|id| !id.is_empty())
}

/// Check whether a click at `click` landed on the backdrop of a dialog laid
/// out at `bounds`.
///
/// Native dialogs report backdrop clicks on the dialog element itself, so the
/// click is outside the dialog exactly when it falls outside its rectangle.
#[must_use]
pub fn is_backdrop_click(bounds: &Rect, click: &Point) -> bool {
    !bounds.contains_point(click)
}

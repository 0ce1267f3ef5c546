//! Mobile navigation panel state.

/// Open/closed state of the navigation panel.
///
/// Mirrored onto the page as the panel's open class and the toggle's
/// `aria-expanded` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    /// Create a nav state with the given initial openness.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Invert the state and return the new openness.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the panel closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

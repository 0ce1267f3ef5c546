//! Testimonial slider cursor.

/// Cyclic cursor over a fixed number of quotes.
///
/// The cursor is always in `[0, len)`. With no quotes every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSlider {
    len: usize,
    index: usize,
}

impl QuoteSlider {
    /// Create a slider over `len` quotes, starting at the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Number of quotes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no quotes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active quote, or `None` when there are no quotes.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    /// Step back one quote, wrapping to the last.
    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Step forward one quote, wrapping to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Check whether the quote at `index` is the active one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.index
    }
}

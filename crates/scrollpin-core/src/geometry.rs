#![forbid(unsafe_code)]

//! Scroll-offset primitives.

/// A viewport scroll offset in host pixels.
///
/// Positive `x` scrolls right, positive `y` scrolls down. The origin
/// `(0, 0)` is the top-left of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

/// The top-left of the scrollable content.
pub const ORIGIN: ScrollPosition = ScrollPosition::new(0, 0);

impl ScrollPosition {
    /// Create a new scroll position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this position is the origin.
    #[inline]
    pub const fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl std::fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

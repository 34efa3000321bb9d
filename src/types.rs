//! Core types for scrollkit.
//!
//! These types define the foundation that everything builds on.
//! Geometry is integer pixels in document space - no floating point
//! epsilon needed for the comparisons the subsystems make.

// =============================================================================
// Node Identity
// =============================================================================

/// Index into the document's node arena.
pub type NodeId = usize;

// =============================================================================
// Style Classes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Presentational classes carried by a node.
    ///
    /// `REVEAL` is a host-supplied marker (which nodes participate in the
    /// reveal animation); the rest are mutated by the subsystems.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClassSet: u8 {
        /// Marks a node as revealable (set by the host, never mutated here).
        const REVEAL = 1 << 0;
        /// Menu open / nav link current / revealable element shown.
        const ACTIVE = 1 << 1;
        /// Header has scrolled past the sticky threshold.
        const SCROLLED = 1 << 2;
        /// Body is in keyboard-navigation mode (Tab pressed).
        const KEYBOARD_NAV = 1 << 3;
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned bounding box in document space (pixels).
///
/// `y` is the offset from the top of the document, not the viewport;
/// subtract the viewport scroll offset to get a viewport-relative top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Bottom edge (y + height).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Right edge (x + width).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible width in pixels.
    pub width: i32,
    /// Visible height in pixels.
    pub height: i32,
    /// Vertical scroll offset from the top of the document.
    pub scroll_y: i32,
}

impl Viewport {
    /// Create a viewport at scroll position 0.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height, scroll_y: 0 }
    }

    /// Top of a rect relative to the viewport (the `getBoundingClientRect`
    /// top of the browser world).
    #[inline]
    pub const fn relative_top(&self, rect: &Rect) -> i32 {
        rect.y - self.scroll_y
    }

    /// Bottom of a rect relative to the viewport.
    #[inline]
    pub const fn relative_bottom(&self, rect: &Rect) -> i32 {
        rect.bottom() - self.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn test_viewport_relative() {
        let mut viewport = Viewport::new(1280, 800);
        let rect = Rect::new(0, 1000, 1280, 200);

        assert_eq!(viewport.relative_top(&rect), 1000);

        viewport.scroll_y = 350;
        assert_eq!(viewport.relative_top(&rect), 650);
        assert_eq!(viewport.relative_bottom(&rect), 850);
    }

    #[test]
    fn test_class_set_ops() {
        let mut classes = ClassSet::REVEAL;
        assert!(!classes.contains(ClassSet::ACTIVE));

        classes.insert(ClassSet::ACTIVE);
        assert!(classes.contains(ClassSet::REVEAL | ClassSet::ACTIVE));

        classes.remove(ClassSet::ACTIVE);
        assert!(!classes.contains(ClassSet::ACTIVE));
        assert!(classes.contains(ClassSet::REVEAL));
    }
}

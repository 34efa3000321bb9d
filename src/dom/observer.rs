//! Intersection Observer - event-driven viewport intersection detection.
//!
//! The headless stand-in for the browser primitive: a set of observed
//! nodes, a ratio threshold, and a root margin that expands or contracts
//! the viewport box. Deliveries are computed on demand (the page ticks the
//! observer on scroll and load) rather than pushed by a runtime, but the
//! contract is the same - per-node entries with an intersection ratio and
//! an `is_intersecting` verdict, and `unobserve` to stop further
//! notifications for a node.
//!
//! # Example
//!
//! ```
//! use scrollkit::dom::{Document, IntersectionObserver, Node, NodeKind, ObserverOptions};
//! use scrollkit::types::{Rect, Viewport};
//!
//! let mut doc = Document::new();
//! let target = doc.insert(Node::new(NodeKind::Block).with_rect(Rect::new(0, 100, 800, 200)));
//!
//! let mut observer = IntersectionObserver::new(ObserverOptions::default());
//! observer.observe(target);
//!
//! let entries = observer.deliver(&doc, &Viewport::new(1280, 800));
//! assert!(entries[0].is_intersecting);
//! ```

use crate::types::{NodeId, Viewport};

use super::document::Document;

// =============================================================================
// Options
// =============================================================================

/// Per-side pixel adjustment of the viewport box.
///
/// Positive values expand the box, negative values contract it. The
/// default contracts the bottom edge by the reveal margin, so elements
/// reveal shortly before fully entering the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    /// All sides zero.
    pub const ZERO: Self = Self { top: 0, right: 0, bottom: 0, left: 0 };

    /// Adjust only the bottom edge.
    pub const fn bottom(pixels: i32) -> Self {
        Self { top: 0, right: 0, bottom: pixels, left: 0 }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Observer configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the node that must be inside the adjusted viewport.
    pub threshold: f32,
    /// Viewport box adjustment.
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    /// The reveal defaults: 10% visible, bottom edge pulled up 100px.
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::bottom(-100),
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

/// One observed node's intersection state at delivery time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    /// Fraction of the node's height inside the adjusted viewport (0.0-1.0).
    pub ratio: f32,
    /// Whether the ratio is at or past the configured threshold.
    pub is_intersecting: bool,
}

// =============================================================================
// Observer
// =============================================================================

/// Event-driven intersection detection over a fixed observed set.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    observed: Vec<NodeId>,
}

impl IntersectionObserver {
    /// Create an observer with no observed nodes.
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    /// Start observing a node. Observing twice is a no-op.
    pub fn observe(&mut self, target: NodeId) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    /// Stop observing a node. Further deliveries skip it.
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.retain(|&index| index != target);
    }

    /// Number of nodes still observed.
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// True when nothing is observed any more.
    pub fn is_idle(&self) -> bool {
        self.observed.is_empty()
    }

    /// Compute entries for every observed node against the current viewport.
    pub fn deliver(&self, doc: &Document, viewport: &Viewport) -> Vec<IntersectionEntry> {
        self.observed
            .iter()
            .map(|&target| self.entry_for(doc, viewport, target))
            .collect()
    }

    fn entry_for(&self, doc: &Document, viewport: &Viewport, target: NodeId) -> IntersectionEntry {
        let rect = doc.rect(target);
        let margin = self.options.root_margin;

        // Viewport box in viewport-relative coordinates, margin-adjusted.
        let root_top = -margin.top;
        let root_bottom = viewport.height + margin.bottom;

        let top = viewport.relative_top(&rect);
        let bottom = viewport.relative_bottom(&rect);

        // Zero-height nodes intersect when their top edge is inside the box.
        if rect.height <= 0 {
            let inside = top >= root_top && top <= root_bottom;
            return IntersectionEntry {
                target,
                ratio: if inside { 1.0 } else { 0.0 },
                is_intersecting: inside,
            };
        }

        let visible = (bottom.min(root_bottom) - top.max(root_top)).max(0);
        let ratio = visible as f32 / rect.height as f32;

        IntersectionEntry {
            target,
            ratio,
            is_intersecting: ratio > 0.0 && ratio >= self.options.threshold,
        }
    }
}

//! Visibility Revealer - one-shot reveal-on-scroll coordination.
//!
//! Detects, for a fixed set of nodes marked `REVEAL`, the moment each one
//! enters the viewport, and marks it `ACTIVE` exactly once. Two strategies,
//! chosen once at construction from the document's capability flag:
//!
//! - **Event-driven**: an [`IntersectionObserver`] with a ratio threshold
//!   and contracted bottom margin. On an intersecting delivery the node is
//!   revealed and unobserved, so the observed set shrinks monotonically to
//!   empty over the session.
//! - **Polling**: on every scroll tick (and once at load) recompute the
//!   viewport-relative top of every still-pending node; reveal when it
//!   crosses `viewport height - reveal point`.
//!
//! Both paths are outcome-equivalent: every marked node reveals once it is
//! scrolled into view, and never un-reveals.
//!
//! # Example
//!
//! ```
//! use scrollkit::dom::{Document, Node, NodeKind};
//! use scrollkit::reveal::{RevealThreshold, Revealer};
//! use scrollkit::types::{ClassSet, Rect, Viewport};
//!
//! let mut doc = Document::new();
//! doc.insert(
//!     Node::new(NodeKind::Section)
//!         .with_classes(ClassSet::REVEAL)
//!         .with_rect(Rect::new(0, 200, 800, 300)),
//! );
//!
//! let mut revealer = Revealer::new(&doc, RevealThreshold::default());
//! revealer.on_load(&mut doc, &Viewport::new(1280, 800));
//! assert_eq!(revealer.pending_count(), 0);
//! ```

use crate::dom::{Document, IntersectionEntry, IntersectionObserver, ObserverOptions, RootMargin};
use crate::types::{ClassSet, NodeId, Viewport};

// =============================================================================
// REVEAL CONSTANTS
// =============================================================================

/// Pixels subtracted from the viewport height to form the reveal line.
pub const REVEAL_POINT: i32 = 100;

/// Default intersection ratio for the event-driven path.
pub const REVEAL_RATIO: f32 = 0.1;

// =============================================================================
// THRESHOLD
// =============================================================================

/// When an element counts as "in view".
///
/// `ratio` drives the event-driven path; `margin` contracts the viewport
/// bottom in both paths (observer root margin / polling reveal line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold {
    pub ratio: f32,
    pub margin: i32,
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self {
            ratio: REVEAL_RATIO,
            margin: REVEAL_POINT,
        }
    }
}

// =============================================================================
// STRATEGY
// =============================================================================

/// Capability-selected observation strategy.
///
/// Picked once at construction, never re-evaluated. Both variants expose
/// the same drive surface through [`Revealer::on_scroll`].
#[derive(Debug)]
enum ObservationStrategy {
    /// Intersection observation with per-node unobserve on reveal.
    EventDriven(IntersectionObserver),
    /// Recompute bounding tops of still-pending nodes on every tick.
    Polling { pending: Vec<NodeId>, margin: i32 },
}

// =============================================================================
// REVEALER
// =============================================================================

/// The reveal coordinator. Owns the strategy and nothing else; revealed
/// state lives on the nodes as the `ACTIVE` class.
#[derive(Debug)]
pub struct Revealer {
    strategy: ObservationStrategy,
}

impl Revealer {
    /// Capture all `REVEAL` nodes and select a strategy from the document's
    /// capability flag. Constructed once at page wiring; an empty reveal
    /// set yields an idle revealer under either strategy.
    pub fn new(doc: &Document, threshold: RevealThreshold) -> Self {
        Self::with_elements(doc, doc.nodes_with_class(ClassSet::REVEAL), threshold)
    }

    /// Register an explicit element set instead of the `REVEAL` marker
    /// query. The strategy selection is the same.
    pub fn with_elements(doc: &Document, elements: Vec<NodeId>, threshold: RevealThreshold) -> Self {
        let strategy = if doc.supports_intersection_observer() {
            let mut observer = IntersectionObserver::new(ObserverOptions {
                threshold: threshold.ratio,
                root_margin: RootMargin::bottom(-threshold.margin),
            });
            for index in elements {
                observer.observe(index);
            }
            ObservationStrategy::EventDriven(observer)
        } else {
            ObservationStrategy::Polling {
                pending: elements,
                margin: threshold.margin,
            }
        };

        Self { strategy }
    }

    /// Drive one observation tick against the current viewport.
    pub fn on_scroll(&mut self, doc: &mut Document, viewport: &Viewport) {
        match &mut self.strategy {
            ObservationStrategy::EventDriven(observer) => {
                let entries = observer.deliver(doc, viewport);
                Self::reveal_intersecting(doc, observer, &entries);
            }
            ObservationStrategy::Polling { pending, margin } => {
                let reveal_line = viewport.height - *margin;
                pending.retain(|&index| {
                    let top = viewport.relative_top(&doc.rect(index));
                    if top < reveal_line {
                        doc.add_class(index, ClassSet::ACTIVE);
                        false
                    } else {
                        true
                    }
                });
            }
        }
    }

    /// The load-time check: reveal anything already inside the initial
    /// viewport without waiting for a scroll event.
    pub fn on_load(&mut self, doc: &mut Document, viewport: &Viewport) {
        self.on_scroll(doc, viewport);
    }

    /// Apply a batch of intersection entries directly (the observer
    /// callback of the event-driven path). Entries for nodes no longer
    /// observed, or not intersecting, change nothing.
    pub fn on_intersections(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) {
        if let ObservationStrategy::EventDriven(observer) = &mut self.strategy {
            Self::reveal_intersecting(doc, observer, entries);
        }
    }

    fn reveal_intersecting(
        doc: &mut Document,
        observer: &mut IntersectionObserver,
        entries: &[IntersectionEntry],
    ) {
        for entry in entries {
            if entry.is_intersecting {
                doc.add_class(entry.target, ClassSet::ACTIVE);
                observer.unobserve(entry.target);
            }
        }
    }

    /// Nodes still waiting to be revealed.
    pub fn pending_count(&self) -> usize {
        match &self.strategy {
            ObservationStrategy::EventDriven(observer) => observer.observed_count(),
            ObservationStrategy::Polling { pending, .. } => pending.len(),
        }
    }

    /// True when every captured node has been revealed (or none existed).
    pub fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }

    /// Which strategy was selected at construction.
    pub fn is_event_driven(&self) -> bool {
        matches!(self.strategy, ObservationStrategy::EventDriven(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, NodeKind};
    use crate::types::Rect;

    fn revealable(y: i32, height: i32) -> Node {
        Node::new(NodeKind::Section)
            .with_classes(ClassSet::REVEAL)
            .with_rect(Rect::new(0, y, 800, height))
    }

    fn polling_doc() -> Document {
        Document::new().without_intersection_observer()
    }

    #[test]
    fn test_strategy_selected_from_capability() {
        let mut doc = Document::new();
        doc.insert(revealable(0, 100));
        assert!(Revealer::new(&doc, RevealThreshold::default()).is_event_driven());

        let mut doc = polling_doc();
        doc.insert(revealable(0, 100));
        assert!(!Revealer::new(&doc, RevealThreshold::default()).is_event_driven());
    }

    #[test]
    fn test_empty_set_is_idle() {
        let doc = Document::new();
        let revealer = Revealer::new(&doc, RevealThreshold::default());
        assert!(revealer.is_idle());
        assert!(revealer.is_event_driven());

        let doc = polling_doc();
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());
        assert!(revealer.is_idle());

        // Driving an idle revealer is a no-op, not a panic.
        let mut doc = polling_doc();
        revealer.on_scroll(&mut doc, &Viewport::new(1280, 800));
        assert!(revealer.is_idle());
    }

    #[test]
    fn test_polling_reveal_line_scenario() {
        // Viewport 800, reveal point 100 => line at 700.
        // Element top 1000: hidden. After scrolling 350, top is 650 < 700.
        let mut doc = polling_doc();
        let target = doc.insert(revealable(1000, 200));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        let mut viewport = Viewport::new(1280, 800);
        revealer.on_scroll(&mut doc, &viewport);
        assert!(!doc.has_class(target, ClassSet::ACTIVE));
        assert_eq!(revealer.pending_count(), 1);

        // Not yet: top 701 is not < 700.
        viewport.scroll_y = 299;
        revealer.on_scroll(&mut doc, &viewport);
        assert!(!doc.has_class(target, ClassSet::ACTIVE));

        viewport.scroll_y = 350;
        revealer.on_scroll(&mut doc, &viewport);
        assert!(doc.has_class(target, ClassSet::ACTIVE));
        assert!(revealer.is_idle());
    }

    #[test]
    fn test_polling_reveal_is_monotonic() {
        let mut doc = polling_doc();
        let target = doc.insert(revealable(1000, 200));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        let mut viewport = Viewport::new(1280, 800);
        viewport.scroll_y = 600;
        revealer.on_scroll(&mut doc, &viewport);
        assert!(doc.has_class(target, ClassSet::ACTIVE));

        // Scroll back to the top - the node stays revealed.
        viewport.scroll_y = 0;
        revealer.on_scroll(&mut doc, &viewport);
        assert!(doc.has_class(target, ClassSet::ACTIVE));
        assert!(revealer.is_idle());
    }

    #[test]
    fn test_load_reveals_initial_viewport() {
        let mut doc = polling_doc();
        let above = doc.insert(revealable(100, 200));
        let below = doc.insert(revealable(2000, 200));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        revealer.on_load(&mut doc, &Viewport::new(1280, 800));
        assert!(doc.has_class(above, ClassSet::ACTIVE));
        assert!(!doc.has_class(below, ClassSet::ACTIVE));
        assert_eq!(revealer.pending_count(), 1);
    }

    #[test]
    fn test_event_driven_reveals_and_unobserves() {
        let mut doc = Document::new();
        let near = doc.insert(revealable(200, 300));
        let far = doc.insert(revealable(3000, 300));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());
        assert_eq!(revealer.pending_count(), 2);

        let mut viewport = Viewport::new(1280, 800);
        revealer.on_load(&mut doc, &viewport);
        assert!(doc.has_class(near, ClassSet::ACTIVE));
        assert!(!doc.has_class(far, ClassSet::ACTIVE));
        assert_eq!(revealer.pending_count(), 1);

        viewport.scroll_y = 2600;
        revealer.on_scroll(&mut doc, &viewport);
        assert!(doc.has_class(far, ClassSet::ACTIVE));
        assert!(revealer.is_idle());
    }

    #[test]
    fn test_event_driven_never_crossing_stays_hidden() {
        let mut doc = Document::new();
        let target = doc.insert(revealable(10_000, 300));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        let mut viewport = Viewport::new(1280, 800);
        for scroll_y in [0, 100, 500, 1000, 2000] {
            viewport.scroll_y = scroll_y;
            revealer.on_scroll(&mut doc, &viewport);
        }

        assert!(!doc.has_class(target, ClassSet::ACTIVE));
        assert_eq!(revealer.pending_count(), 1);
    }

    #[test]
    fn test_event_driven_re_intersection_is_inert() {
        let mut doc = Document::new();
        let target = doc.insert(revealable(200, 300));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        revealer.on_load(&mut doc, &Viewport::new(1280, 800));
        assert!(doc.has_class(target, ClassSet::ACTIVE));
        assert!(revealer.is_idle());

        // Simulate a stray re-delivery for the already revealed node.
        let stray = IntersectionEntry {
            target,
            ratio: 1.0,
            is_intersecting: true,
        };
        revealer.on_intersections(&mut doc, &[stray]);

        assert!(doc.has_class(target, ClassSet::ACTIVE));
        assert!(revealer.is_idle());
    }

    #[test]
    fn test_non_intersecting_entries_change_nothing() {
        let mut doc = Document::new();
        let target = doc.insert(revealable(5000, 300));
        let mut revealer = Revealer::new(&doc, RevealThreshold::default());

        let entry = IntersectionEntry {
            target,
            ratio: 0.0,
            is_intersecting: false,
        };
        revealer.on_intersections(&mut doc, &[entry]);

        assert!(!doc.has_class(target, ClassSet::ACTIVE));
        assert_eq!(revealer.pending_count(), 1);
    }

    #[test]
    fn test_with_explicit_elements() {
        let mut doc = polling_doc();
        let marked = doc.insert(revealable(100, 100));
        let plain = doc.insert(Node::new(NodeKind::Block).with_rect(Rect::new(0, 100, 800, 100)));

        // Only the explicitly registered node participates.
        let mut revealer =
            Revealer::with_elements(&doc, vec![plain], RevealThreshold::default());
        revealer.on_load(&mut doc, &Viewport::new(1280, 800));

        assert!(doc.has_class(plain, ClassSet::ACTIVE));
        assert!(!doc.has_class(marked, ClassSet::ACTIVE));
    }

    #[test]
    fn test_custom_threshold_margin() {
        // Margin 0: reveal line sits at the viewport bottom.
        let mut doc = polling_doc();
        let target = doc.insert(revealable(799, 100));
        let mut revealer = Revealer::new(
            &doc,
            RevealThreshold { ratio: REVEAL_RATIO, margin: 0 },
        );

        revealer.on_load(&mut doc, &Viewport::new(1280, 800));
        assert!(doc.has_class(target, ClassSet::ACTIVE));
    }
}

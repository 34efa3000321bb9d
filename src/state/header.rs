//! Header Module - scroll-aware sticky header state.
//!
//! Adds `SCROLLED` to the header node once the viewport has scrolled past
//! a fixed threshold and removes it when scrolling back. Unlike the reveal
//! system this is two-way state. Also tracks the last seen scroll offset.

use crate::dom::Document;
use crate::types::{ClassSet, NodeId};

// =============================================================================
// HEADER CONSTANTS
// =============================================================================

/// Scroll offset past which the header counts as scrolled.
pub const SCROLL_THRESHOLD: i32 = 100;

// =============================================================================
// HEADER STATE
// =============================================================================

/// Per-page header state (last scroll tracking).
#[derive(Debug, Default)]
pub struct HeaderState {
    last_scroll: i32,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a scroll offset: flip `SCROLLED` on the header around the
    /// threshold and remember the offset.
    pub fn on_scroll(&mut self, doc: &mut Document, header: NodeId, scroll_y: i32) {
        if scroll_y > SCROLL_THRESHOLD {
            doc.add_class(header, ClassSet::SCROLLED);
        } else {
            doc.remove_class(header, ClassSet::SCROLLED);
        }
        self.last_scroll = scroll_y;
    }

    /// Last scroll offset seen.
    pub fn last_scroll(&self) -> i32 {
        self.last_scroll
    }
}

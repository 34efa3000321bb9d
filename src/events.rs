//! Events - the external event stream the page reacts to.
//!
//! Every behavior in the engine is a response to one of these discrete
//! events, delivered by the host and run to completion synchronously.
//! There is no queue and no concurrency; the host calls
//! [`crate::page::Page::handle_event`] with one event at a time.

use crate::types::NodeId;

// =============================================================================
// Keys
// =============================================================================

/// Key identity for keydown events.
///
/// Only Tab has behavioral meaning (keyboard-navigation mode); everything
/// else is carried for completeness and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Char(char),
}

// =============================================================================
// Events
// =============================================================================

/// An external event from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading. Fires lazy activation and the initial
    /// reveal check.
    Load,
    /// The viewport scrolled to a new vertical offset.
    Scroll { scroll_y: i32 },
    /// The viewport was resized.
    Resize { width: i32, height: i32 },
    /// A node was clicked.
    Click { target: NodeId },
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse button went down (used only to leave keyboard-navigation
    /// mode; the click event carries the target).
    MouseDown,
}

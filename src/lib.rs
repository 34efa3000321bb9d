//! # scrollkit
//!
//! Headless scroll interactivity engine for a static page.
//!
//! The host supplies a document (a flat tree of visual nodes with ids,
//! classes, and geometry) and a viewport, then feeds discrete events
//! (load, scroll, resize, click, keydown, mousedown) through a [`Page`].
//! The engine mutates presentational state - classes, scroll offset,
//! image sources - and nothing else.
//!
//! ## Architecture
//!
//! ```text
//! host events → Page::handle_event → subsystems → document classes
//! ```
//!
//! The one stateful core is the [`reveal`] module: a one-shot
//! reveal-on-scroll coordinator with an event-driven observation strategy
//! and a polling fallback, selected once at wiring from the document's
//! capability flags.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rect, Viewport, ClassSet, NodeId)
//! - [`dom`] - Document arena, nodes, intersection observer
//! - [`events`] - The external event stream
//! - [`reveal`] - The visibility revealer (the core)
//! - [`state`] - Peripheral subsystems (menu, header, nav, a11y, lazy, track)
//! - [`page`] - The owned page context and event routing

pub mod dom;
pub mod events;
pub mod page;
pub mod reveal;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::{ClassSet, NodeId, Rect, Viewport};

pub use dom::{
    Document, IntersectionEntry, IntersectionObserver, Node, NodeKind, ObserverOptions,
    RootMargin, BODY,
};

pub use events::{Event, Key};

pub use reveal::{RevealThreshold, Revealer, REVEAL_POINT, REVEAL_RATIO};

pub use page::{Page, PageError, HAMBURGER_ID, HEADER_ID, NAV_MENU_ID};

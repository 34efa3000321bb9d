//! DOM Module - the engine's view of the host's render tree.
//!
//! - **Document** - flat node arena, id lookup, classes, geometry, ancestry
//! - **Node** - plain per-node record (kind, classes, rect, attributes)
//! - **IntersectionObserver** - event-driven viewport intersection detection

mod document;
mod node;
mod observer;

pub use document::{Document, BODY};
pub use node::{Node, NodeKind};
pub use observer::{IntersectionEntry, IntersectionObserver, ObserverOptions, RootMargin};

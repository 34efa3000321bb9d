//! Menu Module - mobile navigation toggle.
//!
//! The hamburger control and the nav menu share an `ACTIVE` open state;
//! while open, body scrolling is locked. The menu closes on a nav-link
//! click and on any click outside both the menu and the hamburger.

use crate::dom::Document;
use crate::types::{ClassSet, NodeId};

/// Whether the menu is currently open.
pub fn is_open(doc: &Document, nav_menu: NodeId) -> bool {
    doc.has_class(nav_menu, ClassSet::ACTIVE)
}

/// Flip the menu open/closed and sync the body scroll lock.
pub fn toggle(doc: &mut Document, hamburger: NodeId, nav_menu: NodeId) {
    doc.toggle_class(hamburger, ClassSet::ACTIVE);
    let open = doc.toggle_class(nav_menu, ClassSet::ACTIVE);
    doc.set_body_scroll_locked(open);
}

/// Close the menu and release the body scroll lock. Idempotent.
pub fn close(doc: &mut Document, hamburger: NodeId, nav_menu: NodeId) {
    doc.remove_class(hamburger, ClassSet::ACTIVE);
    doc.remove_class(nav_menu, ClassSet::ACTIVE);
    doc.set_body_scroll_locked(false);
}

/// Close the menu when a click lands outside both the menu and the
/// hamburger control.
pub fn on_document_click(doc: &mut Document, hamburger: NodeId, nav_menu: NodeId, target: NodeId) {
    if !doc.contains(nav_menu, target) && !doc.contains(hamburger, target) {
        close(doc, hamburger, nav_menu);
    }
}

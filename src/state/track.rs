//! Track Module - inert click-tracking stubs.
//!
//! Classifies anchors by their href (WhatsApp deep links, phone call
//! links) and logs a debug event when one is clicked. Deliberately inert:
//! no analytics backend exists, the log line is the whole effect.

use tracing::debug;

use crate::dom::Document;
use crate::types::NodeId;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// What kind of contact link an href represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Whatsapp,
    Phone,
}

/// Classify an href. Returns `None` for ordinary links.
pub fn classify(href: &str) -> Option<ContactLink> {
    if href.contains("wa.me") {
        Some(ContactLink::Whatsapp)
    } else if href.starts_with("tel:") {
        Some(ContactLink::Phone)
    } else {
        None
    }
}

// =============================================================================
// CLICK STUB
// =============================================================================

/// Log a tracking stub for a clicked node, if it is a contact link.
pub fn on_click(doc: &Document, target: NodeId) {
    let Some(href) = doc.node(target).and_then(|node| node.href.as_deref()) else {
        return;
    };
    match classify(href) {
        Some(ContactLink::Whatsapp) => debug!(href, "whatsapp link clicked"),
        Some(ContactLink::Phone) => debug!(href, "phone link clicked"),
        None => {}
    }
}

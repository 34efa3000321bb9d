//! Accessibility Module - keyboard-navigation focus mode.
//!
//! Tab switches the body into keyboard-navigation mode (the host styles
//! focus rings off this class); any mouse button press leaves it.

use crate::dom::{Document, BODY};
use crate::events::Key;
use crate::types::ClassSet;

/// Enter keyboard-navigation mode on Tab. Other keys change nothing.
pub fn on_keydown(doc: &mut Document, key: Key) {
    if key == Key::Tab {
        doc.add_class(BODY, ClassSet::KEYBOARD_NAV);
    }
}

/// Leave keyboard-navigation mode on any mouse press.
pub fn on_mousedown(doc: &mut Document) {
    doc.remove_class(BODY, ClassSet::KEYBOARD_NAV);
}

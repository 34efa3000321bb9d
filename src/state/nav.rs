//! Nav Module - section highlighting and in-page scrolling.
//!
//! Two concerns:
//! - `highlight` - marks the nav link whose section currently contains the
//!   probe line (scroll offset plus a fixed lead) as `ACTIVE`
//! - `scroll_to_target` - jumps the viewport to a nav link's section,
//!   offset by the sticky header height

use crate::dom::{Document, NodeKind};
use crate::types::{ClassSet, NodeId, Viewport};

// =============================================================================
// NAV CONSTANTS
// =============================================================================

/// Lead added to the scroll offset when probing which section is current.
pub const HIGHLIGHT_OFFSET: i32 = 150;

/// Href that always scrolls back to the very top.
pub const HOME_HREF: &str = "#home";

// =============================================================================
// HIGHLIGHT
// =============================================================================

/// Recompute the `ACTIVE` nav link for the current scroll offset.
///
/// The probe line sits at `scroll_y + HIGHLIGHT_OFFSET`; the section whose
/// `[top, top + height)` span contains it wins. When no section contains
/// the probe (between sections, or past the last one) the links are left
/// as they are.
pub fn highlight(doc: &mut Document, scroll_y: i32) {
    let probe = scroll_y + HIGHLIGHT_OFFSET;

    let mut current: Option<String> = None;
    for index in doc.nodes_of_kind(NodeKind::Section) {
        let Some(node) = doc.node(index) else { continue };
        let Some(id) = &node.id else { continue };
        if probe >= node.rect.y && probe < node.rect.bottom() {
            current = Some(id.clone());
        }
    }

    let Some(current) = current else { return };
    let target_href = format!("#{current}");

    for index in doc.nodes_of_kind(NodeKind::NavLink) {
        let matches = doc
            .node(index)
            .and_then(|node| node.href.as_deref())
            .is_some_and(|href| href == target_href);
        if matches {
            doc.add_class(index, ClassSet::ACTIVE);
        } else {
            doc.remove_class(index, ClassSet::ACTIVE);
        }
    }
}

// =============================================================================
// IN-PAGE SCROLL
// =============================================================================

/// Scroll the viewport to a nav link's target section.
///
/// The landing offset is the section top minus the header height (so the
/// sticky header doesn't cover the section), clamped at 0. `#home` always
/// lands at the top. A link without an href, or an href whose section does
/// not exist, is a silent no-op.
pub fn scroll_to_target(doc: &Document, viewport: &mut Viewport, link: NodeId, header: NodeId) {
    let Some(href) = doc.node(link).and_then(|node| node.href.clone()) else {
        return;
    };

    if href == HOME_HREF {
        viewport.scroll_y = 0;
        return;
    }

    let Some(id) = href.strip_prefix('#') else { return };
    let Some(section) = doc.get_index(id) else { return };

    let header_height = doc.rect(header).height;
    viewport.scroll_y = (doc.rect(section).y - header_height).max(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;
    use crate::types::Rect;

    struct Fixture {
        doc: Document,
        header: NodeId,
        link_about: NodeId,
        link_contact: NodeId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let header = doc.insert(
            Node::new(NodeKind::Header)
                .with_id("header")
                .with_rect(Rect::new(0, 0, 1280, 80)),
        );
        doc.insert(
            Node::new(NodeKind::Section)
                .with_id("about")
                .with_rect(Rect::new(0, 600, 1280, 500)),
        );
        doc.insert(
            Node::new(NodeKind::Section)
                .with_id("contact")
                .with_rect(Rect::new(0, 1100, 1280, 500)),
        );
        let link_about = doc.insert(Node::new(NodeKind::NavLink).with_href("#about"));
        let link_contact = doc.insert(Node::new(NodeKind::NavLink).with_href("#contact"));
        Fixture { doc, header, link_about, link_contact }
    }

    #[test]
    fn test_highlight_picks_containing_section() {
        let mut f = fixture();

        // Probe at 150 + 500 = 650, inside "about" [600, 1100).
        highlight(&mut f.doc, 500);
        assert!(f.doc.has_class(f.link_about, ClassSet::ACTIVE));
        assert!(!f.doc.has_class(f.link_contact, ClassSet::ACTIVE));

        // Probe at 150 + 1000 = 1150, inside "contact" [1100, 1600).
        highlight(&mut f.doc, 1000);
        assert!(!f.doc.has_class(f.link_about, ClassSet::ACTIVE));
        assert!(f.doc.has_class(f.link_contact, ClassSet::ACTIVE));
    }

    #[test]
    fn test_highlight_boundaries() {
        let mut f = fixture();

        // Probe exactly at a section top is inside it.
        highlight(&mut f.doc, 450); // probe 600
        assert!(f.doc.has_class(f.link_about, ClassSet::ACTIVE));

        // Probe exactly at the bottom edge belongs to the next section.
        highlight(&mut f.doc, 950); // probe 1100
        assert!(f.doc.has_class(f.link_contact, ClassSet::ACTIVE));
        assert!(!f.doc.has_class(f.link_about, ClassSet::ACTIVE));
    }

    #[test]
    fn test_highlight_outside_all_sections_keeps_state() {
        let mut f = fixture();

        highlight(&mut f.doc, 500);
        assert!(f.doc.has_class(f.link_about, ClassSet::ACTIVE));

        // Probe at 150, above every section: nothing changes.
        highlight(&mut f.doc, 0);
        assert!(f.doc.has_class(f.link_about, ClassSet::ACTIVE));
    }

    #[test]
    fn test_scroll_to_target_offsets_by_header() {
        let f = fixture();
        let mut viewport = Viewport::new(1280, 800);

        let mut doc = f.doc;
        scroll_to_target(&doc, &mut viewport, f.link_contact, f.header);
        assert_eq!(viewport.scroll_y, 1100 - 80);

        // A section above the header height clamps at 0.
        doc.insert(
            Node::new(NodeKind::Section)
                .with_id("top")
                .with_rect(Rect::new(0, 40, 1280, 100)),
        );
        let link_top = doc.insert(Node::new(NodeKind::NavLink).with_href("#top"));
        scroll_to_target(&doc, &mut viewport, link_top, f.header);
        assert_eq!(viewport.scroll_y, 0);
    }

    #[test]
    fn test_scroll_to_home() {
        let mut f = fixture();
        let home = f.doc.insert(Node::new(NodeKind::NavLink).with_href(HOME_HREF));
        let mut viewport = Viewport::new(1280, 800);
        viewport.scroll_y = 900;

        scroll_to_target(&f.doc, &mut viewport, home, f.header);
        assert_eq!(viewport.scroll_y, 0);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut f = fixture();
        let dangling = f.doc.insert(Node::new(NodeKind::NavLink).with_href("#nowhere"));
        let bare = f.doc.insert(Node::new(NodeKind::NavLink));
        let mut viewport = Viewport::new(1280, 800);
        viewport.scroll_y = 333;

        scroll_to_target(&f.doc, &mut viewport, dangling, f.header);
        assert_eq!(viewport.scroll_y, 333);

        scroll_to_target(&f.doc, &mut viewport, bare, f.header);
        assert_eq!(viewport.scroll_y, 333);
    }
}

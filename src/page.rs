//! Page - application wiring and event routing.
//!
//! The single owned context for a page session. Construction resolves the
//! required wiring nodes, captures the revealable set, and selects the
//! observation strategy; after that the host feeds discrete events through
//! [`Page::handle_event`] and reads presentational state back off the
//! document. There is no teardown - the page session is the whole lifetime.

use tracing::{debug, warn};

use crate::dom::{Document, NodeKind};
use crate::events::Event;
use crate::reveal::{RevealThreshold, Revealer};
use crate::state::{a11y, lazy, menu, nav, track, HeaderState};
use crate::types::{NodeId, Viewport};

// =============================================================================
// WIRING IDS
// =============================================================================

/// Required id of the mobile menu toggle control.
pub const HAMBURGER_ID: &str = "hamburger";
/// Required id of the navigation menu container.
pub const NAV_MENU_ID: &str = "navMenu";
/// Required id of the sticky page header.
pub const HEADER_ID: &str = "header";

// =============================================================================
// ERRORS
// =============================================================================

/// Construction-time wiring failure. The only error surface in the engine;
/// everything at runtime is a silent no-op by design.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("missing required node: #{0}")]
    MissingNode(&'static str),
}

// =============================================================================
// PAGE
// =============================================================================

/// An initialized page session.
#[derive(Debug)]
pub struct Page {
    doc: Document,
    viewport: Viewport,
    revealer: Revealer,
    header_state: HeaderState,
    hamburger: NodeId,
    nav_menu: NodeId,
    header: NodeId,
}

impl Page {
    /// Wire a page with the default reveal threshold.
    pub fn new(doc: Document, viewport: Viewport) -> Result<Self, PageError> {
        Self::with_threshold(doc, viewport, RevealThreshold::default())
    }

    /// Wire a page with an explicit reveal threshold.
    ///
    /// Fails if any of the required nodes (`#hamburger`, `#navMenu`,
    /// `#header`) is absent - the same hard failure the wiring would hit
    /// in a browser. Runs once; a page is never re-wired.
    pub fn with_threshold(
        doc: Document,
        viewport: Viewport,
        threshold: RevealThreshold,
    ) -> Result<Self, PageError> {
        let hamburger = doc
            .get_index(HAMBURGER_ID)
            .ok_or(PageError::MissingNode(HAMBURGER_ID))?;
        let nav_menu = doc
            .get_index(NAV_MENU_ID)
            .ok_or(PageError::MissingNode(NAV_MENU_ID))?;
        let header = doc
            .get_index(HEADER_ID)
            .ok_or(PageError::MissingNode(HEADER_ID))?;

        let revealer = Revealer::new(&doc, threshold);
        debug!(
            nodes = doc.len(),
            revealable = revealer.pending_count(),
            event_driven = revealer.is_event_driven(),
            "page wired"
        );

        let page = Self {
            doc,
            viewport,
            revealer,
            header_state: HeaderState::new(),
            hamburger,
            nav_menu,
            header,
        };
        page.check_overflow();
        Ok(page)
    }

    // =========================================================================
    // Event Routing
    // =========================================================================

    /// Route one external event to the subsystems. Runs to completion
    /// synchronously; never fails.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Load => {
                lazy::activate(&mut self.doc);
                self.revealer.on_load(&mut self.doc, &self.viewport);
                self.check_overflow();
            }
            Event::Scroll { scroll_y } => {
                // The body scroll lock models `overflow: hidden`: while the
                // menu is open the viewport cannot move.
                if self.doc.body_scroll_locked() {
                    return;
                }
                self.apply_scroll(scroll_y);
            }
            Event::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                self.check_overflow();
            }
            Event::Click { target } => self.handle_click(target),
            Event::KeyDown { key } => a11y::on_keydown(&mut self.doc, key),
            Event::MouseDown => a11y::on_mousedown(&mut self.doc),
        }
    }

    fn handle_click(&mut self, target: NodeId) {
        if self.doc.contains(self.hamburger, target) {
            menu::toggle(&mut self.doc, self.hamburger, self.nav_menu);
            return;
        }

        let is_nav_link = self
            .doc
            .node(target)
            .is_some_and(|node| node.kind == NodeKind::NavLink);

        if is_nav_link {
            menu::close(&mut self.doc, self.hamburger, self.nav_menu);
            nav::scroll_to_target(&self.doc, &mut self.viewport, target, self.header);
            // The jump settles immediately; run the scroll-driven
            // subsystems at the landing offset.
            self.apply_scroll(self.viewport.scroll_y);
            return;
        }

        track::on_click(&self.doc, target);
        menu::on_document_click(&mut self.doc, self.hamburger, self.nav_menu, target);
    }

    fn apply_scroll(&mut self, scroll_y: i32) {
        self.viewport.scroll_y = scroll_y;
        self.header_state
            .on_scroll(&mut self.doc, self.header, scroll_y);
        nav::highlight(&mut self.doc, scroll_y);
        self.revealer.on_scroll(&mut self.doc, &self.viewport);
    }

    /// Developer-facing diagnostic: content wider than the viewport means
    /// the host page has a horizontal overflow bug. Warning only, no
    /// behavioral consequence.
    fn check_overflow(&self) {
        let content_width = self.doc.content_width();
        if content_width > self.viewport.width {
            warn!(
                content_width,
                viewport_width = self.viewport.width,
                "horizontal overflow detected, check for nodes wider than the viewport"
            );
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The document, for reading presentational state back.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The reveal coordinator.
    pub fn revealer(&self) -> &Revealer {
        &self.revealer
    }

    /// Last scroll offset routed through the header subsystem.
    pub fn last_scroll(&self) -> i32 {
        self.header_state.last_scroll()
    }
}

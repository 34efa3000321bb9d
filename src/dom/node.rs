//! Node - a single entry in the document arena.
//!
//! Nodes are plain records: identity, structural kind, classes, geometry,
//! and the handful of attributes the subsystems read (href for anchors,
//! deferred source for lazy images). Everything else about the host's
//! render tree is out of scope.

use crate::types::{ClassSet, NodeId, Rect};

// =============================================================================
// Node Kind
// =============================================================================

/// Structural role of a node.
///
/// Stands in for the tag/selector distinctions the subsystems care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document body (always index 0).
    Body,
    /// The sticky page header.
    Header,
    /// The mobile menu toggle control.
    Hamburger,
    /// The navigation menu container.
    NavMenu,
    /// A navigation link (href points at a section).
    NavLink,
    /// A content section addressable by id.
    Section,
    /// An image element.
    Image,
    /// A generic anchor element.
    Anchor,
    /// An injected script reference (lazy-loading fallback).
    Script,
    /// Any other visual node.
    Block,
}

// =============================================================================
// Node
// =============================================================================

/// A visual node as the engine sees it.
#[derive(Debug, Clone)]
pub struct Node {
    /// Host-assigned identifier, if any.
    pub id: Option<String>,
    /// Structural role.
    pub kind: NodeKind,
    /// Presentational classes.
    pub classes: ClassSet,
    /// Bounding box in document space.
    pub rect: Rect,
    /// Parent node, if any (body has none).
    pub parent: Option<NodeId>,
    /// Link target (anchors and nav links).
    pub href: Option<String>,
    /// Marked for lazy loading (images).
    pub lazy: bool,
    /// Deferred image source (the `data-src` of the browser world).
    pub data_src: Option<String>,
    /// Live image source.
    pub src: Option<String>,
}

impl Node {
    /// Create a node of the given kind with empty everything.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: None,
            kind,
            classes: ClassSet::empty(),
            rect: Rect::default(),
            parent: None,
            href: None,
            lazy: false,
            data_src: None,
            src: None,
        }
    }

    /// Builder: set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: set the bounding rect.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Builder: set classes.
    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    /// Builder: set the link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Builder: set the parent.
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: mark as a lazy image with a deferred source.
    pub fn with_lazy_src(mut self, data_src: impl Into<String>) -> Self {
        self.lazy = true;
        self.data_src = Some(data_src.into());
        self
    }
}

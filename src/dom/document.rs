//! Document - flat node arena with id lookup.
//!
//! Manages the lifecycle of node indices:
//! - Append-only arena (the node set is captured once at page build)
//! - id -> index mapping for selector-style lookup
//! - Parent links for ancestry tests (outside-click detection)
//! - Class and geometry accessors used by every subsystem
//! - Runtime capability flags, decided by the host, read once at wiring
//!
//! The body node is created implicitly at index 0.

use std::collections::HashMap;

use crate::types::{ClassSet, NodeId, Rect};

use super::node::{Node, NodeKind};

/// Index of the implicit body node.
pub const BODY: NodeId = 0;

// =============================================================================
// Document
// =============================================================================

/// The engine's view of the host's render tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    id_to_index: HashMap<String, NodeId>,
    /// Host supports event-driven viewport-intersection observation.
    intersection_observer: bool,
    /// Host supports native lazy image loading.
    native_lazy: bool,
    /// Body scroll suppressed while the mobile menu is open.
    body_scroll_locked: bool,
}

impl Document {
    /// Create a document containing only the body node.
    ///
    /// Both capability flags default to supported; use the `without_*`
    /// builders to model a host lacking them.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Body)],
            id_to_index: HashMap::new(),
            intersection_observer: true,
            native_lazy: true,
            body_scroll_locked: false,
        }
    }

    /// Builder: model a host without intersection observation.
    pub fn without_intersection_observer(mut self) -> Self {
        self.intersection_observer = false;
        self
    }

    /// Builder: model a host without native lazy loading.
    pub fn without_native_lazy(mut self) -> Self {
        self.native_lazy = false;
        self
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// Whether the host offers an intersection observation primitive.
    pub fn supports_intersection_observer(&self) -> bool {
        self.intersection_observer
    }

    /// Whether the host loads lazy images natively.
    pub fn supports_native_lazy(&self) -> bool {
        self.native_lazy
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Append a node, registering its id if it has one.
    ///
    /// Returns the allocated index. A duplicate id silently shadows the
    /// earlier registration, matching last-write-wins lookup in the host.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let index = self.nodes.len();
        if let Some(id) = &node.id {
            self.id_to_index.insert(id.clone(), index);
        }
        self.nodes.push(node);
        index
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Look up a node index by id.
    pub fn get_index(&self, id: &str) -> Option<NodeId> {
        self.id_to_index.get(id).copied()
    }

    /// Borrow a node.
    pub fn node(&self, index: NodeId) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, index: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// All indices of nodes with the given kind, in document order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.kind == kind)
            .map(|(index, _)| index)
            .collect()
    }

    /// All indices of nodes carrying the given class, in document order.
    pub fn nodes_with_class(&self, class: ClassSet) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.classes.contains(class))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of nodes (including the body).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the body exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Add a class to a node. Unknown indices are a no-op.
    pub fn add_class(&mut self, index: NodeId, class: ClassSet) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.classes.insert(class);
        }
    }

    /// Remove a class from a node. Unknown indices are a no-op.
    pub fn remove_class(&mut self, index: NodeId, class: ClassSet) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.classes.remove(class);
        }
    }

    /// Toggle a class on a node. Returns the new state (false for unknown
    /// indices).
    pub fn toggle_class(&mut self, index: NodeId, class: ClassSet) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.classes.toggle(class);
                node.classes.contains(class)
            }
            None => false,
        }
    }

    /// Check whether a node carries a class.
    pub fn has_class(&self, index: NodeId, class: ClassSet) -> bool {
        self.nodes
            .get(index)
            .map(|node| node.classes.contains(class))
            .unwrap_or(false)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Bounding rect of a node (zero rect for unknown indices).
    pub fn rect(&self, index: NodeId) -> Rect {
        self.nodes
            .get(index)
            .map(|node| node.rect)
            .unwrap_or_default()
    }

    /// Widest right edge across all nodes (the scroll width of the body).
    pub fn content_width(&self) -> i32 {
        self.nodes
            .iter()
            .map(|node| node.rect.right())
            .max()
            .unwrap_or(0)
    }

    // =========================================================================
    // Ancestry
    // =========================================================================

    /// Whether `target` is `container` or a descendant of it.
    pub fn contains(&self, container: NodeId, target: NodeId) -> bool {
        let mut current = Some(target);
        while let Some(index) = current {
            if index == container {
                return true;
            }
            current = self.nodes.get(index).and_then(|node| node.parent);
        }
        false
    }

    // =========================================================================
    // Body Scroll Lock
    // =========================================================================

    /// Suppress or restore body scrolling (mobile menu open state).
    pub fn set_body_scroll_locked(&mut self, locked: bool) {
        self.body_scroll_locked = locked;
    }

    /// Whether body scrolling is currently suppressed.
    pub fn body_scroll_locked(&self) -> bool {
        self.body_scroll_locked
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

//! Lazy Module - deferred image activation.
//!
//! With native lazy loading, every image marked lazy gets its deferred
//! source promoted to the live source at load time. Marked images without
//! a deferred source are left untouched. Without native support, an inert
//! script node pointing at the lazysizes polyfill is appended instead -
//! no fetch happens here, the node is plain data for the host.

use tracing::debug;

use crate::dom::{Document, Node, NodeKind};

/// Polyfill source recorded on the fallback script node.
pub const LAZY_FALLBACK_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

/// Activate lazy images (or inject the fallback). Called once at load.
pub fn activate(doc: &mut Document) {
    if doc.supports_native_lazy() {
        for index in doc.nodes_of_kind(NodeKind::Image) {
            let Some(node) = doc.node_mut(index) else { continue };
            if !node.lazy {
                continue;
            }
            // No deferred source marker: leave the image alone.
            if let Some(data_src) = node.data_src.clone() {
                node.src = Some(data_src);
            }
        }
        return;
    }

    // Fallback host: one polyfill reference, never duplicated.
    let already_injected = doc.nodes_of_kind(NodeKind::Script).iter().any(|&index| {
        doc.node(index)
            .and_then(|node| node.src.as_deref())
            .is_some_and(|src| src == LAZY_FALLBACK_SRC)
    });
    if already_injected {
        return;
    }

    let mut script = Node::new(NodeKind::Script);
    script.src = Some(LAZY_FALLBACK_SRC.to_string());
    doc.insert(script);
    debug!(src = LAZY_FALLBACK_SRC, "lazy loading fallback injected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_promotes_deferred_source() {
        let mut doc = Document::new();
        let image = doc.insert(Node::new(NodeKind::Image).with_lazy_src("hero.webp"));

        activate(&mut doc);
        assert_eq!(doc.node(image).unwrap().src.as_deref(), Some("hero.webp"));
        assert!(doc.nodes_of_kind(NodeKind::Script).is_empty());
    }

    #[test]
    fn test_unmarked_and_markerless_images_untouched() {
        let mut doc = Document::new();
        let eager = doc.insert(Node::new(NodeKind::Image));
        let mut markerless = Node::new(NodeKind::Image);
        markerless.lazy = true; // lazy but no data_src
        let markerless = doc.insert(markerless);

        activate(&mut doc);
        assert_eq!(doc.node(eager).unwrap().src, None);
        assert_eq!(doc.node(markerless).unwrap().src, None);
    }

    #[test]
    fn test_fallback_injects_script_once() {
        let mut doc = Document::new().without_native_lazy();
        let image = doc.insert(Node::new(NodeKind::Image).with_lazy_src("hero.webp"));

        activate(&mut doc);
        activate(&mut doc);

        let scripts = doc.nodes_of_kind(NodeKind::Script);
        assert_eq!(scripts.len(), 1);
        assert_eq!(
            doc.node(scripts[0]).unwrap().src.as_deref(),
            Some(LAZY_FALLBACK_SRC)
        );
        // The image itself is not promoted on the fallback path.
        assert_eq!(doc.node(image).unwrap().src, None);
    }
}

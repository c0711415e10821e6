//! Structural fingerprints of layout trees.
//!
//! A fingerprint is a compact digest summarizing a node's own properties
//! and the aggregate of its children, used to detect change between render
//! passes without comparing property values. Fingerprints are computed by
//! the layout producer; callers keep the previous render's
//! [`TreeFingerprint`] and hand it to the differ on the next pass.

use serde::{Deserialize, Serialize};

/// Sentinel digest value meaning "not tracked".
///
/// A discarded digest forces conservative "always changed" treatment. Must
/// match the discard value used by the fingerprint producer.
pub const DISCARDED_FINGERPRINT: i64 = -1;

/// Structural fingerprint of a single layout node.
///
/// `children` is ordered and index-aligned with the node's ordered children
/// in the layout tree; its length doubles as the recorded child count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFingerprint {
    /// Tag identifying the node's structural kind.
    pub self_type: i32,
    /// Digest of the node's own non-child properties.
    pub self_props: i64,
    /// Aggregate digest over all children.
    pub child_nodes: i64,
    /// Fingerprints of the direct children, in child order.
    pub children: Vec<NodeFingerprint>,
}

impl NodeFingerprint {
    /// Create a childless fingerprint.
    pub fn new(self_type: i32, self_props: i64, child_nodes: i64) -> Self {
        Self {
            self_type,
            self_props,
            child_nodes,
            children: Vec::new(),
        }
    }

    /// Create a fingerprint with child fingerprints attached.
    pub fn with_children(
        self_type: i32,
        self_props: i64,
        child_nodes: i64,
        children: Vec<NodeFingerprint>,
    ) -> Self {
        Self {
            self_type,
            self_props,
            child_nodes,
            children,
        }
    }

    /// Number of direct children recorded at fingerprint-computation time.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the self-properties digest was not tracked.
    pub fn self_props_discarded(&self) -> bool {
        self.self_props == DISCARDED_FINGERPRINT
    }

    /// Returns `true` if the aggregate children digest was not tracked.
    pub fn child_nodes_discarded(&self) -> bool {
        self.child_nodes == DISCARDED_FINGERPRINT
    }
}

/// Fingerprint snapshot of a whole layout tree.
///
/// Structurally mirrors the layout tree it was computed from: one
/// [`NodeFingerprint`] per node, children in the same order. An absent root
/// means no fingerprint was recorded for the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFingerprint {
    /// Fingerprint of the root node, if one was recorded.
    pub root: Option<NodeFingerprint>,
}

impl TreeFingerprint {
    /// Create a snapshot with the given root fingerprint.
    pub fn new(root: NodeFingerprint) -> Self {
        Self { root: Some(root) }
    }

    /// Create a snapshot with no root fingerprint.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if a root fingerprint was recorded.
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// The root fingerprint, if any.
    pub fn root(&self) -> Option<&NodeFingerprint> {
        self.root.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_count_tracks_children() {
        let fp = NodeFingerprint::with_children(
            1,
            100,
            200,
            vec![NodeFingerprint::new(2, 1, 0), NodeFingerprint::new(3, 2, 0)],
        );
        assert_eq!(fp.child_count(), 2);
        assert_eq!(NodeFingerprint::new(1, 100, 0).child_count(), 0);
    }

    #[test]
    fn discarded_helpers() {
        let fp = NodeFingerprint::new(1, DISCARDED_FINGERPRINT, 42);
        assert!(fp.self_props_discarded());
        assert!(!fp.child_nodes_discarded());

        let fp = NodeFingerprint::new(1, 42, DISCARDED_FINGERPRINT);
        assert!(!fp.self_props_discarded());
        assert!(fp.child_nodes_discarded());
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = TreeFingerprint::empty();
        assert!(!tree.has_root());
        assert!(tree.root().is_none());
    }

    #[test]
    fn tree_with_root() {
        let tree = TreeFingerprint::new(NodeFingerprint::new(7, 1, 2));
        assert!(tree.has_root());
        assert_eq!(tree.root().unwrap().self_type, 7);
    }

    #[test]
    fn serde_roundtrip() {
        let tree = TreeFingerprint::new(NodeFingerprint::with_children(
            1,
            10,
            DISCARDED_FINGERPRINT,
            vec![NodeFingerprint::new(2, 3, 4)],
        ));
        let json = serde_json::to_string(&tree).unwrap();
        let parsed: TreeFingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, parsed);
    }
}

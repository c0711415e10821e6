//! Classification of a single node's change between two renders.
//!
//! Compares one previous node fingerprint against one current node
//! fingerprint and produces a [`NodeChangeType`] verdict. Digests are cheap
//! proxies for deep equality; a discarded digest is a deliberate signal
//! from the fingerprint producer that something was not tracked and must be
//! conservatively treated as changed.

use trellis_types::NodeFingerprint;

/// How a node changed relative to the previous render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeChangeType {
    /// Node and subtree are unchanged.
    NoChange,
    /// Only the node's own properties changed; children are unchanged.
    SelfOnly,
    /// The node and its whole subtree must be treated as changed.
    SelfAndAllChildren,
    /// The node changed and children need individual evaluation.
    SelfAndSomeChildren,
    /// The node itself is unchanged but some children changed.
    ChildrenOnly,
}

/// Classify one node's change. `curr` is `None` when no aligned current
/// fingerprint exists. First matching rule wins.
pub(crate) fn change_type(
    prev: &NodeFingerprint,
    curr: Option<&NodeFingerprint>,
) -> NodeChangeType {
    let Some(curr) = curr else {
        return NodeChangeType::SelfAndAllChildren;
    };
    if prev.self_type != curr.self_type {
        // If the structural kind changes, update everything.
        return NodeChangeType::SelfAndAllChildren;
    }
    if curr.self_props_discarded() && curr.child_nodes_discarded() {
        if curr.child_count() == 0 {
            // Self and children are discarded.
            return NodeChangeType::SelfAndAllChildren;
        }
        // Self is discarded, but child fingerprints exist at this level and
        // can be evaluated individually.
        return NodeChangeType::SelfAndSomeChildren;
    }
    if prev.child_count() != curr.child_count() {
        // An added or removed child always refreshes the whole subtree;
        // there is no reliable index alignment across insertions/removals.
        return NodeChangeType::SelfAndAllChildren;
    }
    let self_changed = curr.self_props_discarded() || prev.self_props != curr.self_props;
    let children_changed = curr.child_nodes_discarded() || prev.child_nodes != curr.child_nodes;
    match (self_changed, children_changed) {
        (true, true) => NodeChangeType::SelfAndSomeChildren,
        (true, false) => NodeChangeType::SelfOnly,
        (false, true) => NodeChangeType::ChildrenOnly,
        (false, false) => NodeChangeType::NoChange,
    }
}

/// Check whether two nodes represented by the given fingerprints are
/// equivalent (no change at the node or anywhere in its subtree digest).
pub fn are_nodes_equivalent(node_a: &NodeFingerprint, node_b: &NodeFingerprint) -> bool {
    change_type(node_a, Some(node_b)) == NodeChangeType::NoChange
}

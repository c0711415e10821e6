//! The diff walk: compare a previous fingerprint tree against a new layout.
//!
//! The walk visits nodes top-down, classifies each against the aligned
//! previous fingerprint, and accumulates changed nodes in emit-then-descend
//! order, so a changed node always precedes its changed descendants.
//!
//! Structural inconsistency between a layout and its fingerprint tree
//! (child counts that do not line up) short-circuits the walk; [`diff`]
//! then returns `None` rather than a diff with missing coverage.

use tracing::debug;

use trellis_types::{ArcLayoutElement, Layout, LayoutElement, NodeFingerprint, TreeFingerprint};

use crate::change::{change_type, NodeChangeType};
use crate::error::{InconsistentFingerprint, WalkResult};
use crate::node::{LayoutDiff, NodeElement, TreeNode, TreeNodeWithChange};
use crate::pos_id::{create_node_pos_id, FIRST_CHILD_INDEX, ROOT_NODE_ID};

/// Compute the diff from a previous layout tree to a new one.
///
/// `prev_fingerprint` is the fingerprint snapshot of the previously
/// rendered tree; `layout` is the new layout together with its own
/// fingerprint tree.
///
/// Returns `None` if the diff cannot be computed (missing root fingerprint
/// on either side, or layout/fingerprint structure out of sync), in which
/// case the whole layout should be refreshed.
pub fn diff<'a>(prev_fingerprint: &TreeFingerprint, layout: &'a Layout) -> Option<LayoutDiff<'a>> {
    let Some(curr_root_fingerprint) = layout.fingerprint.root() else {
        debug!("new layout carries no root fingerprint, no diff available");
        return None;
    };
    let Some(prev_root_fingerprint) = prev_fingerprint.root() else {
        debug!("previous fingerprint tree has no root, no diff available");
        return None;
    };

    let root_node =
        TreeNode::of_linear(&layout.root, curr_root_fingerprint, ROOT_NODE_ID.to_string());

    let mut changed_nodes = Vec::new();
    match add_changed_nodes(prev_root_fingerprint, root_node, &mut changed_nodes) {
        Ok(()) => {
            debug!(changed = changed_nodes.len(), "computed layout diff");
            Some(LayoutDiff::new(changed_nodes))
        }
        Err(InconsistentFingerprint) => {
            debug!("layout and fingerprint trees are inconsistent, no diff available");
            None
        }
    }
}

fn add_changed_nodes<'a>(
    prev_fingerprint: &NodeFingerprint,
    node: TreeNode<'a>,
    changed_nodes: &mut Vec<TreeNodeWithChange<'a>>,
) -> WalkResult<()> {
    match change_type(prev_fingerprint, Some(node.fingerprint)) {
        NodeChangeType::SelfOnly => {
            changed_nodes.push(node.with_change(true));
        }
        NodeChangeType::SelfAndAllChildren => {
            // The whole subtree is the unit of change; descendants are
            // covered by this entry.
            changed_nodes.push(node.with_change(false));
        }
        NodeChangeType::SelfAndSomeChildren => {
            let children = child_nodes(&node)?;
            changed_nodes.push(node.with_change(true));
            add_changed_child_nodes(prev_fingerprint, children, changed_nodes)?;
        }
        NodeChangeType::ChildrenOnly => {
            let children = child_nodes(&node)?;
            add_changed_child_nodes(prev_fingerprint, children, changed_nodes)?;
        }
        NodeChangeType::NoChange => {}
    }
    Ok(())
}

fn add_changed_child_nodes<'a>(
    prev_fingerprint: &NodeFingerprint,
    children: Vec<TreeNode<'a>>,
    changed_nodes: &mut Vec<TreeNodeWithChange<'a>>,
) -> WalkResult<()> {
    if children.is_empty() {
        return Ok(());
    }
    // Classification compares the fingerprints' recorded counts, but the
    // both-digests-discarded path reaches here without that guarantee.
    if children.len() != prev_fingerprint.child_count() {
        return Err(InconsistentFingerprint);
    }
    for (child, prev_child_fingerprint) in children.into_iter().zip(&prev_fingerprint.children) {
        add_changed_nodes(prev_child_fingerprint, child, changed_nodes)?;
    }
    Ok(())
}

/// The ordered children of a node, paired with their fingerprints and
/// addressed relative to the node's position id.
///
/// Only linear elements can have diffable children; radial child elements
/// (including the adapter) are leaves to the differ.
fn child_nodes<'a>(node: &TreeNode<'a>) -> WalkResult<Vec<TreeNode<'a>>> {
    let NodeElement::Linear(element) = node.element else {
        return Ok(Vec::new());
    };
    if let Some(contents) = element.linear_contents() {
        return linear_child_nodes(contents, &node.fingerprint.children, &node.pos_id);
    }
    if let Some(contents) = element.radial_contents() {
        return radial_child_nodes(contents, &node.fingerprint.children, &node.pos_id);
    }
    Ok(Vec::new())
}

fn linear_child_nodes<'a>(
    child_elements: &'a [LayoutElement],
    child_fingerprints: &'a [NodeFingerprint],
    parent_pos_id: &str,
) -> WalkResult<Vec<TreeNode<'a>>> {
    if child_elements.len() != child_fingerprints.len() {
        return Err(InconsistentFingerprint);
    }
    Ok(child_elements
        .iter()
        .zip(child_fingerprints)
        .enumerate()
        .map(|(i, (element, fingerprint))| {
            let child_pos_id = create_node_pos_id(parent_pos_id, FIRST_CHILD_INDEX + i);
            TreeNode::of_linear(element, fingerprint, child_pos_id)
        })
        .collect())
}

fn radial_child_nodes<'a>(
    child_elements: &'a [ArcLayoutElement],
    child_fingerprints: &'a [NodeFingerprint],
    parent_pos_id: &str,
) -> WalkResult<Vec<TreeNode<'a>>> {
    if child_elements.len() != child_fingerprints.len() {
        return Err(InconsistentFingerprint);
    }
    Ok(child_elements
        .iter()
        .zip(child_fingerprints)
        .enumerate()
        .map(|(i, (element, fingerprint))| {
            let child_pos_id = create_node_pos_id(parent_pos_id, FIRST_CHILD_INDEX + i);
            TreeNode::of_radial(element, fingerprint, child_pos_id)
        })
        .collect())
}

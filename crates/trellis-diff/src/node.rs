//! Ephemeral tree-node model used by the diff walk, and the diff output.
//!
//! [`TreeNode`]s are built on demand while walking the layout and live only
//! for one diff computation. The public output types ([`LayoutDiff`],
//! [`TreeNodeWithChange`]) borrow from the layout passed to
//! [`diff`](crate::differ::diff).

use trellis_types::{ArcLayoutElement, LayoutElement, NodeFingerprint};

/// Reference to the concrete element behind a tree node: exactly one of the
/// two element kinds.
#[derive(Clone, Copy, Debug)]
pub enum NodeElement<'a> {
    /// A linear-tree element (containers and leaves).
    Linear(&'a LayoutElement),
    /// A radial child element.
    Radial(&'a ArcLayoutElement),
}

/// A node in a layout tree, paired with its fingerprint and position id.
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<'a> {
    pub(crate) element: NodeElement<'a>,
    pub(crate) fingerprint: &'a NodeFingerprint,
    pub(crate) pos_id: String,
}

impl<'a> TreeNode<'a> {
    pub(crate) fn of_linear(
        element: &'a LayoutElement,
        fingerprint: &'a NodeFingerprint,
        pos_id: String,
    ) -> Self {
        Self {
            element: NodeElement::Linear(element),
            fingerprint,
            pos_id,
        }
    }

    pub(crate) fn of_radial(
        element: &'a ArcLayoutElement,
        fingerprint: &'a NodeFingerprint,
        pos_id: String,
    ) -> Self {
        Self {
            element: NodeElement::Radial(element),
            fingerprint,
            pos_id,
        }
    }

    pub(crate) fn with_change(self, is_self_only_change: bool) -> TreeNodeWithChange<'a> {
        TreeNodeWithChange {
            node: self,
            is_self_only_change,
        }
    }
}

/// A node in a layout tree that changed compared to the previous render.
#[derive(Clone, Debug)]
pub struct TreeNodeWithChange<'a> {
    node: TreeNode<'a>,
    is_self_only_change: bool,
}

impl<'a> TreeNodeWithChange<'a> {
    /// The concrete element this node represents.
    pub fn element(&self) -> NodeElement<'a> {
        self.node.element
    }

    /// The linear element behind this node, or `None` if the node is for a
    /// radial child element.
    pub fn linear_element(&self) -> Option<&'a LayoutElement> {
        match self.node.element {
            NodeElement::Linear(element) => Some(element),
            NodeElement::Radial(_) => None,
        }
    }

    /// The radial child element behind this node, or `None` if the node is
    /// for a linear element.
    pub fn radial_element(&self) -> Option<&'a ArcLayoutElement> {
        match self.node.element {
            NodeElement::Linear(_) => None,
            NodeElement::Radial(element) => Some(element),
        }
    }

    /// The fingerprint for this node.
    pub fn fingerprint(&self) -> &'a NodeFingerprint {
        self.node.fingerprint
    }

    /// Position id of this node. Only comparable against ids produced by
    /// [`create_node_pos_id`](crate::pos_id::create_node_pos_id).
    pub fn pos_id(&self) -> &str {
        &self.node.pos_id
    }

    /// Returns `true` if the change affects this node only. Otherwise the
    /// change covers the node and all of its descendants.
    pub fn is_self_only_change(&self) -> bool {
        self.is_self_only_change
    }
}

/// The result of diffing two layout trees: the ordered list of changed
/// nodes.
#[derive(Clone, Debug, Default)]
pub struct LayoutDiff<'a> {
    changed_nodes: Vec<TreeNodeWithChange<'a>>,
}

impl<'a> LayoutDiff<'a> {
    pub(crate) fn new(changed_nodes: Vec<TreeNodeWithChange<'a>>) -> Self {
        Self { changed_nodes }
    }

    /// The changed nodes, a parent always before its changed descendants.
    /// Callers may rely on this to reconcile top-down.
    pub fn changed_nodes(&self) -> &[TreeNodeWithChange<'a>] {
        &self.changed_nodes
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changed_nodes.is_empty()
    }

    /// Number of changed nodes.
    pub fn len(&self) -> usize {
        self.changed_nodes.len()
    }
}

//! Layout differ for Trellis.
//!
//! Compares the fingerprint tree of a previously rendered layout against a
//! new layout (with its own fingerprint tree) and produces the ordered list
//! of nodes that changed, so the renderer can reconstruct only those nodes
//! and keep the rest of the live output.
//!
//! The differ never returns a partial answer: any structural inconsistency
//! between a layout tree and its fingerprint tree makes [`diff`] return
//! `None`, which callers must treat as "rebuild everything".
//!
//! # Key Types
//!
//! - [`diff`] -- Compute the diff between a previous fingerprint tree and a new layout
//! - [`LayoutDiff`] / [`TreeNodeWithChange`] -- The ordered change list and its entries
//! - [`pos_id`] -- Position-based node addressing, stable across renders
//! - [`are_nodes_equivalent`] -- Fingerprint-level equivalence check

pub mod change;
pub mod differ;
mod error;
pub mod node;
pub mod pos_id;

pub use change::are_nodes_equivalent;
pub use differ::diff;
pub use node::{LayoutDiff, NodeElement, TreeNodeWithChange};
pub use pos_id::{
    create_node_pos_id, is_descendant_of, parent_node_pos_id, FIRST_CHILD_INDEX, NODE_ID_PREFIX,
    ROOT_NODE_ID,
};

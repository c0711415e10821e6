//! Position-based node addressing.
//!
//! Every node in a layout tree gets a dot-separated string id derived from
//! its path: the root is [`ROOT_NODE_ID`], and the id of a child is its
//! parent's id plus `.` plus the 1-based child number. Ids are stable across
//! renders as long as child ordering within each parent is stable, which
//! lets the renderer tag live views with them and find the view to update
//! for each diff entry.

/// Prefix for all node ids generated by this module.
pub const NODE_ID_PREFIX: &str = "tL";

/// Position id of the root node: the prefix plus the first child number.
pub const ROOT_NODE_ID: &str = "tL1";

/// Index of the first child under a parent. [`create_node_pos_id`] is called
/// starting from this value, incremented by one per child.
pub const FIRST_CHILD_INDEX: usize = 0;

/// Separator between path segments of a position id.
const SEPARATOR: char = '.';

/// Create the position id for a child node.
///
/// `child_index` is 0-based ([`FIRST_CHILD_INDEX`]); the emitted segment is
/// 1-based.
pub fn create_node_pos_id(parent_pos_id: &str, child_index: usize) -> String {
    format!("{parent_pos_id}{SEPARATOR}{}", child_index + 1)
}

/// Extract the position id of a node's parent.
///
/// Returns `None` if `pos_id` does not carry the [`NODE_ID_PREFIX`] or has
/// no separator past the prefix (i.e. it is the root).
pub fn parent_node_pos_id(pos_id: &str) -> Option<&str> {
    if !pos_id.starts_with(NODE_ID_PREFIX) {
        return None;
    }
    let separator_idx = pos_id.rfind(SEPARATOR)?;
    if separator_idx <= NODE_ID_PREFIX.len() {
        return None;
    }
    Some(&pos_id[..separator_idx])
}

/// Returns `true` if `pos_id` addresses a strict descendant of the node at
/// `ancestor_pos_id`.
///
/// The next byte after the shared prefix must be the separator, so a
/// sibling id sharing a numeric prefix (`…10` vs `…1`) never matches.
pub fn is_descendant_of(pos_id: &str, ancestor_pos_id: &str) -> bool {
    pos_id.len() > ancestor_pos_id.len() + 1
        && pos_id.starts_with(ancestor_pos_id)
        && pos_id.as_bytes()[ancestor_pos_id.len()] == SEPARATOR as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn root_id_is_prefix_plus_first_child_number() {
        assert_eq!(ROOT_NODE_ID, format!("{NODE_ID_PREFIX}{}", FIRST_CHILD_INDEX + 1));
    }

    #[test]
    fn child_ids_are_one_based() {
        assert_eq!(create_node_pos_id(ROOT_NODE_ID, 0), "tL1.1");
        assert_eq!(create_node_pos_id("tL1.1", 2), "tL1.1.3");
    }

    #[test]
    fn parent_of_child_is_parent() {
        assert_eq!(parent_node_pos_id("tL1.1.3"), Some("tL1.1"));
        assert_eq!(parent_node_pos_id("tL1.4"), Some("tL1"));
    }

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent_node_pos_id(ROOT_NODE_ID), None);
    }

    #[test]
    fn foreign_ids_have_no_parent() {
        assert_eq!(parent_node_pos_id("xx1.2"), None);
        assert_eq!(parent_node_pos_id(""), None);
    }

    #[test]
    fn descendants_at_any_depth() {
        assert!(is_descendant_of("tL1.2", "tL1"));
        assert!(is_descendant_of("tL1.2.5.1", "tL1"));
        assert!(is_descendant_of("tL1.2.5.1", "tL1.2.5"));
    }

    #[test]
    fn node_is_not_its_own_descendant() {
        assert!(!is_descendant_of("tL1.2", "tL1.2"));
    }

    #[test]
    fn sibling_with_shared_numeric_prefix_is_not_descendant() {
        // tL1.10 is the tenth child of tL1, not under tL1.1.
        assert!(!is_descendant_of("tL1.10", "tL1.1"));
        assert!(!is_descendant_of("tL1.12.3", "tL1.1"));
    }

    #[test]
    fn unrelated_subtrees_do_not_match() {
        assert!(!is_descendant_of("tL1.2.1", "tL1.3"));
        assert!(!is_descendant_of("tL1", "tL1.2"));
    }

    proptest! {
        #[test]
        fn create_then_parent_roundtrips(
            depth in 0usize..6,
            segments in proptest::collection::vec(0usize..50, 6),
            child_index in 0usize..100,
        ) {
            let mut parent = ROOT_NODE_ID.to_string();
            for segment in segments.iter().take(depth) {
                parent = create_node_pos_id(&parent, *segment);
            }
            let child = create_node_pos_id(&parent, child_index);
            prop_assert_eq!(parent_node_pos_id(&child), Some(parent.as_str()));
        }

        #[test]
        fn child_is_descendant_of_parent_but_not_itself(
            depth in 0usize..6,
            segments in proptest::collection::vec(0usize..50, 6),
            child_index in 0usize..100,
        ) {
            let mut parent = ROOT_NODE_ID.to_string();
            for segment in segments.iter().take(depth) {
                parent = create_node_pos_id(&parent, *segment);
            }
            let child = create_node_pos_id(&parent, child_index);
            prop_assert!(is_descendant_of(&child, &parent));
            prop_assert!(!is_descendant_of(&parent, &child));
            prop_assert!(!is_descendant_of(&parent, &parent));
            prop_assert!(!is_descendant_of(&child, &child));
        }
    }
}

//! The concrete layout tree model.
//!
//! A layout is a tree of [`LayoutElement`]s. Linear containers (box, column,
//! row) hold ordered [`LayoutElement`] children; the radial container (arc)
//! holds ordered [`ArcLayoutElement`] children, a distinct element kind. All
//! other kinds are leaves.
//!
//! Leaf kinds carry representative properties only. Property modeling lives
//! in the layout producer; the differ compares digests, not property values.

use serde::{Deserialize, Serialize};

use crate::fingerprint::TreeFingerprint;

/// A node in the concrete layout tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayoutElement {
    /// Stacking container. Children are drawn on top of each other.
    Box { contents: Vec<LayoutElement> },
    /// Vertical linear container.
    Column { contents: Vec<LayoutElement> },
    /// Horizontal linear container.
    Row { contents: Vec<LayoutElement> },
    /// Radial container. Children are a different element kind and are laid
    /// out along an arc.
    Arc { contents: Vec<ArcLayoutElement> },
    /// Empty space of a fixed size.
    Spacer { width_dp: u32, height_dp: u32 },
    /// A run of text.
    Text { text: String },
    /// An image referenced by resource id.
    Image { resource_id: String },
}

impl LayoutElement {
    /// The ordered children of a linear container (box, column, row), or
    /// `None` for every other kind.
    pub fn linear_contents(&self) -> Option<&[LayoutElement]> {
        match self {
            Self::Box { contents } | Self::Column { contents } | Self::Row { contents } => {
                Some(contents)
            }
            _ => None,
        }
    }

    /// The ordered children of the radial container, or `None` for every
    /// other kind.
    pub fn radial_contents(&self) -> Option<&[ArcLayoutElement]> {
        match self {
            Self::Arc { contents } => Some(contents),
            _ => None,
        }
    }

    /// A short name for the element kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "Box",
            Self::Column { .. } => "Column",
            Self::Row { .. } => "Row",
            Self::Arc { .. } => "Arc",
            Self::Spacer { .. } => "Spacer",
            Self::Text { .. } => "Text",
            Self::Image { .. } => "Image",
        }
    }
}

/// A child of the radial (arc) container.
///
/// Arc children are leaves to the differ: even [`ArcAdapter`], which wraps a
/// linear element, is treated as an opaque unit and never descended into.
///
/// [`ArcAdapter`]: ArcLayoutElement::ArcAdapter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArcLayoutElement {
    /// Text following the arc's curve.
    ArcText { text: String },
    /// A curved line segment.
    ArcLine { length_degrees: f32, thickness_dp: f32 },
    /// Empty space along the arc.
    ArcSpacer { length_degrees: f32 },
    /// A linear element rendered inside the arc.
    ArcAdapter { content: Box<LayoutElement> },
}

impl ArcLayoutElement {
    /// A short name for the element kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ArcText { .. } => "ArcText",
            Self::ArcLine { .. } => "ArcLine",
            Self::ArcSpacer { .. } => "ArcSpacer",
            Self::ArcAdapter { .. } => "ArcAdapter",
        }
    }
}

/// A full layout: the root element plus the fingerprint tree computed from
/// it by the layout producer.
///
/// The fingerprint tree structurally mirrors the element tree, one
/// fingerprint per node in the same order. The differ trusts this except
/// where it explicitly checks child counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// The root element.
    pub root: LayoutElement,
    /// Fingerprint tree computed from `root`.
    pub fingerprint: TreeFingerprint,
}

impl Layout {
    /// Create a layout from a root element and its fingerprint tree.
    pub fn new(root: LayoutElement, fingerprint: TreeFingerprint) -> Self {
        Self { root, fingerprint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::NodeFingerprint;

    fn text(s: &str) -> LayoutElement {
        LayoutElement::Text { text: s.into() }
    }

    #[test]
    fn linear_contents_for_linear_containers() {
        let children = vec![text("a"), text("b")];
        for container in [
            LayoutElement::Box { contents: children.clone() },
            LayoutElement::Column { contents: children.clone() },
            LayoutElement::Row { contents: children.clone() },
        ] {
            let contents = container.linear_contents().unwrap();
            assert_eq!(contents.len(), 2);
        }
    }

    #[test]
    fn linear_contents_none_for_arc_and_leaves() {
        assert!(LayoutElement::Arc { contents: vec![] }.linear_contents().is_none());
        assert!(text("x").linear_contents().is_none());
        assert!(LayoutElement::Spacer { width_dp: 4, height_dp: 4 }
            .linear_contents()
            .is_none());
    }

    #[test]
    fn radial_contents_only_for_arc() {
        let arc = LayoutElement::Arc {
            contents: vec![ArcLayoutElement::ArcText { text: "12:00".into() }],
        };
        assert_eq!(arc.radial_contents().unwrap().len(), 1);
        assert!(LayoutElement::Box { contents: vec![] }.radial_contents().is_none());
        assert!(text("x").radial_contents().is_none());
    }

    #[test]
    fn kind_names() {
        assert_eq!(LayoutElement::Row { contents: vec![] }.kind_name(), "Row");
        assert_eq!(
            ArcLayoutElement::ArcAdapter { content: Box::new(text("inner")) }.kind_name(),
            "ArcAdapter",
        );
    }

    #[test]
    fn serde_roundtrip() {
        let layout = Layout::new(
            LayoutElement::Column {
                contents: vec![
                    text("hello"),
                    LayoutElement::Arc {
                        contents: vec![ArcLayoutElement::ArcSpacer { length_degrees: 15.0 }],
                    },
                ],
            },
            TreeFingerprint::new(NodeFingerprint::new(2, 10, 20)),
        );

        let json = serde_json::to_string(&layout).unwrap();
        let parsed: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, parsed);
    }
}

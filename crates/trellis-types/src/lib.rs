//! Foundation types for Trellis.
//!
//! This crate provides the concrete layout element model and the structural
//! fingerprint model shared by the rest of the workspace. Fingerprints are
//! produced by the layout pipeline at render time; this crate only defines
//! their shape.
//!
//! # Key Types
//!
//! - [`LayoutElement`] / [`ArcLayoutElement`] -- The concrete layout tree (linear
//!   containers, the radial container, and leaf kinds)
//! - [`Layout`] -- A root element paired with the fingerprint tree computed from it
//! - [`NodeFingerprint`] / [`TreeFingerprint`] -- Per-node structural digests and
//!   the whole-tree snapshot wrapper

pub mod element;
pub mod fingerprint;

pub use element::{ArcLayoutElement, Layout, LayoutElement};
pub use fingerprint::{NodeFingerprint, TreeFingerprint, DISCARDED_FINGERPRINT};

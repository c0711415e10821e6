//! Error types for the diff crate.

use thiserror::Error;

/// Internal signal that the layout tree and a fingerprint tree disagree on
/// structure (child counts do not line up).
///
/// Threaded as a `Result` through the recursive walk; the first occurrence
/// short-circuits the whole computation. It never crosses the public API:
/// [`diff`](crate::differ::diff) collapses it to `None`, since the only
/// actionable response from the caller is a full rebuild.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("layout tree and fingerprint tree are structurally inconsistent")]
pub(crate) struct InconsistentFingerprint;

/// Convenience alias for the recursive walk.
pub(crate) type WalkResult<T> = Result<T, InconsistentFingerprint>;

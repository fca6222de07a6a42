//! Failure kinds for wall alignment.
//!
//! None of these are hard failures: the caller logs (or ignores) them and
//! the item is simply left where it was dropped. They are typed so tests
//! can assert on the kind without coupling to message text.

use thiserror::Error;

/// Reasons a wall-alignment request was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlignError {
    /// The item's shape does not expose box half-extents.
    #[error("shape does not expose box half-extents")]
    UnsupportedShape,

    /// No wall overlaps the drop target area.
    #[error("no wall found near the drop target")]
    NoContact,

    /// A wall overlapped the target but the ray toward it missed.
    #[error("raycast toward the nearest wall missed")]
    RaycastMiss,

    /// The contact normal is parallel to the up axis; there is no wall
    /// tangent to align with.
    #[error("contact normal is parallel to the up axis")]
    DegenerateNormal,
}

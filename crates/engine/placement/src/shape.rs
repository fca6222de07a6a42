//! Collision shapes owned by draggable items.

use glam::Vec3;

/// Shape of a draggable item, fixed for the item's lifetime.
///
/// Movement clamping and wall alignment need axis-aligned half-extents in
/// the item's local frame. Shapes that cannot provide them degrade
/// gracefully: such items are dragged without wall clamping and are never
/// snapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemShape {
    /// Box with local half-extents (all components positive).
    Box { half_extents: Vec3 },
    /// Arbitrary mesh with no box half-extents available.
    Mesh,
}

impl ItemShape {
    /// Local half-extents, if this shape exposes them.
    pub fn half_extents(&self) -> Option<Vec3> {
        match self {
            ItemShape::Box { half_extents } => Some(*half_extents),
            ItemShape::Mesh => None,
        }
    }
}

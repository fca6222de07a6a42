//! Drag-and-place interaction core for box-shaped items in a walled scene.
//!
//! The crate implements constrained drag-and-place for rigid items moving on
//! a horizontal plane: a pointer ray is projected onto the drag plane, the
//! resulting move is clipped per-axis against wall geometry so items slide
//! along walls instead of sticking to them, and on release an item can be
//! snapped into a wall-facing orientation through a fixed-duration rotation.
//!
//! The host environment supplies pointer rays, a tick driver, and the scene
//! geometry; everything here is single-threaded and side-effect free apart
//! from the poses it is asked to mutate.

mod align;
mod drag;
mod error;
mod probe;
mod ray;
mod scene;
mod shape;
mod solver;

pub use align::{
    classify_face, resolve_alignment, HitFace, RotationTransition, ALIGN_DURATION,
    WALL_PROBE_RANGE,
};
pub use drag::{DragState, Draggable};
pub use error::AlignError;
pub use probe::{GeometryProbe, RayHit};
pub use ray::{DragPlane, PointerRay};
pub use scene::{ObstacleId, SceneIndex, WALL_GROUP};
pub use shape::ItemShape;
pub use solver::resolve_planar;

// Re-export the interaction-group type used for obstacle filters.
pub use rapier3d::geometry::Group;

// Re-export glam for convenience
pub use glam;

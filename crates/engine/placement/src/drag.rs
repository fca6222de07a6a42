//! Per-item drag session and pose state.
//!
//! A [`Draggable`] owns an item's pose, its shape, and the two pieces of
//! transient interaction state: the active drag session (plane + grab
//! offset) and any in-flight alignment rotation. All mutation happens
//! through the tick-driven methods below; the host scheduler calls
//! [`Draggable::tick`] once per frame and the selection layer feeds in
//! pointer events. Out-of-order events are tolerated: dragging or ending a
//! drag on an idle item is a no-op.

use glam::{Quat, Vec3};
use rapier3d::geometry::Group;
use tracing::{debug, trace};

use crate::align::{self, RotationTransition, ALIGN_DURATION};
use crate::error::AlignError;
use crate::probe::GeometryProbe;
use crate::ray::{DragPlane, PointerRay};
use crate::shape::ItemShape;
use crate::solver;

/// Drag session state. At most one session is active per item; the
/// selection layer guarantees at most one is active process-wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        plane: DragPlane,
        grab_offset: Vec3,
    },
}

/// A placeable item: pose, shape, and interaction state.
pub struct Draggable {
    pub position: Vec3,
    pub rotation: Quat,
    shape: ItemShape,
    wall_filter: Group,
    state: DragState,
    /// Last intended (unclamped) drop target, kept across `end_drag` so
    /// alignment can act on where the user pushed, not where the item
    /// stopped.
    drop_target: Option<Vec3>,
    transition: Option<RotationTransition>,
}

impl Draggable {
    pub fn new(position: Vec3, rotation: Quat, shape: ItemShape, wall_filter: Group) -> Self {
        Self {
            position,
            rotation,
            shape,
            wall_filter,
            state: DragState::Idle,
            drop_target: None,
            transition: None,
        }
    }

    pub fn shape(&self) -> &ItemShape {
        &self.shape
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn is_rotating(&self) -> bool {
        self.transition.is_some()
    }

    /// Last intended drop target recorded during a drag, if any.
    pub fn drop_target(&self) -> Option<Vec3> {
        self.drop_target
    }

    /// Start a drag at the world point where the item was grabbed.
    ///
    /// The drag plane is fixed at the grab height and the offset between
    /// the item's origin and the grab point is preserved so the item does
    /// not jump under the cursor. Calling this mid-drag re-initializes the
    /// session (last call wins), and any in-flight alignment rotation is
    /// superseded.
    pub fn begin_drag(&mut self, grab_point: Vec3) {
        if self.transition.take().is_some() {
            debug!("new drag supersedes in-flight alignment rotation");
        }
        self.state = DragState::Dragging {
            plane: DragPlane::at_height(grab_point.y),
            grab_offset: self.position - grab_point,
        };
    }

    /// Advance the drag one tick from a pointer ray.
    ///
    /// Projects the ray onto the drag plane, applies the grab offset with
    /// the vertical component pinned to the item's current height, records
    /// the unclamped target, and moves the item as far toward it as the
    /// walls allow. No-op while idle or when the ray misses the plane.
    pub fn drag(&mut self, ray: &PointerRay, probe: &dyn GeometryProbe) {
        let DragState::Dragging { plane, grab_offset } = self.state else {
            return;
        };
        let Some(plane_hit) = plane.intersect(ray) else {
            return;
        };

        let target = plane_hit + grab_offset;
        let desired = Vec3::new(target.x, self.position.y, target.z);
        self.drop_target = Some(desired);

        match self.shape.half_extents() {
            Some(half_extents) => {
                self.position = solver::resolve_planar(
                    self.position,
                    desired,
                    half_extents,
                    self.rotation,
                    probe,
                    self.wall_filter,
                );
            }
            None => {
                // No box extents to sweep with; the item follows the
                // pointer unclamped.
                trace!("shape has no half-extents, applying raw drag target");
                self.position = desired;
            }
        }
    }

    /// End the drag session. Idempotent; does not trigger alignment.
    pub fn end_drag(&mut self) {
        self.state = DragState::Idle;
    }

    /// Snap toward the nearest wall at the last intended drop target.
    ///
    /// Opt-in: callers decide whether releasing a drag aligns the item.
    /// On success a rotation transition is started (superseding any
    /// previous one); on failure the item is left exactly as placed.
    pub fn align_to_wall(&mut self, probe: &dyn GeometryProbe) -> Result<(), AlignError> {
        let half_extents = self
            .shape
            .half_extents()
            .ok_or(AlignError::UnsupportedShape)?;
        let target_position = self.drop_target.unwrap_or(self.position);

        let target_rotation = align::resolve_alignment(
            self.position,
            self.rotation,
            target_position,
            half_extents,
            probe,
            self.wall_filter,
        )?;

        self.transition = Some(RotationTransition::new(
            self.rotation,
            target_rotation,
            ALIGN_DURATION,
        ));
        Ok(())
    }

    /// Advance the in-flight rotation transition, if any, by `dt`.
    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.rotation = transition.advance(dt);
            if transition.finished() {
                self.transition = None;
            }
        }
    }
}

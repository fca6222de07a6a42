//! Wall-contact detection and orientation snapping.
//!
//! After a drag ends, the resolver inspects the last intended (unclamped)
//! drop target. If a wall overlaps it, the item is rotated so its front
//! lines up with the wall: the contact normal is classified against the
//! item's local frame to decide which face struck the wall, a wall-tangent
//! orientation is built from the normal, and a fixed-duration slerp carries
//! the item there. Every failure path is recoverable; the item just stays
//! as placed.

use glam::{Mat3, Quat, Vec3};
use rapier3d::geometry::Group;
use tracing::{info, warn};

use crate::error::AlignError;
use crate::probe::GeometryProbe;

/// Maximum distance of the contact-normal raycast toward the wall.
pub const WALL_PROBE_RANGE: f32 = 10.0;

/// Duration of the alignment rotation, in seconds.
pub const ALIGN_DURATION: f32 = 0.5;

/// Local face of the item that struck the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFace {
    /// Local +Z face.
    Front,
    /// Local -Z face.
    Back,
    /// Local -X face.
    Left,
    /// Local +X face.
    Right,
}

impl HitFace {
    /// Yaw applied on top of the wall-tangent orientation so the item's
    /// front ends up consistent regardless of which face struck the wall.
    pub fn yaw_correction(self) -> f32 {
        match self {
            HitFace::Front | HitFace::Left => 0.0,
            HitFace::Back | HitFace::Right => std::f32::consts::PI,
        }
    }
}

/// Classify which local face is nearest the wall from the contact normal
/// expressed in the item's local frame.
pub fn classify_face(local_normal: Vec3) -> HitFace {
    if local_normal.z.abs() > local_normal.x.abs() {
        if local_normal.z < 0.0 {
            HitFace::Front
        } else {
            HitFace::Back
        }
    } else if local_normal.x > 0.0 {
        HitFace::Right
    } else {
        HitFace::Left
    }
}

/// Orientation whose local +Z points along `forward`, with `up` as the
/// vertical reference. Both inputs must be non-parallel and non-zero.
fn look_along(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize();
    let right = up.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Compute the snap orientation for an item dropped at `target`.
///
/// `position`/`rotation` are the item's current pose, `target` the intended
/// (pre-clamp) drop position from the drag. Returns the orientation the
/// item should rotate toward, or the reason alignment was skipped.
pub fn resolve_alignment(
    position: Vec3,
    rotation: Quat,
    target: Vec3,
    half_extents: Vec3,
    probe: &dyn GeometryProbe,
    filter: Group,
) -> Result<Quat, AlignError> {
    let overlaps = probe.overlapping(target, half_extents, rotation, filter);
    if overlaps.is_empty() {
        info!(?target, "no wall near drop target, skipping alignment");
        return Err(AlignError::NoContact);
    }

    // Nearest wall by center distance; overlap query order is not stable.
    let (_, wall_center) = overlaps
        .iter()
        .filter_map(|&id| probe.obstacle_center(id).map(|center| (id, center)))
        .min_by(|a, b| {
            a.1.distance_squared(position)
                .total_cmp(&b.1.distance_squared(position))
        })
        .ok_or(AlignError::NoContact)?;

    let to_wall = wall_center - position;
    let Some(hit) = probe.raycast_nearest(position, to_wall, WALL_PROBE_RANGE, filter) else {
        warn!(?wall_center, "raycast to wall failed, cannot align");
        return Err(AlignError::RaycastMiss);
    };

    let local_normal = rotation.inverse() * hit.normal;
    let face = classify_face(local_normal);

    // Tangent along the wall surface, perpendicular to both the normal and
    // the up axis.
    let Some(wall_tangent) = Vec3::Y.cross(hit.normal).try_normalize() else {
        warn!(normal = ?hit.normal, "contact normal is vertical, cannot align");
        return Err(AlignError::DegenerateNormal);
    };

    let base = look_along(wall_tangent, Vec3::Y);
    Ok(base * Quat::from_rotation_y(face.yaw_correction()))
}

/// In-flight smoothing rotation, advanced once per tick.
///
/// The transition is a plain resumable value: no real time is read, so it
/// can be driven (and cancelled) deterministically by the scheduler that
/// owns the item.
#[derive(Debug, Clone, Copy)]
pub struct RotationTransition {
    start: Quat,
    target: Quat,
    elapsed: f32,
    duration: f32,
}

impl RotationTransition {
    pub fn new(start: Quat, target: Quat, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    /// Advance by `dt` and return the orientation for this tick. Once the
    /// elapsed time reaches the duration the target is returned exactly.
    pub fn advance(&mut self, dt: f32) -> Quat {
        self.elapsed += dt;
        if self.finished() {
            self.target
        } else {
            self.start.slerp(self.target, self.elapsed / self.duration)
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> Quat {
        self.target
    }
}

//! Axis-separated planar motion solver.
//!
//! Drag motion is resolved one horizontal axis at a time so an item can keep
//! sliding along a wall when a diagonal move is blocked in only one axis. A
//! single combined sweep would stop all motion on any contact and make the
//! drag feel sticky. X is resolved before Z; diagonal sliding therefore
//! prefers continuing along X. That ordering is a deliberate tie-break, not
//! an accident. The vertical axis is never touched.

use glam::{Quat, Vec3};
use rapier3d::geometry::Group;

use crate::probe::GeometryProbe;

/// Maximal achievable position between `current` and `desired`.
///
/// Sweeps the X component of the move from `current`, committing it only if
/// unblocked, then sweeps the Z component from the post-X position. The
/// returned position keeps the Y of `current`.
pub fn resolve_planar(
    current: Vec3,
    desired: Vec3,
    half_extents: Vec3,
    rotation: Quat,
    probe: &dyn GeometryProbe,
    filter: Group,
) -> Vec3 {
    let total_move = desired - current;
    let mut resolved = current;

    let x_move = Vec3::new(total_move.x, 0.0, 0.0);
    if !probe.sweep_blocked(
        resolved,
        half_extents,
        rotation,
        x_move,
        total_move.x.abs(),
        filter,
    ) {
        resolved += x_move;
    }

    let z_move = Vec3::new(0.0, 0.0, total_move.z);
    if !probe.sweep_blocked(
        resolved,
        half_extents,
        rotation,
        z_move,
        total_move.z.abs(),
        filter,
    ) {
        resolved += z_move;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RayHit;
    use crate::scene::ObstacleId;
    use crate::scene::WALL_GROUP;

    /// Probe that blocks whole axes, for isolating the solver's policy.
    struct AxisProbe {
        block_x: bool,
        block_z: bool,
    }

    impl GeometryProbe for AxisProbe {
        fn sweep_blocked(
            &self,
            _origin: Vec3,
            _half_extents: Vec3,
            _rotation: Quat,
            direction: Vec3,
            distance: f32,
            _filter: Group,
        ) -> bool {
            if distance <= 0.0 || direction == Vec3::ZERO {
                return false;
            }
            (direction.x != 0.0 && self.block_x) || (direction.z != 0.0 && self.block_z)
        }

        fn overlapping(
            &self,
            _position: Vec3,
            _half_extents: Vec3,
            _rotation: Quat,
            _filter: Group,
        ) -> Vec<ObstacleId> {
            Vec::new()
        }

        fn raycast_nearest(
            &self,
            _origin: Vec3,
            _direction: Vec3,
            _max_distance: f32,
            _filter: Group,
        ) -> Option<RayHit> {
            None
        }

        fn obstacle_center(&self, _id: ObstacleId) -> Option<Vec3> {
            None
        }
    }

    const HALF: Vec3 = Vec3::new(0.5, 0.5, 0.5);

    fn resolve(probe: &AxisProbe, current: Vec3, desired: Vec3) -> Vec3 {
        resolve_planar(current, desired, HALF, Quat::IDENTITY, probe, WALL_GROUP)
    }

    #[test]
    fn test_free_move_is_identity() {
        let probe = AxisProbe {
            block_x: false,
            block_z: false,
        };
        let current = Vec3::new(1.0, 0.4, 1.0);
        let desired = Vec3::new(3.5, 0.4, -2.0);
        assert_eq!(resolve(&probe, current, desired), desired);
    }

    #[test]
    fn test_blocked_x_still_slides_in_z() {
        let probe = AxisProbe {
            block_x: true,
            block_z: false,
        };
        let current = Vec3::new(1.0, 0.4, 1.0);
        let desired = Vec3::new(3.0, 0.4, -2.0);
        assert_eq!(resolve(&probe, current, desired), Vec3::new(1.0, 0.4, -2.0));
    }

    #[test]
    fn test_blocked_z_still_slides_in_x() {
        let probe = AxisProbe {
            block_x: false,
            block_z: true,
        };
        let current = Vec3::new(1.0, 0.4, 1.0);
        let desired = Vec3::new(3.0, 0.4, -2.0);
        assert_eq!(resolve(&probe, current, desired), Vec3::new(3.0, 0.4, 1.0));
    }

    #[test]
    fn test_full_block_returns_current() {
        let probe = AxisProbe {
            block_x: true,
            block_z: true,
        };
        let current = Vec3::new(1.0, 0.4, 1.0);
        let desired = Vec3::new(3.0, 0.4, -2.0);
        assert_eq!(resolve(&probe, current, desired), current);
    }

    #[test]
    fn test_vertical_component_is_ignored() {
        let probe = AxisProbe {
            block_x: false,
            block_z: false,
        };
        let current = Vec3::new(0.0, 0.4, 0.0);
        let desired = Vec3::new(2.0, 7.0, 2.0);
        let resolved = resolve(&probe, current, desired);
        assert_eq!(resolved, Vec3::new(2.0, 0.4, 2.0));
    }
}

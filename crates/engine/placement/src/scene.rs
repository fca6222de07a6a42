//! Obstacle registry backing the geometry probe.
//!
//! Walls (and any other static obstacles) are registered as oriented cuboids
//! tagged with an interaction group. The registry is the concrete scene
//! representation behind the [`GeometryProbe`](crate::GeometryProbe) trait;
//! the drag and alignment code never touches it directly.

use glam::{Quat, Vec3};
use rapier3d::geometry::Group;
use rapier3d::parry::math::Pose;
use rapier3d::parry::shape::Cuboid;

/// Interaction group walls are registered under by default.
pub const WALL_GROUP: Group = Group::GROUP_1;

/// Handle to an obstacle registered in a [`SceneIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleId(u32);

impl ObstacleId {
    /// Build a handle from its raw index. Intended for external probe
    /// implementations and tests; handles minted this way are only
    /// meaningful to the probe that produced them.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> u32 {
        self.0
    }
}

/// A static obstacle: cuboid shape, world pose, interaction group.
pub(crate) struct Obstacle {
    pub(crate) shape: Cuboid,
    pub(crate) pose: Pose,
    pub(crate) membership: Group,
}

/// Registry of static obstacles participating in placement queries.
///
/// Half-extents and poses are fixed after registration; the index is a
/// read-only structure from the point of view of the interaction code.
#[derive(Default)]
pub struct SceneIndex {
    obstacles: Vec<Obstacle>,
}

impl SceneIndex {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    /// Register an obstacle with an explicit orientation and group.
    pub fn add_obstacle(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        membership: Group,
    ) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len() as u32);
        self.obstacles.push(Obstacle {
            shape: Cuboid::new(half_extents),
            pose: Pose::from_parts(center, rotation),
            membership,
        });
        id
    }

    /// Register an axis-aligned wall under [`WALL_GROUP`].
    pub fn add_wall(&mut self, center: Vec3, half_extents: Vec3) -> ObstacleId {
        self.add_obstacle(center, half_extents, Quat::IDENTITY, WALL_GROUP)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub(crate) fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.0 as usize)
    }

    /// Obstacles whose membership intersects `filter`.
    pub(crate) fn iter_matching(
        &self,
        filter: Group,
    ) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.obstacles
            .iter()
            .enumerate()
            .filter(move |(_, obstacle)| obstacle.membership.intersects(filter))
            .map(|(index, obstacle)| (ObstacleId(index as u32), obstacle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_ids_are_sequential() {
        let mut scene = SceneIndex::new();
        let a = scene.add_wall(Vec3::ZERO, Vec3::ONE);
        let b = scene.add_wall(Vec3::X, Vec3::ONE);
        assert_eq!(a.into_raw(), 0);
        assert_eq!(b.into_raw(), 1);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_iter_matching_respects_groups() {
        let mut scene = SceneIndex::new();
        scene.add_obstacle(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY, Group::GROUP_2);
        scene.add_wall(Vec3::X * 3.0, Vec3::ONE);

        let walls: Vec<_> = scene.iter_matching(WALL_GROUP).collect();
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].0.into_raw(), 1);
    }

    #[test]
    fn test_registered_pose_keeps_center() {
        let mut scene = SceneIndex::new();
        let position = Vec3::new(1.5, -2.0, 0.25);
        let id = scene.add_wall(position, Vec3::ONE);

        let obstacle = scene.get(id).expect("obstacle just registered");
        assert!((obstacle.pose.translation - position).length() < 1e-6);
    }
}

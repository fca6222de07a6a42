//! Geometry queries against the obstacle scene.
//!
//! The [`GeometryProbe`] trait is the seam between the interaction logic and
//! whatever spatial representation hosts the obstacles. The solver and the
//! wall-alignment resolver only ever see this trait, which keeps them
//! testable with hand-written probes.

use glam::{Quat, Vec3};
use rapier3d::geometry::Group;
use rapier3d::parry::math::Pose;
use rapier3d::parry::query::{self, Ray, RayCast, ShapeCastOptions};
use rapier3d::parry::shape::Cuboid;

use crate::scene::{ObstacleId, SceneIndex};

/// Nearest obstacle hit along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World position where the ray entered the obstacle.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
    /// Obstacle that was hit.
    pub obstacle: ObstacleId,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Read-only spatial queries used by the motion solver and the alignment
/// resolver. Implementations must be side-effect free.
pub trait GeometryProbe {
    /// Whether translating a box from `origin` along `direction` by
    /// `distance` would intersect any obstacle matching `filter`.
    ///
    /// `direction` does not need to be normalized; a zero direction or a
    /// zero distance means no movement and must report `false`.
    fn sweep_blocked(
        &self,
        origin: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        direction: Vec3,
        distance: f32,
        filter: Group,
    ) -> bool;

    /// All obstacles matching `filter` that statically overlap the box at
    /// the given pose.
    fn overlapping(
        &self,
        position: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        filter: Group,
    ) -> Vec<ObstacleId>;

    /// First obstacle hit along a ray, or `None`. A zero direction misses.
    fn raycast_nearest(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: Group,
    ) -> Option<RayHit>;

    /// World-space center of an obstacle, if the handle is known.
    fn obstacle_center(&self, id: ObstacleId) -> Option<Vec3>;
}

impl GeometryProbe for SceneIndex {
    fn sweep_blocked(
        &self,
        origin: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        direction: Vec3,
        distance: f32,
        filter: Group,
    ) -> bool {
        if distance <= 0.0 {
            return false;
        }
        let Some(direction) = direction.try_normalize() else {
            return false;
        };

        let moving = Cuboid::new(half_extents);
        let start = Pose::from_parts(origin, rotation);
        // An item already interpenetrating a wall may still sweep away from
        // it; only motion that deepens the contact counts as blocked.
        let options = ShapeCastOptions {
            max_time_of_impact: distance,
            stop_at_penetration: false,
            ..ShapeCastOptions::default()
        };

        self.iter_matching(filter).any(|(_, obstacle)| {
            query::cast_shapes(
                &start,
                direction,
                &moving,
                &obstacle.pose,
                Vec3::ZERO,
                &obstacle.shape,
                options,
            )
            .ok()
            .flatten()
            .is_some()
        })
    }

    fn overlapping(
        &self,
        position: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        filter: Group,
    ) -> Vec<ObstacleId> {
        let probe_shape = Cuboid::new(half_extents);
        let probe_pose = Pose::from_parts(position, rotation);

        self.iter_matching(filter)
            .filter(|(_, obstacle)| {
                query::intersection_test(
                    &probe_pose,
                    &probe_shape,
                    &obstacle.pose,
                    &obstacle.shape,
                )
                .unwrap_or(false)
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn raycast_nearest(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: Group,
    ) -> Option<RayHit> {
        let direction = direction.try_normalize()?;
        let ray = Ray::new(origin, direction);

        let mut nearest: Option<RayHit> = None;
        for (id, obstacle) in self.iter_matching(filter) {
            let Some(hit) =
                obstacle
                    .shape
                    .cast_ray_and_get_normal(&obstacle.pose, &ray, max_distance, true)
            else {
                continue;
            };
            if nearest
                .as_ref()
                .is_none_or(|best| hit.time_of_impact < best.distance)
            {
                nearest = Some(RayHit {
                    point: ray.point_at(hit.time_of_impact),
                    normal: hit.normal,
                    obstacle: id,
                    distance: hit.time_of_impact,
                });
            }
        }
        nearest
    }

    fn obstacle_center(&self, id: ObstacleId) -> Option<Vec3> {
        self.get(id).map(|obstacle| obstacle.pose.translation)
    }
}

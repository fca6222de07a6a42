//! Pointer rays and the horizontal drag plane.

use glam::Vec3;

/// World-space ray produced by the host's pointer/camera layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PointerRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Horizontal plane a drag is projected onto, fixed in height at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPlane {
    height: f32,
}

impl DragPlane {
    pub fn at_height(height: f32) -> Self {
        Self { height }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Intersection of a ray with the plane, or `None` when the ray is
    /// parallel to it or the intersection lies behind the origin.
    pub fn intersect(&self, ray: &PointerRay) -> Option<Vec3> {
        let denom = ray.direction.y;
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = (self.height - ray.origin.y) / denom;
        if t < 0.0 {
            return None;
        }

        Some(ray.point_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_from_above() {
        let plane = DragPlane::at_height(0.4);
        let ray = PointerRay::new(Vec3::new(2.0, 5.0, -1.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = plane.intersect(&ray).expect("ray should hit the plane");
        assert!((hit - Vec3::new(2.0, 0.4, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_oblique_intersection() {
        let plane = DragPlane::at_height(0.0);
        let ray = PointerRay::new(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0).normalize(),
        );

        let hit = plane.intersect(&ray).expect("ray should hit the plane");
        assert!((hit - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = DragPlane::at_height(1.0);
        let ray = PointerRay::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = DragPlane::at_height(5.0);
        let ray = PointerRay::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }
}

//! Selection routing: pointer events to the single active drag session.
//!
//! The router owns the "currently dragged item" invariant the core does not
//! enforce: at most one item is in the dragging state at a time. It also
//! decides the release policy — here, releasing a drag explicitly requests
//! wall alignment.

use glam::Vec3;
use roomcraft_placement::{Draggable, PointerRay, SceneIndex};
use tracing::{debug, info};

/// A named draggable in the testbed scene.
pub struct SceneItem {
    pub name: String,
    pub item: Draggable,
}

/// Pointer events delivered by the host input layer.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Pressed(PointerRay),
    Moved(PointerRay),
    Released,
}

/// Routes pointer events onto at most one active [`Draggable`].
#[derive(Default)]
pub struct SelectionRouter {
    active: Option<usize>,
}

impl SelectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the item currently being dragged, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn handle(&mut self, event: PointerEvent, items: &mut [SceneItem], scene: &SceneIndex) {
        match event {
            PointerEvent::Pressed(ray) => self.try_select(ray, items),
            PointerEvent::Moved(ray) => {
                if let Some(index) = self.active {
                    items[index].item.drag(&ray, scene);
                }
            }
            PointerEvent::Released => {
                if let Some(index) = self.active.take() {
                    let entry = &mut items[index];
                    entry.item.end_drag();
                    match entry.item.align_to_wall(scene) {
                        Ok(()) => info!(name = %entry.name, "wall alignment started"),
                        Err(err) => {
                            debug!(name = %entry.name, %err, "item left where it was dropped");
                        }
                    }
                }
            }
        }
    }

    fn try_select(&mut self, ray: PointerRay, items: &mut [SceneItem]) {
        let mut best: Option<(usize, f32)> = None;
        for (index, entry) in items.iter().enumerate() {
            let Some(half_extents) = entry.item.shape().half_extents() else {
                continue;
            };
            if let Some(t) = ray_box_entry(&ray, entry.item.position, half_extents) {
                if best.is_none_or(|(_, best_t)| t < best_t) {
                    best = Some((index, t));
                }
            }
        }

        if let Some((index, t)) = best {
            let grab_point = ray.point_at(t);
            items[index].item.begin_drag(grab_point);
            self.active = Some(index);
            info!(name = %items[index].name, ?grab_point, "drag started");
        }
    }
}

/// Slab test against an item's axis-aligned bounds.
///
/// Selection hit-testing ignores item yaw; for the near-cube furniture in
/// the testbed that is accurate enough for dispatch.
fn ray_box_entry(ray: &PointerRay, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        if dir.abs() < 1e-6 {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (min[axis] - origin) / dir;
        let mut t1 = (max[axis] - origin) / dir;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}

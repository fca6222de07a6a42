//! Drag-and-place testbed
//!
//! Loads a walled room, then runs a scripted pointer session against it:
//! grab the first item, drag it diagonally into the nearest wall, release,
//! and let the wall alignment finish. Positions and orientations are
//! reported through tracing.
//!
//! Scene layout can be loaded from RON files; use `--config <path>`.

use anyhow::Result;
use clap::Parser;
use glam::{Quat, Vec3};
use roomcraft_placement::{Draggable, ItemShape, PointerRay, SceneIndex, WALL_GROUP};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod router;

use config::SceneConfig;
use router::{PointerEvent, SceneItem, SelectionRouter};

#[derive(Parser)]
#[command(name = "roomcraft-testbed")]
#[command(about = "Scripted drag-and-place session against a walled room")]
struct Args {
    /// Scene layout file (RON). Falls back to the built-in room.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds advanced per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Number of drag steps in the scripted session.
    #[arg(long, default_value_t = 30)]
    steps: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scene_config = match &args.config {
        Some(path) => SceneConfig::from_file(path)?,
        None => {
            let default_path = PathBuf::from("crates/apps/testbed/config/room.ron");
            if default_path.exists() {
                info!(path = %default_path.display(), "loading default scene config");
                SceneConfig::from_file(&default_path)?
            } else {
                SceneConfig::default_room()
            }
        }
    };

    let mut scene = SceneIndex::new();
    for wall in &scene_config.walls {
        scene.add_wall(wall.center, wall.half_extents);
    }
    info!(walls = scene.len(), "scene built");

    let mut items: Vec<SceneItem> = scene_config
        .items
        .iter()
        .map(|item| SceneItem {
            name: item.name.clone(),
            item: Draggable::new(
                item.position,
                Quat::IDENTITY,
                ItemShape::Box {
                    half_extents: item.half_extents,
                },
                WALL_GROUP,
            ),
        })
        .collect();
    for entry in &items {
        info!(name = %entry.name, position = ?entry.item.position, "item placed");
    }

    run_session(&mut items, &scene, args.dt, args.steps);

    for entry in &items {
        info!(
            name = %entry.name,
            position = ?entry.item.position,
            rotation = ?entry.item.rotation,
            "final pose"
        );
    }
    Ok(())
}

/// Scripted pointer session: press on the first item, drag it diagonally
/// toward the north wall, release, and tick until the alignment rotation
/// settles.
fn run_session(items: &mut [SceneItem], scene: &SceneIndex, dt: f32, steps: u32) {
    let Some(first) = items.first() else {
        info!("scene has no items, nothing to drag");
        return;
    };
    let start = first.item.position;

    let mut router = SelectionRouter::new();
    router.handle(
        PointerEvent::Pressed(ray_down_at(start.x, start.z)),
        items,
        scene,
    );
    if router.active().is_none() {
        info!("scripted press missed every item");
        return;
    }

    for step in 1..=steps {
        let fraction = step as f32 / steps as f32;
        let pointer = start + Vec3::new(1.6, 0.0, -3.2) * fraction;
        router.handle(
            PointerEvent::Moved(ray_down_at(pointer.x, pointer.z)),
            items,
            scene,
        );
        tick_all(items, dt);

        if step % 10 == 0 {
            let dragged = &items[router.active().expect("drag still active")];
            info!(step, position = ?dragged.item.position, "dragging");
        }
    }

    router.handle(PointerEvent::Released, items, scene);

    // Let any alignment rotation run to completion.
    while items.iter().any(|entry| entry.item.is_rotating()) {
        tick_all(items, dt);
    }
}

fn tick_all(items: &mut [SceneItem], dt: f32) {
    for entry in items {
        entry.item.tick(dt);
    }
}

fn ray_down_at(x: f32, z: f32) -> PointerRay {
    PointerRay::new(Vec3::new(x, 10.0, z), Vec3::new(0.0, -1.0, 0.0))
}

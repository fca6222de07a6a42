//! Scene layout loading from RON files.

use anyhow::Context;
use glam::Vec3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Wall slab registered as a static obstacle.
#[derive(Debug, Clone, Deserialize)]
pub struct WallConfig {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Draggable item placed in the scene.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub position: Vec3,
    pub half_extents: Vec3,
}

/// Full scene layout: walls plus the items that can be dragged around.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl SceneConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene config {}", path.display()))?;
        ron::from_str(&text)
            .with_context(|| format!("parsing scene config {}", path.display()))
    }

    /// Built-in square room with two pieces of furniture.
    pub fn default_room() -> Self {
        let wall = |center, half_extents| WallConfig {
            center,
            half_extents,
        };
        let item = |name: &str, position, half_extents| ItemConfig {
            name: name.to_string(),
            position,
            half_extents,
        };

        Self {
            walls: vec![
                wall(Vec3::new(0.0, 1.0, -4.5), Vec3::new(5.0, 1.0, 0.5)),
                wall(Vec3::new(0.0, 1.0, 4.5), Vec3::new(5.0, 1.0, 0.5)),
                wall(Vec3::new(4.5, 1.0, 0.0), Vec3::new(0.5, 1.0, 5.0)),
                wall(Vec3::new(-4.5, 1.0, 0.0), Vec3::new(0.5, 1.0, 5.0)),
            ],
            items: vec![
                item(
                    "armchair",
                    Vec3::new(1.7, 0.4, -1.8),
                    Vec3::new(0.45, 0.4, 0.45),
                ),
                item(
                    "dining-chair",
                    Vec3::new(1.0, 0.4, 0.75),
                    Vec3::new(0.25, 0.4, 0.25),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_room_is_enclosed() {
        let config = SceneConfig::default_room();
        assert_eq!(config.walls.len(), 4);
        assert_eq!(config.items.len(), 2);
    }

    #[test]
    fn test_parse_ron_scene() {
        let text = r#"
            (
                walls: [
                    (center: (0.0, 1.0, -4.5), half_extents: (5.0, 1.0, 0.5)),
                ],
                items: [
                    (name: "sofa", position: (1.0, 0.4, 0.0), half_extents: (0.9, 0.4, 0.4)),
                ],
            )
        "#;
        let config: SceneConfig = ron::from_str(text).expect("scene should parse");
        assert_eq!(config.walls.len(), 1);
        assert_eq!(config.items[0].name, "sofa");
        assert_eq!(config.items[0].position, Vec3::new(1.0, 0.4, 0.0));
    }
}

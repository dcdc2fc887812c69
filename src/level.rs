//! Level layout persistence.
//!
//! A layout records the screen, floor, player spawn, platforms and, for each
//! enemy, only its kind tag and spawn point. Live positions are never
//! persisted: a loaded layout always starts from spawn state.

use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec2;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::EnemyKind;
use crate::context::{ContextError, FrameContext};
use crate::enemy::Behaviour;
use crate::geometry::{Rect, Size};
use crate::world::World;
use crate::DEFAULT_FLOOR_HEIGHT;

/// Errors raised while loading or saving a level layout.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Reading or writing the layout file failed.
    #[error("level file {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The layout is not valid JSON or does not match the schema.
    #[error("malformed level layout: {0}")]
    Parse(#[from] serde_json::Error),
    /// Screen or floor values cannot form a frame context.
    #[error("invalid level frame: {0}")]
    InvalidContext(#[from] ContextError),
}

/// A spawn coordinate (top-left corner of the sprite).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl From<SpawnPoint> for DVec2 {
    fn from(point: SpawnPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<DVec2> for SpawnPoint {
    fn from(point: DVec2) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Persisted description of one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Archetype tag: `"spikes"`, `"walking"` or `"flying"`.
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    /// Where the enemy starts.
    pub spawn: SpawnPoint,
}

const fn default_floor_height() -> i32 {
    DEFAULT_FLOOR_HEIGHT
}

/// Everything needed to rebuild a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Screen dimensions.
    #[serde(default)]
    pub screen: Size,
    /// Floor thickness measured up from the bottom of the screen.
    #[serde(default = "default_floor_height")]
    pub floor_height: i32,
    /// Where the player starts.
    pub player_spawn: SpawnPoint,
    /// Enemies in spawn order.
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    /// Static platforms.
    #[serde(default)]
    pub platforms: Vec<Rect>,
}

impl LevelLayout {
    /// Parses a layout from JSON.
    ///
    /// # Errors
    /// Returns [`LevelError::Parse`] when the document is malformed.
    ///
    /// # Examples
    /// ```
    /// use ledge::{EnemyKind, LevelLayout};
    ///
    /// let layout = LevelLayout::from_json(
    ///     r#"{
    ///         "player_spawn": { "x": 0.0, "y": 550.0 },
    ///         "enemies": [{ "type": "walking", "spawn": { "x": 0.0, "y": 300.0 } }]
    ///     }"#,
    /// )?;
    /// assert_eq!(layout.floor_height, 100);
    /// assert_eq!(layout.enemies[0].kind, EnemyKind::Walking);
    /// # Ok::<(), ledge::LevelError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the layout as indented JSON.
    ///
    /// # Errors
    /// Returns [`LevelError::Parse`] if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a layout from a JSON file.
    ///
    /// # Errors
    /// Returns [`LevelError::Io`] if the file cannot be read and
    /// [`LevelError::Parse`] if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let file = path.as_ref();
        let json = fs::read_to_string(file).map_err(|source| LevelError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        let layout = Self::from_json(&json)?;
        info!(
            "loaded level {} with {} enemies",
            file.display(),
            layout.enemies.len()
        );
        Ok(layout)
    }

    /// Writes the layout to a JSON file.
    ///
    /// # Errors
    /// Returns [`LevelError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LevelError> {
        let file = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(file, json).map_err(|source| LevelError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        debug!("saved level layout to {}", file.display());
        Ok(())
    }

    /// Records the layout of a world from spawn data only.
    #[must_use]
    pub fn capture(world: &World) -> Self {
        let frame = world.frame();
        Self {
            screen: frame.screen(),
            floor_height: frame.floor_height(),
            player_spawn: world.player().state().spawn().into(),
            enemies: world
                .enemies()
                .iter()
                .map(|enemy| EnemySpawn {
                    kind: enemy.kind(),
                    spawn: enemy.state().spawn().into(),
                })
                .collect(),
            platforms: world.platforms().iter().map(|platform| platform.rect).collect(),
        }
    }

    /// Validates the frame and builds a fresh world from the layout.
    ///
    /// # Errors
    /// Returns [`LevelError::InvalidContext`] if the screen or floor values
    /// are unusable.
    pub fn build(&self) -> Result<World, LevelError> {
        let frame = FrameContext::new(self.screen, self.floor_height)?;
        let mut world = World::new(frame, self.player_spawn.into());
        for platform in &self.platforms {
            world.add_platform(*platform);
        }
        for enemy in &self.enemies {
            world.spawn_enemy(enemy.kind, enemy.spawn.into());
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facing::Facing;
    use crate::player::PlayerCommand;

    fn layout() -> LevelLayout {
        LevelLayout {
            screen: Size::new(800, 720),
            floor_height: 100,
            player_spawn: SpawnPoint { x: 10.0, y: 550.0 },
            enemies: vec![
                EnemySpawn {
                    kind: EnemyKind::Walking,
                    spawn: SpawnPoint { x: 0.0, y: 300.0 },
                },
                EnemySpawn {
                    kind: EnemyKind::Flying,
                    spawn: SpawnPoint { x: 600.0, y: 50.0 },
                },
            ],
            platforms: vec![Rect::new(100, 400, 200, 20)],
        }
    }

    #[test]
    fn capture_ignores_live_positions() {
        let mut world = layout().build().expect("valid layout");
        for _ in 0..40 {
            world.step(&[PlayerCommand::Walk(Facing::Right)]);
        }
        assert_eq!(LevelLayout::capture(&world), layout());
    }

    #[test]
    fn kind_tags_serialise_as_type_field() {
        let json = layout().to_json_pretty().expect("serialise layout");
        assert!(json.contains("\"type\": \"walking\""));
        assert!(json.contains("\"type\": \"flying\""));
        assert_eq!(LevelLayout::from_json(&json).expect("parse layout"), layout());
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = LevelLayout::from_json(
            r#"{"player_spawn":{"x":0,"y":0},"enemies":[{"type":"ghost","spawn":{"x":0,"y":0}}]}"#,
        )
        .expect_err("ghost is not an enemy");
        assert!(matches!(err, LevelError::Parse(_)));
    }

    #[test]
    fn rejects_floor_taller_than_screen() {
        let mut bad = layout();
        bad.floor_height = 900;
        assert!(matches!(
            bad.build(),
            Err(LevelError::InvalidContext(ContextError::InvalidFloor { .. }))
        ));
    }
}

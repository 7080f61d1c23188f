//! Engine configuration.

use std::time::Duration;

use crate::types::{
    MapCoordinate, Position, DEFAULT_START, INITIAL_HEALTH, PASSABLE_MARKER, PLAYER_SPRITE,
    START_COORDINATE, TICK_MS,
};

/// Tunables of a game session. [`Default`] matches the shipped maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Map resolved when the engine starts.
    pub start_coordinate: MapCoordinate,
    /// Pause after each tick. Zero disables the pause.
    pub tick: Duration,
    /// Glyph of walkable cells.
    pub passable: char,
    /// Spawn cell when the start map declares none.
    pub default_start: Position,
    pub initial_health: i32,
    pub sprite: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_coordinate: START_COORDINATE,
            tick: Duration::from_millis(TICK_MS),
            passable: PASSABLE_MARKER,
            default_start: DEFAULT_START,
            initial_health: INITIAL_HEALTH,
            sprite: PLAYER_SPRITE,
        }
    }
}

impl EngineConfig {
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_start_coordinate(mut self, coordinate: MapCoordinate) -> Self {
        self.start_coordinate = coordinate;
        self
    }

    pub fn with_sprite(mut self, sprite: char) -> Self {
        self.sprite = sprite;
        self
    }
}

//! The player avatar.
//!
//! Plain state: callers validate positions before committing them.

use crate::error::ValidationError;
use crate::types::{Direction, Position, INITIAL_HEALTH, PLAYER_SPRITE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    health: i32,
    direction: Direction,
    sprite: char,
}

impl Player {
    /// New player at `position`, full health, facing left.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: INITIAL_HEALTH,
            direction: Direction::Left,
            sprite: PLAYER_SPRITE,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_sprite(mut self, sprite: char) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Unconditional; bounds and collision are the engine's concern.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Set the facing direction from a raw index (`0..=3` = left, up, right, down).
    pub fn set_direction_index(&mut self, index: u8) -> Result<(), ValidationError> {
        let direction =
            Direction::from_index(index).ok_or(ValidationError::InvalidDirection(index))?;
        self.direction = direction;
        Ok(())
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn sprite(&self) -> char {
        self.sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Player::new(Position::new(3, 4));
        assert_eq!(p.position(), Position::new(3, 4));
        assert_eq!(p.health(), 10);
        assert_eq!(p.direction(), Direction::Left);
        assert_eq!(p.sprite(), '@');
    }

    #[test]
    fn direction_index_is_validated() {
        let mut p = Player::new(Position::default());
        assert!(p.set_direction_index(3).is_ok());
        assert_eq!(p.direction(), Direction::Down);

        assert_eq!(
            p.set_direction_index(4),
            Err(ValidationError::InvalidDirection(4))
        );
        // Rejected index leaves the old direction in place.
        assert_eq!(p.direction(), Direction::Down);
    }

    #[test]
    fn set_position_does_not_validate() {
        let mut p = Player::new(Position::default());
        p.set_position(Position::new(-5, 99));
        assert_eq!(p.position(), Position::new(-5, 99));
    }
}

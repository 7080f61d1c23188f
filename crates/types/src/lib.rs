//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Two coordinate systems are in play:
//!
//! - [`Position`]: a cell inside one map, `(y, x)` = (row, column), origin at the
//!   top-left corner, `y` growing downwards.
//! - [`MapCoordinate`]: which map is active, `(column, row)` in world space.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Pause between two ticks of the run loop |
//! | `PASSABLE_MARKER` | `-` | The only glyph a player may walk on |
//! | `PLAYER_SPRITE` | `@` | Glyph drawn at the player's position |
//! | `INITIAL_HEALTH` | 10 | Health a new player starts with |
//! | `DEFAULT_START` | (1, 1) | Spawn cell when a map declares none |
//! | `START_COORDINATE` | (1, 1) | Map shown when the game starts |
//!
//! # Examples
//!
//! ```
//! use tilewalk_types::{Command, Direction, Position};
//!
//! let cmd = Command::from_char('w');
//! assert_eq!(cmd, Command::Move(Direction::Up));
//!
//! let pos = Position::new(2, 3).step(Direction::Up);
//! assert_eq!(pos, Position::new(1, 3));
//! ```

/// Pause between two ticks of the run loop, in milliseconds.
pub const TICK_MS: u64 = 100;

/// Glyph marking a walkable cell. Every other glyph is solid.
pub const PASSABLE_MARKER: char = '-';

/// Glyph drawn at the player's position.
pub const PLAYER_SPRITE: char = '@';

/// Health a freshly spawned player starts with.
pub const INITIAL_HEALTH: i32 = 10;

/// Spawn cell used when the active map declares no start position.
pub const DEFAULT_START: Position = Position::new(1, 1);

/// Map coordinate the engine resolves on startup.
pub const START_COORDINATE: MapCoordinate = MapCoordinate::new(1, 1);

/// A cell inside a map: row `y`, column `x`.
///
/// Components are signed so that a movement candidate stepping off the top or
/// left edge is representable; bounds are checked against a grid at point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub y: i32,
    pub x: i32,
}

impl Position {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Offset by a raw delta.
    pub const fn offset(self, dy: i32, dx: i32) -> Self {
        Self {
            y: self.y + dy,
            x: self.x + dx,
        }
    }

    /// Neighbouring cell one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        self.offset(dy, dx)
    }

    /// True if neither component is negative.
    pub const fn is_non_negative(self) -> bool {
        self.y >= 0 && self.x >= 0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(y={}, x={})", self.y, self.x)
    }
}

/// World-space key of a map: `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapCoordinate {
    pub column: i32,
    pub row: i32,
}

impl MapCoordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for MapCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(column={}, row={})", self.column, self.row)
    }
}

/// Facing direction of the player.
///
/// The declaration order is the raw index order: `Left = 0`, `Up = 1`,
/// `Right = 2`, `Down = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Map a raw index to a direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilewalk_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(1), Some(Direction::Up));
    /// assert_eq!(Direction::from_index(4), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Row/column delta of one step: `(dy, dx)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// One decoded input token.
///
/// Input surfaces produce exactly one command per tick. Unrecognised keys
/// become [`Command::Idle`], which still costs a tick but changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn to face `Direction` and try to step one cell that way.
    Move(Direction),
    /// Leave the run loop.
    Quit,
    /// No-op tick.
    Idle,
}

impl Command {
    /// Decode a single input character.
    ///
    /// `w`/`a`/`s`/`d` move (either case), `q` quits (either case), everything
    /// else is idle.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilewalk_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_char('d'), Command::Move(Direction::Right));
    /// assert_eq!(Command::from_char('Q'), Command::Quit);
    /// assert_eq!(Command::from_char(' '), Command::Idle);
    /// ```
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'w' => Command::Move(Direction::Up),
            'a' => Command::Move(Direction::Left),
            's' => Command::Move(Direction::Down),
            'd' => Command::Move(Direction::Right),
            'q' => Command::Quit,
            _ => Command::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Direction::Left) => "moveLeft",
            Command::Move(Direction::Up) => "moveUp",
            Command::Move(Direction::Right) => "moveRight",
            Command::Move(Direction::Down) => "moveDown",
            Command::Quit => "quit",
            Command::Idle => "idle",
        }
    }
}

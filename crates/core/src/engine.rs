//! Engine module - the render / input / update loop
//!
//! One tick:
//!
//! 1. Resolve the active map from the current [`MapCoordinate`].
//! 2. Render it with the player on top and hand the frame to the [`Screen`].
//! 3. Read one [`Command`] from the [`InputSource`].
//! 4. Apply it: a move always turns the player, but only steps onto cells that
//!    are in bounds and not solid. Blocked moves are dropped silently.
//! 5. Pause for the configured tick interval.
//!
//! A quit command ends the loop immediately; nothing is rendered or read after
//! it. Failing to resolve the active map is fatal.

use std::io;
use std::thread;

use tracing::{debug, error, info, warn};

use crate::catalog::MapCatalog;
use crate::config::EngineConfig;
use crate::error::{EngineError, ResolutionError};
use crate::grid::{Grid, TileIndex};
use crate::player::Player;
use crate::render::render_into;
use crate::types::{Command, MapCoordinate, Position};

/// Source of one command per tick. Implementations may block.
pub trait InputSource {
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Receives each rendered frame. Implementations replace whatever was shown
/// before.
pub trait Screen {
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// What applying one command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: Position, to: Position },
    /// The player turned towards `target` but could not enter it.
    Blocked { at: Position, target: Position },
    Idle,
    Quit,
}

pub struct Engine {
    catalog: MapCatalog,
    coordinate: MapCoordinate,
    player: Player,
    state: RunState,
    config: EngineConfig,
    frame: String,
    ticks: u64,
}

impl Engine {
    /// Resolve the start map and spawn the player on it.
    ///
    /// The player starts at the map's declared start position, or at
    /// `config.default_start` when the map has none.
    pub fn new(catalog: MapCatalog, config: EngineConfig) -> Result<Self, ResolutionError> {
        let coordinate = config.start_coordinate;
        let grid = catalog.resolve(coordinate)?;

        let start = grid.start().unwrap_or(config.default_start);
        if !grid.contains(start) {
            warn!(map = grid.name(), %start, "player spawns outside the map");
        }

        let player = Player::new(start)
            .with_health(config.initial_health)
            .with_sprite(config.sprite);

        info!(map = grid.name(), world = %coordinate, %start, "engine started");

        Ok(Self {
            catalog,
            coordinate,
            player,
            state: RunState::Running,
            config,
            frame: String::new(),
            ticks: 0,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn coordinate(&self) -> MapCoordinate {
        self.coordinate
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn active_grid(&self) -> Result<&Grid, ResolutionError> {
        self.catalog.resolve(self.coordinate)
    }

    /// Current frame as text.
    pub fn render(&self) -> Result<String, ResolutionError> {
        let grid = self.active_grid()?;
        Ok(crate::render::render(grid, &self.player))
    }

    /// Switch the active map. The coordinate must resolve.
    pub fn travel_to(&mut self, coordinate: MapCoordinate) -> Result<(), ResolutionError> {
        let grid = self.catalog.resolve(coordinate)?;
        info!(map = grid.name(), world = %coordinate, "travelled");
        self.coordinate = coordinate;
        Ok(())
    }

    /// Apply one command without any I/O.
    ///
    /// Once terminated, every command is ignored.
    pub fn apply(&mut self, command: Command) -> Result<StepOutcome, ResolutionError> {
        if self.state == RunState::Terminated {
            return Ok(StepOutcome::Idle);
        }

        let outcome = match command {
            Command::Quit => {
                self.state = RunState::Terminated;
                StepOutcome::Quit
            }
            Command::Idle => StepOutcome::Idle,
            Command::Move(direction) => {
                let grid = self.catalog.resolve(self.coordinate)?;
                let tiles = TileIndex::with_passable(grid, self.config.passable);

                // Facing is not gated by collision.
                self.player.set_direction(direction);

                let from = self.player.position();
                let target = from.step(direction);
                if tiles.is_walkable(target) {
                    self.player.set_position(target);
                    StepOutcome::Moved { from, to: target }
                } else {
                    debug!(direction = direction.as_str(), %target, "move blocked");
                    StepOutcome::Blocked { at: from, target }
                }
            }
        };

        debug!(command = command.as_str(), ?outcome, "applied");
        Ok(outcome)
    }

    /// Run one tick against the given collaborators.
    pub fn tick<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<RunState, EngineError>
    where
        I: InputSource + ?Sized,
        S: Screen + ?Sized,
    {
        if self.state == RunState::Terminated {
            return Ok(self.state);
        }

        let grid = match self.catalog.resolve(self.coordinate) {
            Ok(grid) => grid,
            Err(err) => {
                error!(world = %self.coordinate, "active map vanished");
                self.state = RunState::Terminated;
                return Err(err.into());
            }
        };
        render_into(grid, &self.player, &mut self.frame);
        screen.present(&self.frame).map_err(EngineError::Display)?;

        let command = input.next_command().map_err(EngineError::Input)?;
        self.apply(command)?;
        self.ticks += 1;

        if self.state == RunState::Running && !self.config.tick.is_zero() {
            thread::sleep(self.config.tick);
        }

        Ok(self.state)
    }

    /// Tick until a quit command or a fatal error.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<(), EngineError>
    where
        I: InputSource + ?Sized,
        S: Screen + ?Sized,
    {
        while self.tick(input, screen)? == RunState::Running {}
        info!(ticks = self.ticks, "engine stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn engine(lines: &[&str], start: Option<Position>) -> Engine {
        let grid = Grid::from_lines("t", MapCoordinate::new(1, 1), lines, start).unwrap();
        Engine::new(MapCatalog::new(vec![grid]), EngineConfig::default()).unwrap()
    }

    #[test]
    fn spawn_uses_declared_start() {
        let e = engine(&["-----", "-----", "-----", "-----"], Some(Position::new(3, 4)));
        assert_eq!(e.player().position(), Position::new(3, 4));
        assert_eq!(e.player().health(), 10);
        assert_eq!(e.player().direction(), Direction::Left);
        assert_eq!(e.state(), RunState::Running);
    }

    #[test]
    fn spawn_falls_back_to_default() {
        let e = engine(&["---", "---"], None);
        assert_eq!(e.player().position(), Position::new(1, 1));
    }

    #[test]
    fn missing_start_map_is_an_error() {
        let grid = Grid::from_lines("t", MapCoordinate::new(0, 0), &["-"], None).unwrap();
        let err = Engine::new(MapCatalog::new(vec![grid]), EngineConfig::default())
            .err()
            .unwrap();
        assert_eq!(err.coordinate, MapCoordinate::new(1, 1));
    }

    #[test]
    fn blocked_move_still_turns() {
        let mut e = engine(&["-#-"], Some(Position::new(0, 0)));
        let out = e.apply(Command::Move(Direction::Right)).unwrap();
        assert_eq!(
            out,
            StepOutcome::Blocked {
                at: Position::new(0, 0),
                target: Position::new(0, 1)
            }
        );
        assert_eq!(e.player().direction(), Direction::Right);
        assert_eq!(e.player().position(), Position::new(0, 0));
    }

    #[test]
    fn quit_terminates_and_freezes_state() {
        let mut e = engine(&["---"], Some(Position::new(0, 1)));
        assert_eq!(e.apply(Command::Quit).unwrap(), StepOutcome::Quit);
        assert_eq!(e.state(), RunState::Terminated);
        assert_eq!(
            e.apply(Command::Move(Direction::Right)).unwrap(),
            StepOutcome::Idle
        );
        assert_eq!(e.player().position(), Position::new(0, 1));
    }

    #[test]
    fn travel_requires_a_map() {
        let mut e = engine(&["-"], None);
        assert!(e.travel_to(MapCoordinate::new(9, 9)).is_err());
        assert_eq!(e.coordinate(), MapCoordinate::new(1, 1));
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Size**: 4x4 cells, indexed `(row, col)` with `(0, 0)` at the top-left
//! - **Values**: `0` for an empty cell, otherwise a power of two (`>= 2`)
//! - **Win tile**: 2048
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SLIDE_ANIMATION_MS` | 200 | Fixed duration of one slide, independent of distance |
//! | `SETTLE_MS` | 250 | Time after a move before the new tile spawns |
//! | `MERGE_FLASH_AT_MS` | 140 | Merged tiles show their new value from here |
//! | `FADE_OUT_MS` | 150 | Absorbed tiles fade out over this span |
//! | `SPAWN_POP_MS` | 200 | New tiles scale in over this span |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE, WIN_VALUE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Actions carry their direction
//! let action = GameAction::from_direction(Direction::Up);
//! assert_eq!(action, GameAction::MoveUp);
//! assert_eq!(action.direction(), Some(Direction::Up));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_VALUE, 2048);
//! ```

use std::fmt;

/// Board edge length in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Reaching a tile of this value wins the game
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Chance (in percent) that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_CHANCE_PERCENT: u32 = 10;

/// Values that must all be on the board at once to fire the promo event
pub const PROMO_VALUES: [u32; 4] = [2, 4, 8, 16];

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the slide animation for one move
pub const SLIDE_ANIMATION_MS: u32 = 200;

/// Delay between accepting a move and settling it (spawn + condition checks)
pub const SETTLE_MS: u32 = SLIDE_ANIMATION_MS + 50;

/// Point in the slide at which merged tiles switch to their doubled value
pub const MERGE_FLASH_AT_MS: u32 = SLIDE_ANIMATION_MS * 7 / 10;

/// Fade-out duration for tiles absorbed by a merge
pub const FADE_OUT_MS: u32 = 150;

/// Pop-in duration for a freshly spawned tile
pub const SPAWN_POP_MS: u32 = 200;

/// Minimum swipe length along the dominant axis, in gesture units
pub const MIN_SWIPE_DISTANCE: i32 = 50;

/// The four swipe directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// One step in the direction of travel as `(d_row, d_col)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// Whether lanes for this direction are rows (as opposed to columns)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game actions delivered by the input adapter
///
/// These actions come from keyboard, mouse swipes, or an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Start a new game (keeps the best score)
    Restart,
}

impl GameAction {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }

    /// The slide direction, or `None` for non-move actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}

/// Terminal condition of a session
///
/// - **None**: game in progress
/// - **Won**: a 2048 tile is on the board (play may continue)
/// - **Lost**: board full and no adjacent equal pair; no move can change it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalState {
    #[default]
    None,
    Won,
    Lost,
}

impl TerminalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalState::None => "none",
            TerminalState::Won => "won",
            TerminalState::Lost => "lost",
        }
    }

    /// Banner to show for this state, if any
    pub fn message(&self) -> Option<MessageKind> {
        match self {
            TerminalState::None => None,
            TerminalState::Won => Some(MessageKind::Won),
            TerminalState::Lost => Some(MessageKind::Lost),
        }
    }
}

/// Kind of end-of-game banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Won,
    Lost,
}

impl MessageKind {
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::Won => "You Win!",
            MessageKind::Lost => "Game Over!",
        }
    }
}

/// Stable identity of a tile, assigned when the tile spawns
///
/// A tile keeps its id while sliding. When two tiles merge, the one nearer
/// the wall keeps its id and the other id ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

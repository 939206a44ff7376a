//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a square N x N grid, N fixed when the board is created:
//!
//! - **Default**: 4 x 4
//! - **Maximum**: 16 x 16 (coordinates are `i8`, so one step past any edge
//!   stays representable)
//!
//! # Tile Spawning
//!
//! New tiles are drawn from a roll in `[0, SPAWN_ROLL_RANGE)`:
//!
//! | Roll | Tile | Probability |
//! |------|------|-------------|
//! | `[0, 60)` | 2 | 60% |
//! | `[60, 97)` | 4 | 37% |
//! | `[97, 100)` | 8 | 3% |
//!
//! # Timing
//!
//! - `TURN_PAUSE_MS`: 200ms pause between showing a swipe and placing the next tile
//!
//! # Examples
//!
//! ```
//! use term_2048_types::{Direction, Tile, DEFAULT_BOARD_SIZE};
//!
//! // Tiles are powers of two, at least 2
//! let tile = Tile::new(8).unwrap();
//! assert_eq!(tile.doubled(), Tile::new(16));
//! assert_eq!(Tile::new(6), None);
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

use std::fmt;

/// Default board edge length (4 x 4)
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Largest supported board edge length
pub const MAX_BOARD_SIZE: u8 = 16;

/// Pause between rendering a swipe and placing the next tile (200ms)
pub const TURN_PAUSE_MS: u64 = 200;

/// Upper bound (exclusive) of the spawn roll
pub const SPAWN_ROLL_RANGE: u32 = 100;

/// Rolls below this value spawn a 2
pub const SPAWN_TWO_BELOW: u32 = 60;

/// Rolls below this value (and at least `SPAWN_TWO_BELOW`) spawn a 4; the rest spawn an 8
pub const SPAWN_FOUR_BELOW: u32 = 97;


/// A numbered tile.
///
/// Always a power of two, at least 2. Merging two tiles of value V yields 2V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    pub const TWO: Tile = Tile(2);
    pub const FOUR: Tile = Tile(4);
    pub const EIGHT: Tile = Tile(8);

    /// Create a tile, rejecting values that are not powers of two >= 2
    pub fn new(value: u32) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Tile(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The tile produced by merging two copies of this tile.
    ///
    /// `None` for 2^31, whose double does not fit in a `u32`.
    pub fn doubled(self) -> Option<Self> {
        self.0.checked_mul(2).map(Tile)
    }

    /// log2 of the value (2 -> 1, 4 -> 2, ...), used for colouring
    pub fn rank(self) -> u32 {
        self.0.trailing_zeros()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a numbered tile
pub type Cell = Option<Tile>;

/// Swipe directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Offset of the neighbouring cell in this direction, as (dx, dy)
    ///
    /// `y` grows downwards, so `Up` is `(0, -1)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Discrete player inputs
///
/// One event per key press; keys that map to nothing produce no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game
    Quit,
    /// Swipe the board
    Move(Direction),
    /// Swap two random tiles with different values (once per game)
    Swap,
    /// Open the self-check menu
    Diagnostics,
}

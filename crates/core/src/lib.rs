//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the board, the swipe/merge algorithm,
//! random tile placement and loss detection. It has **no dependencies** on
//! terminal I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: rendering and pacing go through the [`Presenter`] trait
//! - **Portable**: can run in any environment (terminal, headless tests)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid, piece mechanics, single-step move, sweeps, placement, loss detection
//! - [`game`]: a play session (score, swap, restart) and turn completion
//! - [`rng`]: seeded random source and the spawn-value table
//! - [`diagnostics`]: self-checks behind the in-game test menu
//!
//! # Game Rules
//!
//! - **Swipe**: every tile slides toward the swiped edge until it hits the edge
//!   or an unequal tile
//! - **Merge**: a tile sliding into an equal tile merges into one tile of double
//!   value, then keeps sliding; a tile takes part in at most one merge per swipe
//! - **Turn**: a swipe that changed the board is followed by one new tile
//!   (2: 60%, 4: 37%, 8: 3%) on a random empty cell
//! - **Loss**: the board is full and no two orthogonal neighbours are equal
//!
//! # Example
//!
//! ```
//! use term_2048_core::Board;
//! use term_2048_types::Direction;
//!
//! let mut board = Board::from_rows(&[
//!     &[2, 2, 0, 0],
//!     &[0, 0, 0, 0],
//!     &[0, 0, 0, 0],
//!     &[0, 0, 0, 0],
//! ]);
//!
//! let outcome = board.sweep(Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(board.to_rows()[0], vec![4, 0, 0, 0]);
//! assert!(!board.has_lost());
//! ```

pub mod board;
pub mod diagnostics;
pub mod game;
pub mod rng;

pub use term_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Placement, SweepOutcome};
pub use diagnostics::{Diagnostic, DiagnosticReport};
pub use game::{Game, Presenter, Status, SwapOutcome, SwipeOutcome};
pub use rng::{spawn_tile, RandomSource, SimpleRng};

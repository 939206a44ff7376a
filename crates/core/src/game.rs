//! Game module - one play session on top of a [`Board`]
//!
//! `Game` owns the board, the random source and the small amount of session
//! state (score, the once-per-game swap, whether the game is lost). Drawing and
//! pacing are delegated to a [`Presenter`], so this module stays free of
//! terminal I/O and can be driven from tests with a recording presenter.

use std::time::Duration;

use log::{debug, info, warn};

use crate::board::{Board, Placement};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Direction, TURN_PAUSE_MS};

/// Output side of a game: draws boards and waits between frames.
pub trait Presenter {
    type Error;

    /// Draw the board. Implementations clear the previous frame first, so at
    /// most one board is visible at a time.
    fn present(&mut self, board: &Board, status: &Status) -> Result<(), Self::Error>;

    /// Block the caller for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Session state shown next to the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub score: u32,
    pub swap_available: bool,
    pub lost: bool,
    pub message: Option<String>,
}

/// What a swipe did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// The sweep moved or merged at least one tile (a turn was taken)
    pub changed: bool,
    /// Tile placed by turn completion, `None` if nothing changed or the board was full
    pub placed: Option<Placement>,
    /// No move is possible anywhere after the swipe
    pub lost: bool,
}

/// What a swap request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    Swapped { a: (i8, i8), b: (i8, i8) },
    AlreadyUsed,
    /// Fewer than two distinct tile values on the board
    NotPossible,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board,
    rng: R,
    score: u32,
    swap_available: bool,
    lost: bool,
    turn_pause: Duration,
    message: Option<String>,
}

impl Game<SimpleRng> {
    /// Start a game on an empty `size` x `size` board with one random tile
    pub fn new(size: u8, seed: u32) -> Self {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a game with a caller-provided random source
    pub fn with_rng(size: u8, rng: R) -> Self {
        let mut game = Self::with_board(Board::new(size), rng);
        game.place_opening_tile();
        info!("game started on a {size}x{size} board");
        game
    }

    /// Continue from an existing board (no opening tile is placed)
    pub fn with_board(board: Board, rng: R) -> Self {
        let lost = board.has_lost();
        Self {
            board,
            rng,
            score: 0,
            swap_available: true,
            lost,
            turn_pause: Duration::from_millis(TURN_PAUSE_MS),
            message: None,
        }
    }

    /// Override the pause between a swipe and the new tile
    pub fn with_turn_pause(mut self, turn_pause: Duration) -> Self {
        self.turn_pause = turn_pause;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    pub fn swap_available(&self) -> bool {
        self.swap_available
    }

    pub fn turn_pause(&self) -> Duration {
        self.turn_pause
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score,
            swap_available: self.swap_available,
            lost: self.lost,
            message: self.message.clone(),
        }
    }

    /// Draw the current state without changing it
    pub fn present<P: Presenter>(&self, presenter: &mut P) -> Result<(), P::Error> {
        presenter.present(&self.board, &self.status())
    }

    /// Swipe in `direction`.
    ///
    /// A sweep that changes nothing is not a turn: no render, no pause, no new
    /// tile. Otherwise turn completion runs and loss is re-evaluated.
    pub fn swipe<P: Presenter>(
        &mut self,
        direction: Direction,
        presenter: &mut P,
    ) -> Result<SwipeOutcome, P::Error> {
        let sweep = self.board.sweep(direction);
        debug!(
            "swipe {} changed={} points={}",
            direction.as_str(),
            sweep.changed,
            sweep.points
        );

        let placed = if sweep.changed {
            self.score = self.score.saturating_add(sweep.points);
            self.complete_turn(presenter)?
        } else {
            None
        };

        self.lost = self.board.has_lost();
        if self.lost {
            info!("game lost with score {}", self.score);
        }

        Ok(SwipeOutcome {
            changed: sweep.changed,
            placed,
            lost: self.lost,
        })
    }

    /// Render, pause, place a random tile, render again.
    pub fn complete_turn<P: Presenter>(
        &mut self,
        presenter: &mut P,
    ) -> Result<Option<Placement>, P::Error> {
        self.message = None;
        presenter.present(&self.board, &self.status())?;
        presenter.pause(self.turn_pause);

        let placed = self.board.place_random(&mut self.rng);
        if placed.is_none() {
            warn!("turn completed on a full board; no tile placed");
        }

        presenter.present(&self.board, &self.status())?;
        Ok(placed)
    }

    /// Swap two random tiles with different values. Allowed once per game.
    ///
    /// Does not count as a turn: no tile is placed afterwards.
    pub fn swap<P: Presenter>(&mut self, presenter: &mut P) -> Result<SwapOutcome, P::Error> {
        let outcome = if !self.swap_available {
            SwapOutcome::AlreadyUsed
        } else {
            match self.board.swap_random(&mut self.rng) {
                Some((a, b)) => {
                    self.swap_available = false;
                    SwapOutcome::Swapped { a, b }
                }
                None => SwapOutcome::NotPossible,
            }
        };

        self.message = Some(
            match outcome {
                SwapOutcome::Swapped { .. } => "Swapped two tiles",
                SwapOutcome::AlreadyUsed => "The swap has already been used this game",
                SwapOutcome::NotPossible => "Cannot swap: need two different tiles",
            }
            .to_string(),
        );
        match outcome {
            SwapOutcome::Swapped { a, b } => debug!("swapped {a:?} <-> {b:?}"),
            _ => warn!("swap refused: {outcome:?}"),
        }

        self.lost = self.board.has_lost();
        presenter.present(&self.board, &self.status())?;
        Ok(outcome)
    }

    /// Throw the board away and start over at the same size
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.swap_available = true;
        self.lost = false;
        self.message = None;
        self.place_opening_tile();
        info!("game restarted");
    }

    fn place_opening_tile(&mut self) {
        if self.board.place_random(&mut self.rng).is_none() {
            warn!("no room for the opening tile");
        }
    }
}

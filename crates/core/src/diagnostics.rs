//! Self-checks reachable from the game's diagnostics menu.
//!
//! Each check exercises one part of the core against a fresh board and
//! collects a human-readable transcript. A check never panics on failure; it
//! records a failed line and carries on, so the menu can show everything that
//! went wrong at once.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::game::{Game, Presenter, Status};
use crate::rng::SimpleRng;
use crate::types::Tile;

/// The available checks, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    Accessors,
    Placement,
    LossDetection,
    TurnCompletion,
}

impl Diagnostic {
    pub const ALL: [Diagnostic; 4] = [
        Diagnostic::Accessors,
        Diagnostic::Placement,
        Diagnostic::LossDetection,
        Diagnostic::TurnCompletion,
    ];

    /// Menu number (1-based)
    pub fn number(self) -> u8 {
        match self {
            Diagnostic::Accessors => 1,
            Diagnostic::Placement => 2,
            Diagnostic::LossDetection => 3,
            Diagnostic::TurnCompletion => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Diagnostic::Accessors => "get and set",
            Diagnostic::Placement => "random placement",
            Diagnostic::LossDetection => "loss detection",
            Diagnostic::TurnCompletion => "turn completion",
        }
    }
}

/// Transcript of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub diagnostic: Diagnostic,
    pub passed: bool,
    pub lines: Vec<String>,
}

impl DiagnosticReport {
    fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            passed: true,
            lines: Vec::new(),
        }
    }

    fn check(&mut self, ok: bool, what: &str) {
        if !ok {
            self.passed = false;
        }
        self.lines
            .push(format!("[{}] {what}", if ok { "ok" } else { "FAIL" }));
    }

    fn note(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// Run one check.
///
/// Only the turn-completion check draws through `presenter`; it also sleeps
/// for `turn_pause` and measures that the pause really happened.
pub fn run<P: Presenter>(
    diagnostic: Diagnostic,
    seed: u32,
    turn_pause: Duration,
    presenter: &mut P,
) -> Result<DiagnosticReport, P::Error> {
    let report = match diagnostic {
        Diagnostic::Accessors => accessors(),
        Diagnostic::Placement => placement(seed),
        Diagnostic::LossDetection => loss_detection(),
        Diagnostic::TurnCompletion => turn_completion(seed, turn_pause, presenter)?,
    };
    log::info!(
        "diagnostic '{}' {}",
        diagnostic.title(),
        if report.passed { "passed" } else { "failed" }
    );
    Ok(report)
}

fn accessors() -> DiagnosticReport {
    let mut report = DiagnosticReport::new(Diagnostic::Accessors);
    let n = 4i8;
    let mut board = Board::new(n as u8);

    report.check(
        board.get(-1, -1).is_none() && board.get(n, n).is_none(),
        "get outside the board returns nothing",
    );
    report.check(
        !board.set(-1, -1, None) && !board.set(n, n, None),
        "set outside the board fails",
    );

    let mut round_trip = true;
    let mut tile = Tile::TWO;
    for y in 0..n {
        for x in 0..n {
            board.set(x, y, Some(tile));
            round_trip &= board.get(x, y) == Some(Some(tile));
            tile = tile.doubled().unwrap_or(Tile::TWO);
        }
    }
    report.check(round_trip, "every set value reads back");
    report.check(board.is_full(), "N*N sets fill an N x N board");

    let mut large = Board::new(10);
    report.check(
        large.set(7, 7, Some(Tile::EIGHT)) && large.get(7, 7) == Some(Some(Tile::EIGHT)),
        "bounds follow the board size (10 x 10)",
    );
    report
}

fn placement(seed: u32) -> DiagnosticReport {
    let mut report = DiagnosticReport::new(Diagnostic::Placement);
    let mut rng = SimpleRng::new(seed);

    let mut small = Board::new(4);
    for _ in 0..16 {
        small.place_random(&mut rng);
    }
    report.check(small.is_full(), "16 placements fill a 4 x 4 board");
    report.check(
        small.place_random(&mut rng).is_none(),
        "placement on a full board reports failure",
    );

    let mut board = Board::new(10);
    while board.place_random(&mut rng).is_some() {}

    let (mut twos, mut fours, mut eights, mut other) = (0u32, 0u32, 0u32, 0u32);
    for (_, _, tile) in board.tiles() {
        match tile.value() {
            2 => twos += 1,
            4 => fours += 1,
            8 => eights += 1,
            _ => other += 1,
        }
    }

    report.check(board.is_full(), "no empty cells left on 10 x 10");
    report.check(other == 0, "only 2, 4 and 8 are placed");
    report.check(twos > fours && fours > eights, "more 2s than 4s than 8s");
    report.check((45..=75).contains(&twos), "2s within 45..=75");
    report.check((25..=50).contains(&fours), "4s within 25..=50");
    report.check(
        (1..=10).contains(&eights),
        "8s within 1..=10 (retry once before worrying)",
    );
    report.note(format!(
        "twos {twos}, fours {fours}, eights {eights} (expected about 60/37/3)"
    ));
    report
}

fn loss_detection() -> DiagnosticReport {
    let mut report = DiagnosticReport::new(Diagnostic::LossDetection);

    let mut board = Board::new(4);
    report.check(!board.has_lost(), "an empty board is not lost");
    board.set(0, 0, Some(Tile::TWO));
    report.check(!board.has_lost(), "a board with one tile is not lost");

    let mergeable = Board::from_rows(&[&[2, 2], &[2, 2]]);
    report.check(
        !mergeable.has_lost(),
        "a full board with a possible merge is not lost",
    );

    let stuck = Board::from_rows(&[&[4, 2], &[2, 4]]);
    report.check(stuck.has_lost(), "a full board with no moves is lost");
    report
}

/// Counts frames on the way through to the real presenter
struct Counting<'a, P> {
    inner: &'a mut P,
    frames: usize,
    paused: Duration,
}

impl<P: Presenter> Presenter for Counting<'_, P> {
    type Error = P::Error;

    fn present(&mut self, board: &Board, status: &Status) -> Result<(), Self::Error> {
        self.frames += 1;
        self.inner.present(board, status)
    }

    fn pause(&mut self, duration: Duration) {
        self.paused += duration;
        self.inner.pause(duration);
    }
}

fn turn_completion<P: Presenter>(
    seed: u32,
    turn_pause: Duration,
    presenter: &mut P,
) -> Result<DiagnosticReport, P::Error> {
    let mut report = DiagnosticReport::new(Diagnostic::TurnCompletion);
    let mut game = Game::with_board(Board::new(4), SimpleRng::new(seed)).with_turn_pause(turn_pause);
    let mut counting = Counting {
        inner: presenter,
        frames: 0,
        paused: Duration::ZERO,
    };

    for expected in 1..=2usize {
        game.complete_turn(&mut counting)?;
        report.check(
            game.board().tiles().count() == expected,
            &format!("turn {expected} leaves {expected} tile(s) on the board"),
        );
    }

    let started = Instant::now();
    game.complete_turn(&mut counting)?;
    let elapsed = started.elapsed();

    report.check(counting.frames == 6, "each turn draws the board twice");
    report.check(
        counting.paused == turn_pause * 3,
        "each turn pauses once for the configured delay",
    );
    report.check(elapsed >= turn_pause, "the pause actually blocks");
    report.note(format!(
        "one turn took {} ms (pause {} ms)",
        elapsed.as_millis(),
        turn_pause.as_millis()
    ));
    Ok(report)
}

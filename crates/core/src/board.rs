//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is either empty or holds a tile.
//! Uses a flat vector in row-major order (y * N + x); N is fixed at creation.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom), both in 0..N.
//!
//! Out-of-range coordinates are not errors: `get` returns `None` and `set`
//! returns `false`, and the move logic relies on that to find the board edges.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::{spawn_tile, RandomSource};
use crate::types::{Cell, Direction, Tile, MAX_BOARD_SIZE, SPAWN_ROLL_RANGE};

/// Result of one directional sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// At least one tile moved or merged
    pub changed: bool,
    /// Sum of the tiles created by merges during the sweep
    pub points: u32,
}

/// A tile placed by [`Board::place_random`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i8,
    pub y: i8,
    pub tile: Tile,
}

/// Per-sweep bookkeeping: which cells already hold a merge result.
struct SweepScratch {
    merged: Vec<bool>,
    points: u32,
}

impl SweepScratch {
    fn new(len: usize) -> Self {
        Self {
            merged: vec![false; len],
            points: 0,
        }
    }
}

/// The game board - N columns x N rows using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Flat vector of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty N x N board.
    ///
    /// # Panics
    ///
    /// If `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: u8) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size must be in 1..={MAX_BOARD_SIZE}, got {size}"
        );
        let len = size as usize * size as usize;
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Build a board from rows of raw values, 0 meaning empty.
    ///
    /// # Panics
    ///
    /// If the rows do not form a square or a value is not a valid tile.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let mut board = Self::new(rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), rows.len(), "row {y} has the wrong length");
            for (x, &value) in row.iter().enumerate() {
                let cell = match value {
                    0 => None,
                    v => Some(Tile::new(v).unwrap_or_else(|| panic!("{v} is not a tile value"))),
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        board
    }

    /// Convert to rows of raw values (0 = empty)
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size as usize)
            .map(|row| row.iter().map(|c| c.map_or(0, Tile::value)).collect())
            .collect()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        let n = self.size as i8;
        if x < 0 || x >= n || y < 0 || y >= n {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    /// Edge length N
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y), overwriting whatever is there
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// In-bounds orthogonal neighbours of (x, y)
    fn neighbors(&self, x: i8, y: i8) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if self.index(nx, ny).is_some() {
                out.push((nx, ny));
            }
        }
        out
    }

    /// Whether a move could start from (x, y).
    ///
    /// False off the board, true for an empty cell, otherwise true iff an
    /// orthogonal neighbour holds the same tile.
    pub fn move_possible(&self, x: i8, y: i8) -> bool {
        match self.get(x, y) {
            None => false,
            Some(None) => true,
            Some(Some(tile)) => self
                .neighbors(x, y)
                .iter()
                .any(|&(nx, ny)| self.get(nx, ny) == Some(Some(tile))),
        }
    }

    /// True iff no cell admits a move (full board, no equal neighbours)
    pub fn has_lost(&self) -> bool {
        let n = self.size as i8;
        !(0..n).any(|y| (0..n).any(|x| self.move_possible(x, y)))
    }

    /// Move the tile at (x, y) one step in `direction`, then keep sliding.
    ///
    /// Returns whether anything changed. The source cell must hold a tile.
    /// A lone call gets its own merge bookkeeping; inside [`Board::sweep`]
    /// the bookkeeping spans the whole sweep.
    pub fn move_piece(&mut self, x: i8, y: i8, direction: Direction) -> bool {
        let mut scratch = SweepScratch::new(self.cells.len());
        self.step(x, y, direction, &mut scratch)
    }

    fn step(&mut self, mut x: i8, mut y: i8, direction: Direction, scratch: &mut SweepScratch) -> bool {
        let mut tile = match self.get(x, y) {
            Some(Some(tile)) => tile,
            _ => {
                debug_assert!(false, "move_piece on empty or off-board cell ({x}, {y})");
                return false;
            }
        };

        let (dx, dy) = direction.delta();
        let mut changed = false;

        loop {
            let (nx, ny) = (x + dx, y + dy);
            let (Some(from), Some(to)) = (self.index(x, y), self.index(nx, ny)) else {
                // Edge of the board.
                break;
            };

            let target = self.cells[to];
            match target {
                None => {
                    self.cells[to] = Some(tile);
                    self.cells[from] = None;
                    scratch.merged[to] = scratch.merged[from];
                    scratch.merged[from] = false;
                }
                // A merge result carries its flag along, so it never merges twice.
                Some(other) if other == tile && !scratch.merged[from] && !scratch.merged[to] => {
                    // 2^31 has no double; such a pair stays put.
                    let Some(merged) = tile.doubled() else {
                        break;
                    };
                    tile = merged;
                    self.cells[to] = Some(tile);
                    self.cells[from] = None;
                    scratch.merged[to] = true;
                    scratch.merged[from] = false;
                    scratch.points = scratch.points.saturating_add(tile.value());
                }
                // Blocked by an unequal tile (or one that already merged).
                Some(_) => break,
            }

            changed = true;
            x = nx;
            y = ny;
        }

        changed
    }

    /// Swipe the whole board in `direction`.
    ///
    /// Cells nearest the target edge are visited first so that no tile can
    /// jump over one that has not moved yet. Each tile merges at most once per
    /// sweep, and a merge result never absorbs another tile in the same sweep.
    pub fn sweep(&mut self, direction: Direction) -> SweepOutcome {
        let (dx, dy) = direction.delta();
        let mut scratch = SweepScratch::new(self.cells.len());
        let mut changed = false;

        for (x, y) in sweep_order(self.size as i8, direction) {
            if !matches!(self.get(x, y), Some(Some(_))) {
                continue;
            }
            if self.get(x + dx, y + dy).is_none() {
                continue;
            }
            changed = self.step(x, y, direction, &mut scratch) || changed;
        }

        SweepOutcome {
            changed,
            points: scratch.points,
        }
    }

    /// Place a 2 (60%), 4 (37%) or 8 (3%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` (and leaves the board untouched) when the board is full.
    pub fn place_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Placement> {
        if self.is_full() {
            return None;
        }

        let tile = spawn_tile(rng.below(SPAWN_ROLL_RANGE));
        let n = self.size as u32;
        loop {
            let y = rng.below(n) as i8;
            let x = rng.below(n) as i8;
            if self.is_empty_at(x, y) {
                self.set(x, y, Some(tile));
                return Some(Placement { x, y, tile });
            }
        }
    }

    /// A swap needs at least two tiles with different values
    pub fn swap_possible(&self) -> bool {
        let mut tiles = self.cells.iter().flatten();
        match tiles.next() {
            Some(first) => tiles.any(|t| t != first),
            None => false,
        }
    }

    /// Swap two randomly chosen tiles holding different values.
    ///
    /// Returns the two swapped positions, or `None` if no swap is possible.
    pub fn swap_random<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<((i8, i8), (i8, i8))> {
        if !self.swap_possible() {
            return None;
        }

        let n = self.size as u32;
        let (ax, ay, a) = loop {
            let (x, y) = (rng.below(n) as i8, rng.below(n) as i8);
            if let Some(Some(tile)) = self.get(x, y) {
                break (x, y, tile);
            }
        };
        let (bx, by, b) = loop {
            let (x, y) = (rng.below(n) as i8, rng.below(n) as i8);
            match self.get(x, y) {
                Some(Some(tile)) if tile != a => break (x, y, tile),
                _ => {}
            }
        };

        self.set(ax, ay, Some(b));
        self.set(bx, by, Some(a));
        Some(((ax, ay), (bx, by)))
    }

    /// All tiles with their positions, row by row
    pub fn tiles(&self) -> impl Iterator<Item = (i8, i8, Tile)> + '_ {
        let n = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|t| ((i % n) as i8, (i / n) as i8, t)))
    }

    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Visit order for a sweep: rows (or columns) nearest the target edge first.
///
/// Left and up walk ascending; right walks each row right-to-left; down walks
/// the rows bottom-to-top with columns ascending.
fn sweep_order(n: i8, direction: Direction) -> impl Iterator<Item = (i8, i8)> {
    (0..n).flat_map(move |outer| {
        (0..n).map(move |inner| match direction {
            Direction::Left | Direction::Up => (inner, outer),
            Direction::Right => (n - 1 - inner, outer),
            Direction::Down => (inner, n - 1 - outer),
        })
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size as usize) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>5}", tile.value())?,
                    None => write!(f, "{:>5}", "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(3, 0), Some(3));
        assert_eq!(board.index(0, 1), Some(4));
        assert_eq!(board.index(3, 3), Some(15));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(4, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_sweep_order_visits_every_cell_once() {
        for dir in Direction::ALL {
            let mut seen: Vec<(i8, i8)> = sweep_order(3, dir).collect();
            assert_eq!(seen.len(), 9);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 9, "{dir:?} visited a cell twice");
        }
    }

    #[test]
    fn test_sweep_order_starts_at_target_edge() {
        assert_eq!(sweep_order(3, Direction::Left).next(), Some((0, 0)));
        assert_eq!(sweep_order(3, Direction::Up).next(), Some((0, 0)));
        assert_eq!(sweep_order(3, Direction::Right).next(), Some((2, 0)));
        assert_eq!(sweep_order(3, Direction::Down).next(), Some((0, 2)));

        let right: Vec<_> = sweep_order(3, Direction::Right).take(3).collect();
        assert_eq!(right, vec![(2, 0), (1, 0), (0, 0)]);
        let down: Vec<_> = sweep_order(3, Direction::Down).take(4).collect();
        assert_eq!(down, vec![(0, 2), (1, 2), (2, 2), (0, 1)]);
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        let board = Board::new(3);
        assert_eq!(board.neighbors(0, 0).len(), 2);
        assert_eq!(board.neighbors(1, 0).len(), 3);
        assert_eq!(board.neighbors(1, 1).len(), 4);
        assert!(board.neighbors(5, 5).is_empty());
        // Far outside the board; stepping further must not overflow.
        assert!(board.neighbors(i8::MAX, 0).is_empty());
        assert!(board.neighbors(0, i8::MIN).is_empty());
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let top = 1u32 << 31;
        let mut board = Board::from_rows(&[&[0, top, top], &[0, 0, 0], &[0, 0, 0]]);
        let outcome = board.sweep(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.points, 0);
        assert_eq!(board.to_rows()[0], vec![top, top, 0]);
    }

    #[test]
    fn test_max_tile_and_clear() {
        let mut board = Board::from_rows(&[&[2, 0, 64], &[0, 8, 0], &[0, 0, 4]]);
        assert_eq!(board.max_tile(), Tile::new(64));

        board.clear();
        assert_eq!(board, Board::new(3));
        assert_eq!(board.max_tile(), None);
    }

    #[test]
    fn test_merge_result_does_not_chain() {
        // The 2s merge into a 4 next to an existing 4; no second merge.
        let mut board = Board::from_rows(&[&[4, 2, 2], &[0, 0, 0], &[0, 0, 0]]);
        let outcome = board.sweep(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.points, 4);
        assert_eq!(board.to_rows()[0], vec![4, 4, 0]);
    }

    #[test]
    fn test_fresh_merge_blocks_equal_tile_gliding_in() {
        let mut board = Board::from_rows(&[&[2, 2, 0, 4], &[0; 4], &[0; 4], &[0; 4]]);
        let outcome = board.sweep(Direction::Left);
        // The trailing 4 glides up to the fresh 4 and stops beside it.
        assert_eq!(board.to_rows()[0], vec![4, 4, 0, 0]);
        assert_eq!(outcome.points, 4);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let board = Board::from_rows(&[&[2, 0], &[0, 1024]]);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains('*'));
        assert!(text.contains("1024"));
    }
}

//! Board tests - accessors, move possibility and loss detection

use term_2048::core::Board;
use term_2048::types::Tile;

fn tile(v: u32) -> Option<Tile> {
    Tile::new(v)
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
    assert!(!board.is_full());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(4);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 4), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(4);

    assert!(board.set(1, 2, tile(8)));
    assert_eq!(board.get(1, 2), Some(tile(8)));

    // Overwrite, then clear
    assert!(board.set(1, 2, tile(2)));
    assert_eq!(board.get(1, 2), Some(tile(2)));
    assert!(board.set(1, 2, None));
    assert_eq!(board.get(1, 2), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(4);

    assert!(!board.set(-1, 0, tile(2)));
    assert!(!board.set(0, -1, tile(2)));
    assert!(!board.set(4, 0, tile(2)));
    assert!(!board.set(0, 4, tile(2)));
    assert_eq!(board, Board::new(4));
}

#[test]
fn test_board_full_after_every_cell_set() {
    for n in 1..=5u8 {
        let mut board = Board::new(n);
        for y in 0..n as i8 {
            for x in 0..n as i8 {
                assert!(!board.is_full());
                assert!(board.set(x, y, tile(2)));
            }
        }
        assert!(board.is_full(), "{n}x{n} board should be full");
    }
}

#[test]
fn test_rows_round_trip() {
    let rows: &[&[u32]] = &[&[2, 0, 4], &[0, 8, 0], &[16, 0, 2048]];
    let board = Board::from_rows(rows);

    assert_eq!(board.get(2, 2), Some(tile(2048)));
    assert_eq!(board.get(1, 0), Some(None));
    assert_eq!(
        board.to_rows(),
        vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 2048]]
    );
}

#[test]
fn test_move_possible() {
    let board = Board::from_rows(&[
        &[2, 2, 4, 8],
        &[4, 8, 16, 0],
        &[8, 16, 32, 64],
        &[16, 32, 64, 128],
    ]);

    // Off the board
    assert!(!board.move_possible(-1, 0));
    assert!(!board.move_possible(0, 4));
    // Empty cell
    assert!(board.move_possible(3, 1));
    // Equal horizontal neighbours
    assert!(board.move_possible(0, 0));
    assert!(board.move_possible(1, 0));
    // Neighbours all different
    assert!(!board.move_possible(0, 1));
    assert!(!board.move_possible(2, 2));
}

#[test]
fn test_move_possible_vertical_neighbour() {
    let board = Board::from_rows(&[&[2, 4], &[2, 8]]);

    assert!(board.move_possible(0, 0));
    assert!(board.move_possible(0, 1));
    assert!(!board.move_possible(1, 0));
}

#[test]
fn test_checkerboard_is_lost() {
    let board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]);
    assert!(board.is_full());
    assert!(board.has_lost());
}

#[test]
fn test_checkerboard_with_a_hole_is_not_lost() {
    let mut board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]);
    board.set(3, 3, None);
    assert!(!board.has_lost());
}

#[test]
fn test_full_board_with_equal_pair_is_not_lost() {
    let board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 4],
    ]);
    assert!(board.is_full());
    assert!(!board.has_lost());
}

#[test]
fn test_empty_board_is_not_lost() {
    assert!(!Board::new(4).has_lost());
    assert!(!Board::new(1).has_lost());
}

#[test]
fn test_single_cell_board_lost_once_filled() {
    let board = Board::from_rows(&[&[2]]);
    assert!(board.has_lost());
}

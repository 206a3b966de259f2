//! Board tests - collision, write and clear

use line_tetris::core::{orientation_count, Board, Piece};
use line_tetris::types::{Direction, ShapeKind};

fn placed(kind: ShapeKind, orientation: usize, row: i32, column: i32) -> Piece {
    let mut p = Piece::new(kind, orientation);
    p.set_row(row);
    p.set_column(column);
    p
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    for row in 0..20 {
        for column in 0..10 {
            assert_eq!(board.get(row, column), Some(0));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
}

#[test]
fn test_board_set_out_of_bounds_is_refused() {
    let mut board = Board::new(4, 4);
    assert!(!board.set(-1, 0, 1));
    assert!(!board.set(0, 4, 1));
    assert!(board.set(3, 3, 1));
    assert_eq!(board.locked_count(), 1);
}

#[test]
fn test_default_board_size() {
    let board = Board::default();
    assert_eq!((board.width(), board.height()), (10, 20));
}

#[test]
fn test_down_collision_at_floor_for_every_state() {
    let board = Board::new(8, 8);
    for kind in ShapeKind::ALL {
        for orientation in 0..orientation_count(kind) {
            let p = Piece::new(kind, orientation);
            let resting = 8 - 1 - p.bottom_row();
            assert!(!board.collides(&placed(kind, orientation, resting, 2), Direction::Down));
            assert!(board.collides(&placed(kind, orientation, resting + 1, 2), Direction::Down));
        }
    }
}

#[test]
fn test_wall_checked_before_overlap() {
    // Piece overlaps nothing but sits past the right wall.
    let board = Board::new(4, 4);
    let p = placed(ShapeKind::I, 0, 0, 1);
    assert!(board.collides(&p, Direction::Right));
    // The same piece probed downward only sees the floor rule.
    assert!(!board.collides(&p, Direction::Down));
}

#[test]
fn test_write_then_clear_round_trips() {
    let original = Board::from_rows(&["......", "#....#", "......", "##..##"]);
    let mut board = original.clone();
    let p = placed(ShapeKind::L, 1, 0, 2);
    assert!(!board.collides(&p, Direction::Down));

    board.write(&p);
    assert_eq!(board.locked_count(), original.locked_count() + 4);
    board.clear(&p);
    assert_eq!(board, original);
}

#[test]
fn test_write_off_top_keeps_visible_part() {
    let mut board = Board::new(5, 5);
    // Z orientation 0: rows 1..=2 locally; at row -2 only local row 2 shows.
    let p = placed(ShapeKind::Z, 0, -2, 1);
    board.write(&p);
    assert_eq!(board.locked_count(), 2);
    assert!(board.is_locked(0, 2));
    assert!(board.is_locked(0, 3));
    board.clear(&p);
    assert_eq!(board.locked_count(), 0);
}

#[test]
fn test_from_rows_pads_short_rows() {
    let board = Board::from_rows(&["*", "..#"]);
    assert_eq!((board.width(), board.height()), (3, 2));
    assert!(board.is_locked(0, 0));
    assert!(!board.is_locked(0, 2));
    assert!(board.is_locked(1, 2));
}

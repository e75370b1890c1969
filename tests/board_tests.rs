//! Board tests

use tui_2048::core::board::{is_power_tile_equal, is_tile_value, MAX_TILE_VALUE};
use tui_2048::core::Board;
use tui_2048::types::{Direction, TileId, BOARD_SIZE, CELL_COUNT};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.empty_cells().len(), CELL_COUNT);
    assert!(board.has_any_empty_cell());
    assert!(!board.has_any_adjacent_equal_pair());
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.value(0, BOARD_SIZE), 0);
    assert_eq!(board.place_tile(BOARD_SIZE, 0, 2), None);
}

#[test]
fn test_place_tile_rejects_bad_values_and_occupied_cells() {
    let mut board = Board::new();
    assert_eq!(board.place_tile(1, 1, 3), None);
    assert_eq!(board.place_tile(1, 1, 1), None);
    assert_eq!(board.place_tile(1, 1, 0), None);
    let id = board.place_tile(1, 1, 2).unwrap();
    assert_eq!(board.place_tile(1, 1, 4), None);
    assert_eq!(board.get(1, 1).unwrap().id, id);
}

#[test]
fn test_ids_are_unique_and_row_major() {
    let mut board = Board::from_values([[2, 0, 0, 4], [0; 4], [8, 0, 0, 0], [0; 4]]);
    assert_eq!(board.get(0, 0).unwrap().id, TileId(1));
    assert_eq!(board.get(0, 3).unwrap().id, TileId(2));
    assert_eq!(board.get(2, 0).unwrap().id, TileId(3));
    assert_eq!(board.place_tile(3, 3, 2), Some(TileId(4)));
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::from_values([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 0], [2, 2, 2, 2]]);
    let empty: Vec<_> = board.empty_cells().into_iter().collect();
    assert_eq!(empty, vec![(1, 1), (2, 3)]);
}

#[test]
fn test_adjacent_pairs_ignore_wraparound() {
    // Row end (0,3)=4 and next row start (1,0)=4 are not neighbours.
    let board = Board::from_values([[2, 8, 2, 4], [4, 2, 8, 2], [2, 8, 2, 8], [8, 2, 8, 2]]);
    assert!(!board.has_any_adjacent_equal_pair());

    let board = Board::from_values([[2, 8, 2, 4], [4, 2, 8, 4], [2, 8, 2, 8], [8, 2, 8, 2]]);
    assert!(board.has_any_adjacent_equal_pair());
}

#[test]
fn test_power_tile_equality() {
    assert!(is_power_tile_equal(2, 2));
    assert!(!is_power_tile_equal(0, 0));
    assert!(!is_power_tile_equal(2, 4));
    assert!(is_tile_value(2048));
    assert!(!is_tile_value(6));
    assert!(is_tile_value(MAX_TILE_VALUE));
    assert!(!is_tile_value(MAX_TILE_VALUE << 1));
}

#[test]
fn test_from_values_skips_values_past_the_cap() {
    let board = Board::from_values([[1 << 31, 1 << 30, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(board.value(0, 0), 0);
    assert_eq!(board.value(0, 1), MAX_TILE_VALUE);
    assert_eq!(board.tile_count(), 1);
}

#[test]
fn test_lanes_read_in_direction_of_travel() {
    let board = Board::from_values([[1 << 1, 1 << 2, 1 << 3, 1 << 4], [0; 4], [0; 4], [0, 0, 0, 1 << 5]]);
    let values = |dir, index| board.lane(dir, index).map(|t| t.map_or(0, |t| t.value));

    assert_eq!(values(Direction::Left, 0), [2, 4, 8, 16]);
    assert_eq!(values(Direction::Right, 0), [16, 8, 4, 2]);
    assert_eq!(values(Direction::Up, 3), [16, 0, 0, 32]);
    assert_eq!(values(Direction::Down, 3), [32, 0, 0, 16]);
}

#[test]
fn test_write_lane_roundtrips() {
    let board = Board::from_values([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    for dir in Direction::ALL {
        for index in 0..BOARD_SIZE {
            let mut copy = board.clone();
            copy.write_lane(dir, index, &board.lane(dir, index));
            assert_eq!(copy, board);
        }
    }
}

#[test]
fn test_values_roundtrip_and_max() {
    let grid = [[2, 0, 0, 0], [0, 64, 0, 0], [0, 0, 4, 0], [0, 0, 0, 1024]];
    let board = Board::from_values(grid);
    assert_eq!(board.values(), grid);
    assert_eq!(board.max_value(), 1024);
    assert!(board.contains_value(64));
    assert!(!board.contains_value(8));
}

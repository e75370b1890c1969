//! Movement records - where each tile went during a move
//!
//! Records drive the slide animation only; game logic never reads them.
//!
//! Two ways to get them:
//!
//! - [`collect_lane`] (used by [`crate::engine::compute`]) threads tile ids
//!   through the slide/merge pass, so every record is exact.
//! - [`reconcile`] works from a before/after pair of value grids alone by
//!   searching along the direction of travel. It is for callers that only keep
//!   value grids; with equal values converging on one lane it may pick a
//!   different (equally plausible) tile as the mover.

use arrayvec::ArrayVec;

use crate::board::{Board, Lane};
use crate::engine::{LaneSlide, LaneSource};
use crate::types::{Direction, TileId, BOARD_SIZE, CELL_COUNT};

/// Movement of one tile during one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovementRecord {
    pub id: TileId,
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
    /// Value before the move (pre-merge)
    pub value: u32,
    /// This tile took part in a merge
    pub merged: bool,
    /// This tile was consumed by the merge (its id ends at the target)
    pub absorbed: bool,
}

impl MovementRecord {
    /// Whether the tile changes cell
    pub fn travels(&self) -> bool {
        self.from_row != self.to_row || self.from_col != self.to_col
    }

    /// Number of cells travelled
    pub fn distance(&self) -> usize {
        self.from_row.abs_diff(self.to_row) + self.from_col.abs_diff(self.to_col)
    }

    /// Value shown at the target once the move settles
    pub fn settled_value(&self) -> u32 {
        if self.merged {
            self.value.saturating_mul(2)
        } else {
            self.value
        }
    }
}

/// All records for one move (one per tile at most)
pub type Movements = ArrayVec<MovementRecord, CELL_COUNT>;

/// Append the records for one lane of a move
///
/// Stationary tiles that did not merge produce no record. A merge produces two
/// records, both `merged`: the survivor (keeps its id) and the absorbed tile.
pub fn collect_lane(before: &Lane, slide: &LaneSlide, direction: Direction, index: usize, out: &mut Movements) {
    for (dst, source) in slide.sources.iter().enumerate() {
        let (to_row, to_col) = Board::lane_position(direction, index, dst);
        match *source {
            LaneSource::Empty => {}
            LaneSource::Slid(src) => {
                if src == dst {
                    continue;
                }
                if let Some(tile) = before[src] {
                    let (from_row, from_col) = Board::lane_position(direction, index, src);
                    out.push(MovementRecord {
                        id: tile.id,
                        from_row,
                        from_col,
                        to_row,
                        to_col,
                        value: tile.value,
                        merged: false,
                        absorbed: false,
                    });
                }
            }
            LaneSource::Merged(first, second) => {
                for (src, absorbed) in [(first, false), (second, true)] {
                    if let Some(tile) = before[src] {
                        let (from_row, from_col) = Board::lane_position(direction, index, src);
                        out.push(MovementRecord {
                            id: tile.id,
                            from_row,
                            from_col,
                            to_row,
                            to_col,
                            value: tile.value,
                            merged: true,
                            absorbed,
                        });
                    }
                }
            }
        }
    }
}

/// Value grid used by [`reconcile`]
pub type ValueGrid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// What the directional search decided for one source tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconcileOutcome {
    /// Plain slide to a cell that now holds the same value
    Moved { to_row: usize, to_col: usize },
    /// One of the two tiles that fused into a cell now holding double the value
    Merged { to_row: usize, to_col: usize },
    /// No destination found; fade out in place
    Removed,
}

/// Search result for one non-stationary source tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reconciled {
    pub from_row: usize,
    pub from_col: usize,
    pub value: u32,
    pub outcome: ReconcileOutcome,
}

/// Cells strictly beyond `(row, col)` in the direction of travel, nearest first
pub fn search_path(row: usize, col: usize, direction: Direction) -> ArrayVec<(usize, usize), BOARD_SIZE> {
    let (dr, dc) = direction.delta();
    let mut out = ArrayVec::new();
    let mut r = row as i8;
    let mut c = col as i8;
    loop {
        r += dr;
        c += dc;
        if r < 0 || c < 0 || r >= BOARD_SIZE as i8 || c >= BOARD_SIZE as i8 {
            break;
        }
        out.push((r as usize, c as usize));
    }
    out
}

/// Derive movement from a before/after pair of value grids
///
/// Sources are visited in row-major order. A tile whose cell still holds its
/// value is stationary and yields nothing. Otherwise the search walks toward
/// the wall looking first for an unclaimed cell that now holds the same value
/// and did not hold it before, then for one that now holds double the value
/// and did not hold that before. Claimed cells are never matched twice.
pub fn reconcile(old: &ValueGrid, new: &ValueGrid, direction: Direction) -> ArrayVec<Reconciled, CELL_COUNT> {
    let mut claimed = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut out = ArrayVec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = old[row][col];
            if value == 0 || new[row][col] == value {
                continue;
            }

            let path = search_path(row, col, direction);
            let find = |target: u32, claimed: &[[bool; BOARD_SIZE]; BOARD_SIZE]| {
                path.iter().copied().find(|&(r, c)| {
                    !claimed[r][c] && new[r][c] == target && old[r][c] != target
                })
            };

            let outcome = if let Some((r, c)) = find(value, &claimed) {
                claimed[r][c] = true;
                ReconcileOutcome::Moved { to_row: r, to_col: c }
            } else if let Some((r, c)) = find(value.saturating_mul(2), &claimed) {
                claimed[r][c] = true;
                ReconcileOutcome::Merged { to_row: r, to_col: c }
            } else {
                ReconcileOutcome::Removed
            };

            out.push(Reconciled {
                from_row: row,
                from_col: col,
                value,
                outcome,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;

    #[test]
    fn test_records_track_ids_through_slide() {
        let board = Board::from_values([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let id = board.get(0, 3).unwrap().id;
        let t = compute(&board, Direction::Left);
        assert_eq!(t.movements.len(), 1);
        let rec = t.movements[0];
        assert_eq!(rec.id, id);
        assert_eq!((rec.from_row, rec.from_col, rec.to_row, rec.to_col), (0, 3, 0, 0));
        assert!(!rec.merged);
        assert_eq!(rec.distance(), 3);
    }

    #[test]
    fn test_merge_yields_survivor_and_absorbed() {
        let board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let left_id = board.get(0, 0).unwrap().id;
        let right_id = board.get(0, 1).unwrap().id;
        let t = compute(&board, Direction::Left);

        assert_eq!(t.movements.len(), 2);
        let survivor = t.movements.iter().find(|r| !r.absorbed).unwrap();
        let absorbed = t.movements.iter().find(|r| r.absorbed).unwrap();

        assert_eq!(survivor.id, left_id);
        assert!(survivor.merged);
        assert!(!survivor.travels());
        assert_eq!(survivor.settled_value(), 4);

        assert_eq!(absorbed.id, right_id);
        assert!(absorbed.merged);
        assert_eq!((absorbed.to_row, absorbed.to_col), (0, 0));
        assert_eq!(t.board.get(0, 0).unwrap().id, left_id);
    }

    #[test]
    fn test_stationary_tiles_have_no_record() {
        let board = Board::from_values([[2, 4, 0, 0], [0; 4], [0; 4], [8, 0, 0, 0]]);
        let t = compute(&board, Direction::Left);
        assert!(!t.moved);
        assert!(t.movements.is_empty());
    }

    #[test]
    fn test_search_path_stops_at_edge() {
        assert_eq!(search_path(0, 1, Direction::Left).as_slice(), &[(0, 0)]);
        assert_eq!(search_path(1, 1, Direction::Down).as_slice(), &[(2, 1), (3, 1)]);
        assert!(search_path(0, 2, Direction::Up).is_empty());
    }

    #[test]
    fn test_reconcile_plain_slide() {
        let old = [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]];
        let new = [[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        let out = reconcile(&old, &new, Direction::Left);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].outcome, ReconcileOutcome::Moved { to_row: 0, to_col: 0 });
    }

    #[test]
    fn test_reconcile_merge_against_wall_fades_leading_tile() {
        // The leading 2 sits at the wall: its cell now holds 4 and there is no
        // path left, so the search reports it removed; the trailing 2 merges.
        let old = [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
        let new = [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        let out = reconcile(&old, &new, Direction::Left);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].outcome, ReconcileOutcome::Removed);
        assert_eq!(out[1].outcome, ReconcileOutcome::Merged { to_row: 0, to_col: 0 });
    }

    #[test]
    fn test_reconcile_skips_cells_that_already_held_the_value() {
        // (0,1) held a 2 before the move, so the 2 from (0,3) cannot have
        // slid there; it merged into the 4 at the wall instead.
        let old = [[2, 2, 0, 2], [0; 4], [0; 4], [0; 4]];
        let new = [[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
        let out = reconcile(&old, &new, Direction::Left);
        let last = out.iter().find(|r| (r.from_row, r.from_col) == (0, 3)).unwrap();
        assert_eq!(last.outcome, ReconcileOutcome::Merged { to_row: 0, to_col: 0 });
        assert!(out.iter().all(|r| (r.from_row, r.from_col) != (0, 1)));
    }

    #[test]
    fn test_reconcile_claims_each_target_once() {
        let old = [[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]];
        let new = [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        let out = reconcile(&old, &new, Direction::Left);
        assert_eq!(out[0].outcome, ReconcileOutcome::Merged { to_row: 0, to_col: 0 });
        // The second 2 finds the 4 already claimed.
        assert_eq!(out[1].outcome, ReconcileOutcome::Removed);
    }
}

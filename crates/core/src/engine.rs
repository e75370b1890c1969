//! Transition engine - computes the board that follows a swipe
//!
//! Every direction is reduced to the same problem: read each lane in the
//! direction of travel so that tiles slide toward index 0, then
//!
//! 1. drop the empty cells,
//! 2. merge equal neighbours front to back, each tile at most once per move
//!    (`[2, 2, 2, 2]` becomes `[4, 4]`, never `[8]`),
//! 3. pad with empty cells and write the lane back.
//!
//! [`compute`] is pure. [`apply`] adds the single random spawn, which happens
//! only when the move changed the board.

use arrayvec::ArrayVec;

use crate::board::{Board, Lane, Tile};
use crate::movement::{self, Movements};
use crate::rng::RandomSource;
use crate::types::{Direction, TileId, BOARD_SIZE, SPAWN_FOUR_CHANCE_PERCENT};

/// Where the tile in one output slot of a lane came from (travel-order indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneSource {
    #[default]
    Empty,
    /// A single tile slid (or stayed) here
    Slid(usize),
    /// Two tiles fused here; the first keeps its id, the second is absorbed
    Merged(usize, usize),
}

/// Result of sliding one lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSlide {
    /// Final lane in travel order
    pub lane: Lane,
    /// Origin of each output slot
    pub sources: [LaneSource; BOARD_SIZE],
    /// Sum of the values produced by merges in this lane
    pub score: u32,
    /// Whether any cell value differs from the input lane
    pub moved: bool,
}

/// Slide and merge a single lane toward index 0
pub fn slide_lane(lane: &Lane) -> LaneSlide {
    let filtered: ArrayVec<(usize, Tile), BOARD_SIZE> = lane
        .iter()
        .enumerate()
        .filter_map(|(step, cell)| cell.map(|tile| (step, tile)))
        .collect();

    let mut out: Lane = [None; BOARD_SIZE];
    let mut sources = [LaneSource::Empty; BOARD_SIZE];
    let mut score = 0u32;
    let mut write = 0usize;
    let mut i = 0usize;

    while i < filtered.len() {
        let (src, tile) = filtered[i];
        let merged = filtered
            .get(i + 1)
            .filter(|(_, next)| next.value == tile.value)
            .and_then(|&(next_src, next)| Some((next_src, next.value.checked_mul(2)?)));
        match merged {
            Some((next_src, value)) => {
                out[write] = Some(Tile { id: tile.id, value });
                sources[write] = LaneSource::Merged(src, next_src);
                score = score.saturating_add(value);
                // The absorbed tile is consumed; never compare the result again.
                i += 2;
            }
            None => {
                out[write] = Some(tile);
                sources[write] = LaneSource::Slid(src);
                i += 1;
            }
        }
        write += 1;
    }

    let moved = out
        .iter()
        .zip(lane.iter())
        .any(|(a, b)| a.map(|t| t.value) != b.map(|t| t.value));

    LaneSlide {
        lane: out,
        sources,
        score,
        moved,
    }
}

/// Slide a lane of plain values (0 = empty); returns the new lane and its score
///
/// # Examples
///
/// ```
/// use tui_2048_core::engine::slide_values;
///
/// assert_eq!(slide_values([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(slide_values([2, 0, 2, 4]), ([4, 4, 0, 0], 4));
/// ```
pub fn slide_values(values: [u32; BOARD_SIZE]) -> ([u32; BOARD_SIZE], u32) {
    let mut lane: Lane = [None; BOARD_SIZE];
    for (i, &value) in values.iter().enumerate() {
        if value != 0 {
            lane[i] = Some(Tile {
                id: TileId(i as u32 + 1),
                value,
            });
        }
    }
    let slide = slide_lane(&lane);
    let mut out = [0u32; BOARD_SIZE];
    for (dst, cell) in out.iter_mut().zip(slide.lane.iter()) {
        *dst = cell.map_or(0, |t| t.value);
    }
    (out, slide.score)
}

/// A move applied to a board, before the new tile spawns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub direction: Direction,
    /// Board before the move
    pub before: Board,
    /// Board after sliding and merging (no spawn yet)
    pub board: Board,
    pub score_gained: u32,
    pub moved: bool,
    /// Per-tile movement for the animation pass
    pub movements: Movements,
}

/// Compute the slide of `board` in `direction` without spawning
pub fn compute(board: &Board, direction: Direction) -> Transition {
    let mut next = board.clone();
    let mut score_gained = 0u32;
    let mut moved = false;
    let mut movements = Movements::new();

    for index in 0..BOARD_SIZE {
        let lane = board.lane(direction, index);
        let slide = slide_lane(&lane);
        if slide.moved {
            moved = true;
            next.write_lane(direction, index, &slide.lane);
        }
        score_gained = score_gained.saturating_add(slide.score);
        movement::collect_lane(&lane, &slide, direction, index, &mut movements);
    }

    Transition {
        direction,
        before: board.clone(),
        board: next,
        score_gained,
        moved,
        movements,
    }
}

/// A tile placed by the random spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
    pub id: TileId,
}

/// Place one tile on a uniformly random empty cell
///
/// The value is 4 with a 10% chance, 2 otherwise. Returns `None` (and leaves
/// the board and the random source untouched) when no cell is empty.
pub fn spawn_random_tile<R: RandomSource>(board: &mut Board, rng: &mut R) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = if rng.next_range(100) < SPAWN_FOUR_CHANCE_PERCENT {
        4
    } else {
        2
    };
    let id = board.place_tile(row, col, value)?;
    Some(SpawnedTile {
        row,
        col,
        value,
        id,
    })
}

/// Outcome of a full move: slide, merge, and (if anything moved) one spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub score_gained: u32,
    pub moved: bool,
    pub spawned: Option<SpawnedTile>,
    pub movements: Movements,
}

impl MoveResult {
    pub(crate) fn from_transition(transition: Transition, spawned: Option<SpawnedTile>, board: Board) -> Self {
        Self {
            board,
            score_gained: transition.score_gained,
            moved: transition.moved,
            spawned,
            movements: transition.movements,
        }
    }
}

/// Compute a move and, if the board changed, spawn one random tile
///
/// A move that changes nothing gains no score and does not draw from `rng`.
pub fn apply<R: RandomSource>(board: &Board, direction: Direction, rng: &mut R) -> MoveResult {
    let transition = compute(board, direction);
    let mut next = transition.board.clone();
    let spawned = if transition.moved {
        spawn_random_tile(&mut next, rng)
    } else {
        None
    };
    MoveResult::from_transition(transition, spawned, next)
}

/// Whether a move in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    (0..BOARD_SIZE).any(|index| slide_lane(&board.lane(direction, index)).moved)
}

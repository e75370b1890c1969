//! Game session - the board plus everything scored about it
//!
//! A session is a plain value. Each operation takes the session and hands
//! back the next one, so it can be driven and tested without a renderer:
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_core::types::Direction;
//!
//! let session = GameSession::new(42, 0);
//! assert_eq!(session.board().tile_count(), 2);
//!
//! // Slide first (animation plays), then settle (spawn + checks).
//! let (session, transition) = session.slide(Direction::Left);
//! if transition.moved {
//!     let (session, settled) = session.settle();
//!     assert!(settled.spawned.is_some());
//!     assert_eq!(session.moves(), 1);
//! }
//! ```

use crate::board::Board;
use crate::engine::{self, MoveResult, SpawnedTile, Transition};
use crate::rng::{RandomSource, SimpleRng};
use crate::rules;
use crate::types::{Direction, TerminalState, INITIAL_TILES};

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    score: u32,
    best_score: u32,
    terminal: TerminalState,
    /// One-shot: once set it stays set until restart
    promo_triggered: bool,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Accepted moves this episode
    moves: u32,
    /// A slide has been applied and its spawn is still owed
    unsettled: bool,
}

/// What settling a move produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub spawned: Option<SpawnedTile>,
    pub terminal: TerminalState,
    /// The promo condition fired on this settle (at most once per episode)
    pub promo_fired: bool,
}

impl GameSession {
    /// Start a game: empty board seeded with two random tiles
    pub fn new(seed: u32, best_score: u32) -> Self {
        let mut session = Self::empty(seed, best_score);
        for _ in 0..INITIAL_TILES {
            engine::spawn_random_tile(&mut session.board, &mut session.rng);
        }
        session
    }

    /// Start a game from a fixed board (no random seeding)
    pub fn with_board(board: Board, seed: u32, best_score: u32) -> Self {
        let mut session = Self::empty(seed, best_score);
        session.board = board;
        session
    }

    fn empty(seed: u32, best_score: u32) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            best_score,
            terminal: TerminalState::None,
            promo_triggered: false,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            moves: 0,
            unsettled: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn terminal(&self) -> TerminalState {
        self.terminal
    }

    pub fn promo_triggered(&self) -> bool {
        self.promo_triggered
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// A slide is waiting for [`GameSession::settle`]
    pub fn unsettled(&self) -> bool {
        self.unsettled
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Moves are refused once the game is lost
    pub fn accepts_moves(&self) -> bool {
        self.terminal != TerminalState::Lost
    }

    /// Apply the slide/merge of a move; the spawn waits for [`GameSession::settle`]
    ///
    /// A move that changes nothing (or any move after a loss) returns the
    /// session untouched with `moved == false`.
    pub fn slide(mut self, direction: Direction) -> (Self, Transition) {
        let transition = engine::compute(&self.board, direction);
        if !transition.moved || !self.accepts_moves() {
            let noop = Transition {
                board: self.board.clone(),
                score_gained: 0,
                moved: false,
                movements: Default::default(),
                ..transition
            };
            return (self, noop);
        }

        self.board = transition.board.clone();
        self.score = self.score.saturating_add(transition.score_gained);
        self.best_score = self.best_score.max(self.score);
        self.moves = self.moves.wrapping_add(1);
        self.unsettled = true;
        (self, transition)
    }

    /// Finish a move: spawn one tile, then check the promo, win and loss conditions
    pub fn settle(mut self) -> (Self, Settled) {
        let spawned = if self.unsettled {
            engine::spawn_random_tile(&mut self.board, &mut self.rng)
        } else {
            None
        };
        self.unsettled = false;

        let promo_fired = !self.promo_triggered && rules::check_promo_values(&self.board);
        if promo_fired {
            self.promo_triggered = true;
        }

        self.terminal = rules::evaluate(&self.board);

        let settled = Settled {
            spawned,
            terminal: self.terminal,
            promo_fired,
        };
        (self, settled)
    }

    /// Slide and settle in one step
    pub fn apply_move(self, direction: Direction) -> (Self, MoveResult) {
        let (session, transition) = self.slide(direction);
        if !transition.moved {
            let board = transition.board.clone();
            return (session, MoveResult::from_transition(transition, None, board));
        }
        let (session, settled) = session.settle();
        let board = session.board.clone();
        (session, MoveResult::from_transition(transition, settled.spawned, board))
    }

    /// New game with a fresh board; keeps the best score
    pub fn restart(mut self) -> Self {
        let seed = self.rng.next_u32();
        let mut next = Self::new(seed, self.best_score);
        next.episode_id = self.episode_id.wrapping_add(1);
        next
    }

    /// Raise the best score (e.g. after loading it from storage)
    pub fn set_best_score(&mut self, best: u32) {
        self.best_score = self.best_score.max(best);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_two_tiles() {
        let session = GameSession::new(12345, 10);
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.best_score(), 10);
        assert_eq!(session.terminal(), TerminalState::None);
        assert!(!session.promo_triggered());
        assert_eq!(session.episode_id(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameSession::new(777, 0);
        let b = GameSession::new(777, 0);
        assert_eq!(a, b);
        let (a, ra) = a.apply_move(Direction::Down);
        let (b, rb) = b.apply_move(Direction::Down);
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_slide_defers_spawn() {
        let board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let session = GameSession::with_board(board, 1, 0);
        let (session, t) = session.slide(Direction::Left);
        assert!(t.moved);
        assert!(session.unsettled());
        assert_eq!(session.board().tile_count(), 1);
        assert_eq!(session.score(), 4);
        assert_eq!(session.best_score(), 4);

        let (session, settled) = session.settle();
        assert!(!session.unsettled());
        assert!(settled.spawned.is_some());
        assert_eq!(session.board().tile_count(), 2);
    }

    #[test]
    fn test_noop_move_changes_nothing() {
        let board = Board::from_values([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let session = GameSession::with_board(board, 9, 0);
        let before = session.clone();
        let (session, result) = session.apply_move(Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.score_gained, 0);
        assert!(result.spawned.is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_settle_without_slide_does_not_spawn() {
        let session = GameSession::new(4, 0);
        let count = session.board().tile_count();
        let (session, settled) = session.settle();
        assert!(settled.spawned.is_none());
        assert_eq!(session.board().tile_count(), count);
    }

    #[test]
    fn test_restart_keeps_best_and_bumps_episode() {
        let board = Board::from_values([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let session = GameSession::with_board(board, 1, 0);
        let (session, _) = session.apply_move(Direction::Left);
        assert_eq!(session.terminal(), TerminalState::Won);
        assert_eq!(session.best_score(), 2048);

        let session = session.restart();
        assert_eq!(session.score(), 0);
        assert_eq!(session.best_score(), 2048);
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.terminal(), TerminalState::None);
        assert_eq!(session.board().tile_count(), 2);
    }

    #[test]
    fn test_lost_session_refuses_moves() {
        let stuck = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let (session, settled) = GameSession::with_board(stuck, 1, 0).settle();
        assert!(settled.spawned.is_none());
        assert_eq!(session.terminal(), TerminalState::Lost);
        assert!(!session.accepts_moves());
        for dir in Direction::ALL {
            let (_, t) = session.clone().slide(dir);
            assert!(!t.moved);
        }
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules, the session state and the controller
//! that sequences moves with their animation. Apart from the best-score file
//! store it has no dependencies on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a [`Board`]
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//! - **Fast**: Fixed-size boards, no allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of identified tiles
//! - [`engine`]: Slide/merge transition, random spawn
//! - [`movement`]: Per-tile movement records and position reconciliation
//! - [`rules`]: Win, game-over and promo conditions
//! - [`rng`]: Seedable random source
//! - [`session`]: Score, best score and terminal state of one game
//! - [`controller`]: Animation lock, settle timing, persistence, restart
//! - [`storage`]: Best-score stores (memory, file)
//! - [`snapshot`]: Plain copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Slide**: Every tile travels as far as it can toward the chosen wall
//! - **Merge**: Two equal neighbours merge once per move; the pair nearest
//!   the wall merges first, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`
//! - **Score**: Each merge adds the merged value
//! - **Spawn**: After every move that changed the board, one tile appears in a
//!   random empty cell: a 2 (90%) or a 4 (10%)
//! - **Win**: A 2048 tile is on the board (play may continue)
//! - **Game over**: Board full and no two adjacent tiles are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameController, MemoryScoreStore, MoveOutcome};
//! use tui_2048_types::{Direction, SETTLE_MS};
//!
//! let mut game = GameController::new(12345, MemoryScoreStore::default());
//!
//! let outcome = game.apply_move(Direction::Left);
//! if outcome == MoveOutcome::Started {
//!     // Moves are locked until the animation settles.
//!     assert_eq!(game.apply_move(Direction::Right), MoveOutcome::Dropped);
//!     assert!(game.tick(SETTLE_MS).is_some());
//! }
//! assert!(!game.animating());
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Slide**: 200ms regardless of distance travelled
//! - **Settle**: 250ms after the move, the new tile spawns
//!
//! Call [`GameController::tick`](controller::GameController::tick) every frame with elapsed time.

pub use tui_2048_types as types;

pub mod board;
pub mod controller;
pub mod engine;
pub mod movement;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod storage;

pub use board::{Board, Tile};
pub use controller::{ActionOutcome, Animation, GameController, MoveOutcome, RecentSpawn};
pub use engine::{apply, can_move, compute, slide_lane, spawn_random_tile, MoveResult, SpawnedTile, Transition};
pub use movement::{reconcile, MovementRecord, Movements, ReconcileOutcome, Reconciled};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GameSession, Settled};
pub use snapshot::GameSnapshot;
pub use storage::{FileScoreStore, MemoryScoreStore, ScoreStore, StorageError};

//! Game controller - one move at a time, animation included
//!
//! The controller owns the [`GameSession`], the injected best-score store and
//! the in-flight animation. Its lifecycle per move:
//!
//! 1. [`GameController::apply_move`] slides the board (score is updated
//!    immediately) and starts the animation. While it runs, further move
//!    requests are dropped.
//! 2. [`GameController::tick`] advances the animation clock. Once
//!    [`SETTLE_MS`] has elapsed the move settles exactly once: one tile spawns,
//!    the promo, win and loss conditions are checked, the best score is
//!    persisted.
//!
//! Nothing here is fatal. Dropped moves, no-op moves and storage failures all
//! degrade to "nothing happens" (storage failures are logged).

use std::mem;

use tracing::{debug, info, warn};

use crate::engine::{SpawnedTile, Transition};
use crate::session::{GameSession, Settled};
use crate::snapshot::{board_hash, GameSnapshot};
use crate::storage::{MemoryScoreStore, ScoreStore};
use crate::types::{
    Direction, GameAction, MessageKind, TerminalState, SETTLE_MS, SLIDE_ANIMATION_MS, SPAWN_POP_MS,
};

/// A committed move whose animation is playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    transition: Transition,
    elapsed_ms: u32,
}

impl Animation {
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Slide progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms as f32 / SLIDE_ANIMATION_MS as f32).min(1.0)
    }
}

/// The most recent spawn, kept around for the pop-in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentSpawn {
    pub tile: SpawnedTile,
    pub age_ms: u32,
}

impl RecentSpawn {
    pub fn popping(&self) -> bool {
        self.age_ms < SPAWN_POP_MS
    }
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The board changed; the animation started
    Started,
    /// Another move is still animating
    Dropped,
    /// Nothing would change (or the game is lost)
    NoChange,
}

/// Result of handling an input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Restarted,
}

/// Drives a session through moves, animations and restarts
#[derive(Debug)]
pub struct GameController<S: ScoreStore = MemoryScoreStore> {
    session: GameSession,
    store: S,
    animation: Option<Animation>,
    last_spawn: Option<RecentSpawn>,
    message: Option<MessageKind>,
    /// Promo fired and nobody has consumed it yet
    promo_event: bool,
    /// Last best score handed to the store
    persisted_best: u32,
}

impl<S: ScoreStore> GameController<S> {
    /// New game; the best score comes from `store` (0 if it cannot be read)
    pub fn new(seed: u32, store: S) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                warn!(error = %e, "best score unavailable; tracking it for this session only");
                0
            }
        };
        info!(seed, best, "new game");
        Self::with_session(GameSession::new(seed, best), store)
    }

    /// Wrap an existing session (useful for fixed boards)
    pub fn with_session(session: GameSession, store: S) -> Self {
        let persisted_best = session.best_score();
        Self {
            session,
            store,
            animation: None,
            last_spawn: None,
            message: None,
            promo_event: false,
            persisted_best,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-entrancy guard: a move is animating
    pub fn animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn last_spawn(&self) -> Option<RecentSpawn> {
        self.last_spawn
    }

    /// Banner currently on screen
    pub fn message(&self) -> Option<MessageKind> {
        self.message
    }

    pub fn handle_action(&mut self, action: GameAction) -> ActionOutcome {
        match action.direction() {
            Some(direction) => ActionOutcome::Move(self.apply_move(direction)),
            None => {
                self.restart();
                ActionOutcome::Restarted
            }
        }
    }

    /// Start a move, unless one is already animating
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.animating() {
            debug!(%direction, "move dropped: animation in flight");
            return MoveOutcome::Dropped;
        }

        let (session, transition) = mem::take(&mut self.session).slide(direction);
        self.session = session;

        if !transition.moved {
            debug!(%direction, "move changed nothing");
            return MoveOutcome::NoChange;
        }

        debug!(
            %direction,
            gained = transition.score_gained,
            score = self.session.score(),
            tiles_moved = transition.movements.len(),
            "move accepted"
        );

        // A win banner stays up only until play continues.
        if self.message == Some(MessageKind::Won) {
            self.message = None;
        }
        self.last_spawn = None;
        self.persist_best();
        self.animation = Some(Animation {
            transition,
            elapsed_ms: 0,
        });
        MoveOutcome::Started
    }

    /// Advance the animation clock; returns the settle result when the move finishes
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Settled> {
        if let Some(spawn) = self.last_spawn.as_mut() {
            spawn.age_ms = spawn.age_ms.saturating_add(elapsed_ms);
        }

        let anim = self.animation.as_mut()?;
        anim.elapsed_ms = anim.elapsed_ms.saturating_add(elapsed_ms);
        if anim.elapsed_ms < SETTLE_MS {
            return None;
        }

        self.animation = None;
        Some(self.finish_move())
    }

    fn finish_move(&mut self) -> Settled {
        let was_won = self.session.terminal() == TerminalState::Won;
        let (session, settled) = mem::take(&mut self.session).settle();
        self.session = session;

        self.last_spawn = settled.spawned.map(|tile| RecentSpawn { tile, age_ms: 0 });

        if settled.promo_fired {
            info!(moves = self.session.moves(), "promo condition reached");
            self.promo_event = true;
        }

        match settled.terminal {
            TerminalState::Won if !was_won => {
                info!(score = self.session.score(), "2048 reached");
                self.message = Some(MessageKind::Won);
            }
            TerminalState::Lost => {
                info!(score = self.session.score(), moves = self.session.moves(), "game over");
                self.message = Some(MessageKind::Lost);
            }
            _ => {}
        }

        self.persist_best();
        settled
    }

    /// Take and clear the pending promo event (fires at most once per game)
    pub fn take_promo_event(&mut self) -> bool {
        mem::take(&mut self.promo_event)
    }

    /// Start over; an in-flight animation is cancelled and never spawns
    pub fn restart(&mut self) {
        self.session = mem::take(&mut self.session).restart();
        self.animation = None;
        self.last_spawn = None;
        self.message = None;
        self.promo_event = false;
        info!(episode = self.session.episode_id(), "game restarted");
    }

    fn persist_best(&mut self) {
        let best = self.session.best_score();
        if best <= self.persisted_best {
            return;
        }
        // Even on failure, only warn again once the best score grows further.
        self.persisted_best = best;
        if let Err(e) = self.store.save(best) {
            warn!(error = %e, best, "best score not persisted");
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.session.board();
        out.board = board.values();
        out.ids = board.ids();
        out.board_hash = board_hash(&out.board);
        out.score = self.session.score();
        out.best_score = self.session.best_score();
        out.terminal = self.session.terminal();
        out.message = self.message;
        out.promo_triggered = self.session.promo_triggered();
        out.animating = self.animating();
        out.episode_id = self.session.episode_id();
        out.moves = self.session.moves();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

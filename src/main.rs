//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_2048::config::AppConfig;
use tui_2048::core::{FileScoreStore, GameController, GameSnapshot, MemoryScoreStore, ScoreStore};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::logging::init_file_logging;
use tui_2048::term::{frame_tiles, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

/// Redraw an idle screen at least this often
const IDLE_REDRAW_MS: u64 = 1000;

type Game = GameController<Box<dyn ScoreStore>>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().with_args(&args)?;

    if let Some(path) = &config.log_path {
        init_file_logging(path)?;
    }
    info!(?config, "starting tui-2048");

    let store: Box<dyn ScoreStore> = match &config.best_score_path {
        Some(path) => Box::new(FileScoreStore::new(path)),
        None => Box::new(MemoryScoreStore::default()),
    };
    let mut game = GameController::new(config.seed, store);

    let mut term = TerminalRenderer::new().with_mouse_capture(config.mouse);
    term.enter()?;

    let result = run(&mut term, &mut game, config.mouse);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        score = game.session().score(),
        best = game.session().best_score(),
        "exiting"
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game, mouse: bool) -> Result<()> {
    let view = GameView::default();
    let mut swipe = SwipeTracker::new();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let popping = game.last_spawn().is_some_and(|s| s.popping());
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), snap.animating || popping) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let tiles = frame_tiles(&snap, game.animation(), game.last_spawn());
            view.render_frame_into(&snap, &tiles, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = game.handle_action(action);
                        debug!(action = action.as_str(), ?outcome, "key");
                    }
                }
                Event::Mouse(ev) if mouse => {
                    if let Some(action) = swipe.handle_mouse_event(ev) {
                        let outcome = game.handle_action(action);
                        debug!(action = action.as_str(), ?outcome, "swipe");
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
            if game.take_promo_event() {
                // The side panel picks the notice up from the snapshot.
                throttle.reset();
            }
        }
    }
}

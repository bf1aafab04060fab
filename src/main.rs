//! Terminal falling-block game (default binary).
//!
//! Fixed ~60 FPS loop: draw the current snapshot, poll input until the next
//! tick, then feed the measured wall-clock time to gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, error, info};

use termtris::config::AppConfig;
use termtris::core::{GameSession, GameSnapshot, HighscoreStore, PieceFactory};
use termtris::input::{handle_key_event, should_quit};
use termtris::logging;
use termtris::store::FileHighscore;
use termtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use termtris::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let factory = config
        .seed
        .map_or_else(PieceFactory::from_entropy, PieceFactory::new);
    let store = FileHighscore::new(&config.highscore_path);
    let mut session = GameSession::new(factory, store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting on error");
    }
    result
}

fn run<S: HighscoreStore>(term: &mut TerminalRenderer, session: &mut GameSession<S>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity runs on measured time, not on frame count.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms)?;

            if let Some(lock) = session.take_last_event() {
                debug!(
                    lines = lock.lines_cleared,
                    points = lock.points,
                    game_over = lock.game_over,
                    "piece locked"
                );
            }
        }
    }
}

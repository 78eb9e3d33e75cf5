//! Terminal Tetris runner (default binary).
//!
//! Arrow keys or mouse swipes play; `q`, Esc or Ctrl-C quits. Nothing is
//! printed while the terminal is in raw mode: a one-line summary follows once
//! it has been restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use classic_tetris::core::{GameSnapshot, GameState, HighScoreStore};
use classic_tetris::input::{handle_key_event, should_quit, SwipeTracker};
use classic_tetris::store::{Journal, JsonFileStore, LogRecord};
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::GameAction;
use classic_tetris::{Config, TickScheduler};

/// Input poll timeout once the scheduler has stopped (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

struct Summary {
    score: u32,
    high_score: u32,
    game_over: bool,
}

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    let outcome = if summary.game_over { "Game over" } else { "Quit" };
    println!(
        "{outcome}. Score: {}  High score: {}",
        summary.score, summary.high_score
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<Summary> {
    let mut journal = Journal::from_path(config.log_path.as_deref());
    let store = JsonFileStore::new(&config.high_score_path);

    let mut game = GameState::with_store(config.seed, store).with_gravity_ticks(config.gravity_ticks);
    journal.record(&LogRecord::SessionStart {
        seed: config.seed,
        high_score: game.high_score(),
    });
    game.start();

    let view = GameView::default();
    let mut swipe = SwipeTracker::new();
    let mut scheduler = TickScheduler::new(Duration::from_millis(config.tick_ms));
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = scheduler.poll_timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => swipe.handle_mouse(mouse, config.cell_metrics),
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };
            if let Some(action) = action {
                apply(&mut game, &mut journal, action);
            }
        }

        // Tick.
        if scheduler.due(Instant::now()) {
            game.tick();
            drain_events(&mut game, &mut journal);
        }

        if game.game_over() && !scheduler.is_stopped() {
            scheduler.stop();
        }
    }

    Ok(Summary {
        score: game.score(),
        high_score: game.high_score(),
        game_over: game.game_over(),
    })
}

fn apply<S: HighScoreStore>(game: &mut GameState<S>, journal: &mut Journal, action: GameAction) {
    game.apply_action(action);
    drain_events(game, journal);
}

fn drain_events<S: HighScoreStore>(game: &mut GameState<S>, journal: &mut Journal) {
    if let Some(event) = game.take_last_event() {
        journal.record_event(&event, game.high_score());
    }
}

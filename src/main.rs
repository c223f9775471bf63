//! Terminal Just Divide runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a full-redraw renderer, drives the session's one-second timer from the
//! event loop, and persists the best score to a dotfile.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use just_divide::app::App;
use just_divide::core::GameSession;
use just_divide::input::{handle_key_event, should_quit};
use just_divide::term::{encode_frame, TerminalRenderer};
use just_divide::types::Difficulty;

fn main() -> Result<()> {
    let difficulty = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .map(Difficulty::from_index)
        .unwrap_or(Difficulty::Easy);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1);

    let mut session = GameSession::with_difficulty(seed, difficulty);
    session.set_best(load_best());
    session.set_best_saver(Box::new(|best| {
        // Best-effort: a failed write should never take down the game.
        let _ = fs::write(best_path(), best.to_string());
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(session));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let tick_duration = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        let cursor = app.cursor;
        term.draw(|out| encode_frame(&app.session, cursor, out))?;

        // Input with timeout until the next timer tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.session.tick();
        }
    }
}

/// Where the best score lives (the shell owns the storage key, not the core).
fn best_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".justdivide_best")
}

fn load_best() -> u32 {
    fs::read_to_string(best_path())
        .ok()
        .and_then(|contents| contents.trim().parse().ok())
        .unwrap_or(0)
}

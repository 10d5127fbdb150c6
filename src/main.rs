//! Terminal Flappy Bird runner.
//!
//! Owns the external clock: a fixed-interval loop that polls input until the
//! next tick deadline, advances the session, and draws the published frame.
//! Ticks are only delivered while the session is Running, and the terminal is
//! restored on every exit path.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::core::{Frame, Session};
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{GameView, TerminalRenderer, Viewport};
use tui_flappy::types::{Config, GameCommand, SessionState, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = Config::default();
    let seed = std::process::id();
    let mut session = Session::new(config, seed);

    let view = GameView::new(config);
    let mut frame = Frame::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        session.snapshot_into(&mut frame);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 36));
        let fb = view.render(&frame, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameCommand::Flap) => session.flap(),
                        Some(GameCommand::Start) => session.start(),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // The clock only ticks a Running session; leaving Running cancels
        // further ticks until a (re)start.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if session.state() == SessionState::Running {
                session.tick();
            }
        }
    }
}

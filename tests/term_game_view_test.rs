//! Rendering tests for the pure GameView layer (no terminal required)

use tui_flappy::core::{Frame, Session};
use tui_flappy::term::{FrameBuffer, GameView, Viewport};
use tui_flappy::types::Config;

fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    for y in 0..fb.height() {
        for x in 0..fb.width().saturating_sub(chars.len() as u16 - 1) {
            if (0..chars.len()).all(|i| fb.get(x + i as u16, y).map(|c| c.ch) == Some(chars[i])) {
                return true;
            }
        }
    }
    false
}

#[test]
fn frame_buffer_can_be_reused_across_ticks() {
    let cfg = Config::default();
    let mut session = Session::new(cfg, 1);
    session.start();

    let view = GameView::new(cfg);
    let mut frame = Frame::default();
    for _ in 0..10 {
        session.flap();
        session.tick();
        session.snapshot_into(&mut frame);
        let fb = view.render(&frame, Viewport::new(80, 36));
        assert!(contains_text(&fb, "SCORE 000"));
        assert_eq!(frame.obstacles.len(), session.obstacles().len());
    }
}

#[test]
fn score_display_tracks_session_score() {
    let cfg = Config {
        gap_size: 480.0,
        min_gap_offset: 60.0,
        ..Config::default()
    };
    let mut session = Session::new(cfg, 42);
    session.start();
    let view = GameView::new(cfg);

    let mut ticks = 0;
    while session.score() < 2 {
        if session.avatar().y > cfg.screen_height / 2.0 {
            session.flap();
        }
        session.tick();
        ticks += 1;
        assert!(ticks < 5000, "never scored twice");
    }

    let fb = view.render(&session.snapshot(), Viewport::new(80, 36));
    assert!(contains_text(&fb, "SCORE 002"));
}

#[test]
fn overlays_follow_session_state() {
    let cfg = Config::default();
    let mut session = Session::new(cfg, 1);
    let view = GameView::new(cfg);

    let fb = view.render(&session.snapshot(), Viewport::new(80, 36));
    assert!(contains_text(&fb, "PRESS SPACE"));

    session.start();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 36));
    assert!(!contains_text(&fb, "PRESS SPACE"));
    assert!(!contains_text(&fb, "GAME OVER"));

    while !matches!(
        session.state(),
        tui_flappy::types::SessionState::GameOver
    ) {
        session.tick();
    }
    let fb = view.render(&session.snapshot(), Viewport::new(80, 36));
    assert!(contains_text(&fb, "GAME OVER"));
}

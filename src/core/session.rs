//! Game state machine - owns the session lifecycle and the score.
//!
//! One `Session` is one play-through: NotStarted → Running → GameOver, with
//! GameOver → Running via play-again (a fresh start). All entry points are
//! synchronous and total; operations invalid in the current state are
//! side-effect-free no-ops. The session is an explicit owned value, so tests
//! (and multiple concurrent games) just create their own.

use crate::core::collision::collides;
use crate::core::obstacles::{Obstacle, ObstacleStream};
use crate::core::physics::{self, Avatar};
use crate::core::snapshot::{Frame, ObstacleView};
use crate::types::{Config, SessionState};

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    state: SessionState,
    score: u32,
    avatar: Avatar,
    obstacles: ObstacleStream,
}

impl Session {
    /// Create a session in NotStarted with the given RNG seed.
    pub fn new(config: Config, seed: u32) -> Self {
        Self {
            config,
            state: SessionState::NotStarted,
            score: 0,
            avatar: Avatar::spawn(&config),
            obstacles: ObstacleStream::new(seed),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn avatar(&self) -> Avatar {
        self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.as_slice()
    }

    /// Start, or play again. Valid from NotStarted or GameOver; a no-op
    /// while Running.
    pub fn start(&mut self) {
        if self.state == SessionState::Running {
            return;
        }
        self.score = 0;
        self.avatar = Avatar::spawn(&self.config);
        self.obstacles.reset(&self.config);
        self.state = SessionState::Running;
    }

    /// Jump command. Before the first start this starts the session; after
    /// game over it does nothing (play-again is explicit).
    pub fn flap(&mut self) {
        match self.state {
            SessionState::NotStarted => self.start(),
            SessionState::Running => {
                self.avatar = physics::flap(self.avatar, &self.config);
            }
            SessionState::GameOver => {}
        }
    }

    /// Advance the simulation by one tick. No-op unless Running.
    ///
    /// Collision is evaluated on the candidate avatar position against the
    /// obstacle positions before this tick's scroll. On collision the avatar
    /// is left at its last committed position, so the frozen frame shows the
    /// last safe state.
    pub fn tick(&mut self) {
        if self.state != SessionState::Running {
            return;
        }

        let candidate = physics::integrate(self.avatar, &self.config);
        if collides(candidate.y, self.obstacles.as_slice(), &self.config) {
            self.state = SessionState::GameOver;
            return;
        }
        self.avatar = candidate;

        self.obstacles.scroll(&self.config);
        self.score += self.obstacles.mark_passed(&self.config);
        self.obstacles.retire_offscreen(&self.config);
        self.obstacles.spawn_if_due(&self.config);
    }

    /// Fill `out` with the current frame for the renderer.
    pub fn snapshot_into(&self, out: &mut Frame) {
        out.avatar_top = self.avatar.y;
        out.avatar_vy = self.avatar.vy;
        out.avatar_size = self.config.avatar_size;
        out.obstacles.clear();
        for ob in self.obstacles.as_slice() {
            out.obstacles
                .push(ObstacleView::from_obstacle(ob, &self.config));
        }
        out.score = self.score;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> Frame {
        let mut frame = Frame::default();
        self.snapshot_into(&mut frame);
        frame
    }
}

//! Published frame - the renderer-facing view of one completed tick.
//!
//! The session fills a caller-owned `Frame` in place, so a render loop can
//! reuse one buffer without allocating. The renderer only ever sees a
//! fully-updated, self-consistent frame.

use arrayvec::ArrayVec;

use crate::core::obstacles::Obstacle;
use crate::types::{Config, SessionState, MAX_OBSTACLES};

/// One obstacle as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub gap_top: f32,
    pub gap_size: f32,
    pub width: f32,
    pub passed: bool,
}

impl ObstacleView {
    pub fn from_obstacle(ob: &Obstacle, config: &Config) -> Self {
        Self {
            id: ob.id,
            x: ob.x,
            gap_top: ob.gap_top,
            gap_size: config.gap_size,
            width: config.obstacle_width,
            passed: ob.passed,
        }
    }
}

/// Complete frame published to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub avatar_top: f32,
    pub avatar_vy: f32,
    pub avatar_size: f32,
    pub obstacles: ArrayVec<ObstacleView, MAX_OBSTACLES>,
    pub score: u32,
    pub state: SessionState,
}

impl Frame {
    pub fn clear(&mut self) {
        self.avatar_top = 0.0;
        self.avatar_vy = 0.0;
        self.avatar_size = 0.0;
        self.obstacles.clear();
        self.score = 0;
        self.state = SessionState::NotStarted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_empty_not_started() {
        let frame = Frame::default();
        assert!(frame.obstacles.is_empty());
        assert_eq!(frame.score, 0);
        assert_eq!(frame.state, SessionState::NotStarted);
    }

    #[test]
    fn clear_resets_a_used_frame() {
        let cfg = Config::default();
        let ob = Obstacle {
            id: 3,
            x: 120.0,
            gap_top: 80.0,
            passed: true,
        };
        let mut frame = Frame {
            avatar_top: 250.0,
            avatar_vy: -8.0,
            avatar_size: cfg.avatar_size,
            score: 5,
            state: SessionState::Running,
            ..Frame::default()
        };
        frame.obstacles.push(ObstacleView::from_obstacle(&ob, &cfg));

        frame.clear();
        assert_eq!(frame, Frame::default());
    }
}

//! Core module - pure game logic with no external dependencies
//!
//! Game rules, physics, collision, obstacle generation and the session state
//! machine. Zero dependencies on UI, timing or I/O: the same seed and command
//! sequence always replays the same game.

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use obstacles::{Obstacle, ObstacleStream};
pub use physics::Avatar;
pub use session::Session;
pub use snapshot::{Frame, ObstacleView};

//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Simulation tick interval (milliseconds)
pub const TICK_MS: u64 = 16;

/// Upper bound on simultaneously live obstacles.
///
/// With default spacing (~220px over a 600px screen) at most 4 obstacles are
/// live at once; 8 leaves headroom for any sane configuration.
pub const MAX_OBSTACLES: usize = 8;

/// Per-session configuration, fixed at session creation.
///
/// All values are in game pixels (y grows downward) or pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Avatar is a square of this side length.
    pub avatar_size: f32,
    /// Fixed vertical start position of the avatar's top edge.
    pub avatar_start_y: f32,
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    /// Velocity set (not added) by a jump. Negative = upward.
    pub jump_impulse: f32,
    /// Maximum downward velocity.
    pub terminal_velocity: f32,
    /// Vertical extent of the passable gap.
    pub gap_size: f32,
    pub obstacle_width: f32,
    /// Horizontal scroll per tick.
    pub scroll_speed: f32,
    /// A new obstacle spawns once the rightmost one has scrolled this far in
    /// from the right screen edge.
    pub spawn_spacing: f32,
    /// Minimum distance from the gap to either screen edge.
    pub min_gap_offset: f32,
    /// Vertical slack before a gap edge counts as hit. Fairness policy
    /// against discrete-tick sampling error.
    pub collision_tolerance: f32,
    /// Horizontal shrink of the avatar hitbox relative to the sprite.
    pub hitbox_inset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 600.0,
            screen_height: 600.0,
            avatar_size: 40.0,
            avatar_start_y: 250.0,
            gravity: 0.5,
            jump_impulse: -8.0,
            terminal_velocity: 10.0,
            gap_size: 150.0,
            obstacle_width: 50.0,
            scroll_speed: 3.0,
            spawn_spacing: 220.0,
            min_gap_offset: 60.0,
            collision_tolerance: 2.0,
            hitbox_inset: 4.0,
        }
    }
}

impl Config {
    /// Left edge of the avatar sprite (screen-center-aligned, fixed).
    pub fn avatar_x(&self) -> f32 {
        (self.screen_width - self.avatar_size) / 2.0
    }

    /// Horizontal center of the avatar; scoring reference point.
    ///
    /// Deliberately distinct from the collision hitbox edges.
    pub fn avatar_center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Avatar y at or below this line touches the ground.
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.avatar_size
    }
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "notStarted",
            SessionState::Running => "running",
            SessionState::GameOver => "gameOver",
        }
    }
}

/// Player commands delivered by the input layer.
///
/// The clock's tick is not a command; the runner drives it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Jump. Before the first start this starts the session instead.
    Flap,
    /// Start, or play again after a game over.
    Start,
}

//! Collision detector - boundary and obstacle tests for the avatar.
//!
//! Pure predicates over a candidate avatar position and the pre-scroll
//! obstacle snapshot. The vertical tolerance and the horizontal hitbox inset
//! make the hitbox slightly more forgiving than the sprite; a fast-falling
//! avatar can visually clip a pipe edge by a few pixels without a true hit.

use crate::core::obstacles::Obstacle;
use crate::types::Config;

/// Ceiling (minus tolerance) or ground contact.
pub fn hits_boundary(y: f32, config: &Config) -> bool {
    y < -config.collision_tolerance || y >= config.ground_line()
}

/// Horizontal overlap of the inset avatar hitbox with one obstacle.
fn overlaps_horizontally(obstacle: &Obstacle, config: &Config) -> bool {
    let left = config.avatar_x() + config.hitbox_inset;
    let right = config.avatar_x() + config.avatar_size - config.hitbox_inset;
    left < obstacle.right_edge(config) && right > obstacle.x
}

/// Avatar vertically outside the gap (with tolerance).
fn outside_gap(y: f32, obstacle: &Obstacle, config: &Config) -> bool {
    let bottom = y + config.avatar_size;
    y < obstacle.gap_top - config.collision_tolerance
        || bottom > obstacle.gap_top + config.gap_size + config.collision_tolerance
}

/// First obstacle failing both the horizontal and the gap test ends the scan.
pub fn hits_obstacle(y: f32, obstacles: &[Obstacle], config: &Config) -> bool {
    obstacles
        .iter()
        .any(|ob| overlaps_horizontally(ob, config) && outside_gap(y, ob, config))
}

/// Combined check used by the session on the candidate position.
pub fn collides(y: f32, obstacles: &[Obstacle], config: &Config) -> bool {
    hits_boundary(y, config) || hits_obstacle(y, obstacles, config)
}

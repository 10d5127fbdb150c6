//! Terminal "game renderer" module.
//!
//! Renders published frames into a simple styled framebuffer and flushes it
//! to a terminal backend. The view layer is pure; only the renderer touches
//! the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

//! Terminal Flappy Bird.
//!
//! The simulation core (`core`) is a pure, deterministic state machine
//! advanced one tick at a time; `term` renders published frames into a
//! character framebuffer and flushes it to a terminal; `input` maps key
//! events to game commands. The binary in `main.rs` wires them to a
//! fixed-interval clock.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

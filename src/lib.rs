//! Falling-block puzzle: a deterministic, clock-injected core plus a sticky
//! DAS/ARR input model and a crossterm framebuffer renderer.
//!
//! `core` contains all game rules and owns no I/O; the binary runs the only
//! loop that reads the terminal and the monotonic clock, and hands the
//! renderer a [`core::GameSnapshot`] once per tick.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

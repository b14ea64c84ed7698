//! Read-only view of the game state handed to the renderer.
//!
//! The frontend never touches [`crate::core::GameState`] internals; each
//! tick the engine writes the fields the view layer needs into a reusable
//! snapshot buffer.

use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Pose of the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

/// Everything the view layer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Locked cells, `board[y][x]`.
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Falling piece, absent between lock and respawn or after game over.
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would occupy after a hard drop.
    pub ghost_y: i8,
    pub hold: Option<PieceKind>,
    pub next: PieceKind,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: 0,
            hold: None,
            next: PieceKind::I,
            can_hold: true,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

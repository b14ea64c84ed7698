//! Core types and tuning constants shared across the crate.
//!
//! Pure data: no I/O, no clock access.

/// Board dimensions in cells.
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Fixed tick length of the cooperative loop (milliseconds).
pub const TICK_MS: u64 = 16;

/// Gravity pacing: starting drop interval, speed-up applied per lock that
/// cleared at least one line, and the fastest allowed interval.
pub const DROP_INTERVAL_START_MS: u64 = 500;
pub const DROP_INTERVAL_STEP_MS: u64 = 10;
pub const DROP_INTERVAL_FLOOR_MS: u64 = 100;

/// Grace period between a piece becoming grounded and it locking in place.
pub const LOCK_DELAY_MS: u64 = 500;

/// Sticky input timing. Terminals do not deliver reliable key-release
/// events, so a key counts as held while press events keep arriving within
/// the keepalive window.
pub const KEY_KEEPALIVE_MS: u64 = 70;
pub const DAS_MS: u64 = 90;
pub const ARR_MS: u64 = 45;
pub const SOFT_DROP_ARR_MS: u64 = 70;
/// Gap below which a re-press resumes an already-running auto-repeat
/// instead of re-waiting the DAS delay.
pub const DAS_MOMENTUM_GRACE_MS: u64 = 300;

/// Points per simultaneously cleared line count (index = lines).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
/// Points per cell of hard-drop travel.
pub const HARD_DROP_SCORE_PER_CELL: u32 = 2;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order (`kind as usize` indexes geometry tables).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states, cycling clockwise from the spawn orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Number of quarter turns from the spawn orientation.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete actions the engine understands.
///
/// MoveLeft/MoveRight/SoftDrop are repeatable and go through the sticky
/// input model; the rest are edge-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    Restart,
}

/// Cell on the board (`None` = empty, `Some` = locked piece of that kind).
pub type Cell = Option<PieceKind>;

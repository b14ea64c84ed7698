//! Pure game logic: piece geometry, collision, the bag randomizer and the
//! piece state machine. No I/O and no direct clock access; callers inject a
//! monotonic instant where timing matters.

pub mod bag;
pub mod board;
pub mod game_state;
pub mod pieces;
pub mod snapshot;

pub use bag::{SevenBag, SimpleRng};
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

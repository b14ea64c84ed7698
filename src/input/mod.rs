//! Key decoding and the sticky auto-repeat model.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{decode_key, should_quit};

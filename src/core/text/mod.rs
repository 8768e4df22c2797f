//! Text preparation applied before any provider sees a message.

pub mod normalize;

pub use normalize::{CODE_BLOCK_PLACEHOLDER, normalize_text};

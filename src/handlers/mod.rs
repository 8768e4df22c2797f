//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `speak` - Chat message to speech endpoint

pub mod api;
pub mod speak;

pub use speak::speak_handler;

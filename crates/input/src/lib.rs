//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`InputAction`]s and provides an [`InputHandler`] that owns the
//! tube cursor and turns cursor actions into [`crate::types::GameAction`]s.

pub mod handler;
pub mod map;

pub use water_sort_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, InputAction};

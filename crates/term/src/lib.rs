//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for playing water sort in a
//! terminal. It renders into a plain framebuffer that is then diffed and
//! flushed to the terminal, so the board view stays pure and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use water_sort_core as core;
pub use water_sort_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, TubeSlot, Viewport, SLOT_H, TUBES_PER_ROW, TUBE_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

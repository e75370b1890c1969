//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and turns mouse
//! drags into swipes, so both keyboard and pointer play reach the controller
//! as the same actions.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{classify_swipe, SwipeTracker};

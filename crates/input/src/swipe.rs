//! Mouse-drag swipes.
//!
//! A swipe is a left-button press followed by a release. Terminal cells are
//! roughly twice as tall as they are wide, so the delta is scaled into gesture
//! units per axis before it is compared against [`MIN_SWIPE_DISTANCE`].

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, MIN_SWIPE_DISTANCE};

/// Gesture units per terminal column
pub const DEFAULT_COL_UNITS: i32 = 10;
/// Gesture units per terminal row
pub const DEFAULT_ROW_UNITS: i32 = 20;

/// Direction of a swipe with delta `(dx, dy)` in gesture units (`dy` grows downward)
///
/// The horizontal axis wins only when strictly dominant, and the dominant
/// component must be strictly longer than [`MIN_SWIPE_DISTANCE`].
///
/// ```
/// use tui_2048_input::classify_swipe;
/// use tui_2048_input::types::Direction;
///
/// assert_eq!(classify_swipe(80, 10), Some(Direction::Right));
/// assert_eq!(classify_swipe(0, -51), Some(Direction::Up));
/// assert_eq!(classify_swipe(50, 0), None);
/// ```
pub fn classify_swipe(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() <= MIN_SWIPE_DISTANCE {
            return None;
        }
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        if dy.abs() <= MIN_SWIPE_DISTANCE {
            return None;
        }
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    col_units: i32,
    row_units: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_COL_UNITS, DEFAULT_ROW_UNITS)
    }

    pub fn with_scale(col_units: i32, row_units: i32) -> Self {
        Self {
            start: None,
            col_units,
            row_units,
        }
    }

    /// A press is waiting for its release
    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }

    pub fn reset(&mut self) {
        self.start = None;
    }

    /// Feed a mouse event; returns a move when a swipe completes
    pub fn handle_mouse_event(&mut self, ev: MouseEvent) -> Option<GameAction> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((ev.column, ev.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col0, row0) = self.start.take()?;
                let dx = (ev.column as i32 - col0 as i32) * self.col_units;
                let dy = (ev.row as i32 - row0 as i32) * self.row_units;
                classify_swipe(dx, dy).map(GameAction::from_direction)
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! Terminal and trigger conditions, evaluated after a move settles.

use crate::board::Board;
use crate::types::{TerminalState, PROMO_VALUES, WIN_VALUE};

/// Any cell holds the win value
pub fn check_win(board: &Board) -> bool {
    board.contains_value(WIN_VALUE)
}

/// No empty cell and no adjacent (right/down) equal pair anywhere
pub fn check_game_over(board: &Board) -> bool {
    !board.has_any_empty_cell() && !board.has_any_adjacent_equal_pair()
}

/// 2, 4, 8 and 16 are all on the board at the same time
pub fn check_promo_values(board: &Board) -> bool {
    PROMO_VALUES.iter().all(|&v| board.contains_value(v))
}

/// Terminal state of a settled board; a win takes precedence over a loss
pub fn evaluate(board: &Board) -> TerminalState {
    if check_win(board) {
        TerminalState::Won
    } else if check_game_over(board) {
        TerminalState::Lost
    } else {
        TerminalState::None
    }
}

mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::get_available_moves;
pub use bot::{BotInput, BotType, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use types::{Board, EMPTY_BOARD, FirstPlayerMode, GameStatus, Mark, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, is_board_full, is_draw, is_terminal};

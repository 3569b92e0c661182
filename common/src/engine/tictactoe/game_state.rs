use super::types::{Board, EMPTY_BOARD, GameStatus, Mark};
use super::win_detector::{check_win, is_board_full};

#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(starting_mark: Mark) -> Self {
        if starting_mark == Mark::Empty {
            panic!("Starting mark must be X or O");
        }

        Self {
            board: EMPTY_BOARD,
            current_mark: starting_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, position: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if position >= self.board.len() {
            return Err("Position out of bounds".to_string());
        }

        if self.board[position] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[position] = self.current_mark;
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_chosen_mark() {
        let state = GameState::new(Mark::O);
        assert_eq!(state.board, EMPTY_BOARD);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    #[should_panic(expected = "Starting mark must be X or O")]
    fn test_new_game_rejects_empty_starting_mark() {
        GameState::new(Mark::Empty);
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = GameState::new(Mark::X);
        state.place_mark(0).unwrap();
        assert_eq!(state.board[0], Mark::X);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(0));

        state.place_mark(4).unwrap();
        assert_eq!(state.board[4], Mark::O);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = GameState::new(Mark::X);
        state.place_mark(0).unwrap();
        let result = state.place_mark(0);
        assert_eq!(result, Err("Cell is already marked".to_string()));
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds_position() {
        let mut state = GameState::new(Mark::X);
        let result = state.place_mark(9);
        assert_eq!(result, Err("Position out of bounds".to_string()));
    }

    #[test]
    fn test_winning_move_finishes_the_game() {
        let mut state = GameState::new(Mark::X);
        for position in [0, 3, 1, 4] {
            state.place_mark(position).unwrap();
        }
        state.place_mark(2).unwrap();

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner_mark(), Some(Mark::X));
        // The turn must not switch after the final move.
        assert_eq!(state.current_mark, Mark::X);

        let result = state.place_mark(5);
        assert_eq!(result, Err("Game is already over".to_string()));
    }

    #[test]
    fn test_filling_the_board_without_a_line_is_a_draw() {
        let mut state = GameState::new(Mark::X);
        // X O X / X O O / O X X, played in an order that never
        // completes a line early.
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(position).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner_mark(), None);
    }
}

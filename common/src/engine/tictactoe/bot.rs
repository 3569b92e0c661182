use super::board::get_available_moves;
use super::game_state::GameState;
use super::types::{Board, Mark};
use super::win_detector::{check_win, is_terminal};
use crate::engine::SessionRng;

const CENTER: usize = 4;
const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

/// Snapshot of the position handed to a bot. The caller's board is
/// copied in, so nothing a bot does during search can leak back out.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Game-theoretically optimal move, or `None` if the position is
/// already decided or full. Cheap one-ply checks run before the full
/// search; they never change the outcome of a game, only how fast an
/// already-forced move is found.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let mut board = input.board;

    if is_terminal(&board) {
        return None;
    }

    let available_moves = get_available_moves(&board);

    // Opening move: take the center without searching.
    if available_moves.len() == board.len() {
        return Some(CENTER);
    }

    if board[CENTER] == Mark::Empty {
        board[CENTER] = bot_mark;
        let center_wins = check_win(&board) == Some(bot_mark);
        board[CENTER] = Mark::Empty;
        if center_wins {
            return Some(CENTER);
        }
    }

    // Own win before blocking: a finishing move beats a save.
    if let Some(position) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(position);
    }

    if let Some(position) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(position);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut alpha = i32::MIN;

    for &position in &available_moves {
        board[position] = bot_mark;
        let score = minimax(
            &mut board,
            1,
            false,
            bot_mark,
            opponent_mark,
            alpha,
            i32::MAX,
        );
        board[position] = Mark::Empty;

        // Strict comparison keeps the lowest-index move among ties.
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
        alpha = alpha.max(best_score);
    }

    best_move
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &position in moves {
        board[position] = mark;
        let winner = check_win(board);
        board[position] = Mark::Empty;

        if winner == Some(mark) {
            return Some(position);
        }
    }
    None
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        // Scores shrink with depth, so the search prefers the fastest
        // win and the slowest loss.
        return if winner == bot_mark {
            WIN_SCORE - depth as i32
        } else {
            depth as i32 - WIN_SCORE
        };
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in moves {
            board[position] = bot_mark;
            let eval = minimax(
                board,
                depth + 1,
                false,
                bot_mark,
                opponent_mark,
                alpha,
                beta,
            );
            board[position] = Mark::Empty;

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in moves {
            board[position] = opponent_mark;
            let eval = minimax(
                board,
                depth + 1,
                true,
                bot_mark,
                opponent_mark,
                alpha,
                beta,
            );
            board[position] = Mark::Empty;

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}

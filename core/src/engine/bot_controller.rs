use crate::error::GameError;
use crate::rng::SessionRng;
use super::board::{Board, CENTER, CORNERS};
use super::game_state::GameState;
use super::types::{Difficulty, Mark};
use super::win_detector::{check_win, is_winner};

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    /// Input for the player whose turn it is.
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

/// Picks the cell the computer plays. Never returns an occupied index.
pub fn select_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    let opponent_mark = input.bot_mark.opponent().ok_or(GameError::NoLegalMove)?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() || check_win(&input.board).is_some() {
        return Err(GameError::NoLegalMove);
    }

    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => {
            calculate_heuristic_move(&input.board, input.bot_mark, opponent_mark, &available_moves, rng)
        }
        Difficulty::Hard => calculate_minimax_move(&input.board, input.bot_mark, &available_moves),
    };

    chosen.ok_or(GameError::NoLegalMove)
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves)
}

fn calculate_heuristic_move(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_winning_move(board, bot_mark, available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark, available_moves) {
        return Some(index);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&corner| board.is_empty_at(corner))
        .collect();
    if let Some(corner) = rng.choose(&open_corners) {
        return Some(corner);
    }

    calculate_random_move(available_moves, rng)
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| is_winner(&board.with_mark(index, mark), mark))
}

fn calculate_minimax_move(board: &Board, bot_mark: Mark, available_moves: &[usize]) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &index in available_moves {
        let next = board.with_mark(index, bot_mark);
        let score = minimax(&next, 1, false, bot_mark, best_score, i32::MAX);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Full-depth search; `depth` counts plies from the board handed to `select_move`.
/// Quicker wins and slower losses score better.
fn minimax(
    board: &Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if is_winner(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if is_winner(board, opponent_mark) {
        return depth - WIN_SCORE;
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let eval = minimax(&board.with_mark(index, bot_mark), depth + 1, false, bot_mark, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            let eval = minimax(&board.with_mark(index, opponent_mark), depth + 1, true, bot_mark, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

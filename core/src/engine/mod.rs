mod board;
mod bot_controller;
mod game_state;
mod match_session;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS};
pub use bot_controller::{BotInput, select_move};
pub use game_state::GameState;
pub use match_session::{GameMode, MatchSession, Scoreboard};
pub use types::{Difficulty, GamePhase, Mark, MoveOutcome, WinningLine};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line, is_winner};

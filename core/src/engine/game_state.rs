use crate::error::{GameError, IllegalMoveReason};
use super::board::{Board, CELL_COUNT};
use super::types::{GamePhase, Mark, MoveOutcome, WinningLine};
use super::win_detector::check_win_with_line;

/// Board, turn and phase of one game. Owned by its caller; there is no shared instance.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    phase: GamePhase,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            phase: GamePhase::Running,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Cells of the completed line, for highlighting.
    pub fn winning_pattern(&self) -> Option<[usize; 3]> {
        self.winning_line.map(|line| line.pattern)
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, GameError> {
        if self.phase != GamePhase::Running {
            return Err(GameError::illegal(index, IllegalMoveReason::GameOver));
        }

        if index >= CELL_COUNT {
            return Err(GameError::illegal(index, IllegalMoveReason::OutOfRange));
        }

        if mark == Mark::Empty {
            return Err(GameError::illegal(index, IllegalMoveReason::EmptyMark));
        }

        if mark != self.current_mark {
            return Err(GameError::illegal(index, IllegalMoveReason::NotYourTurn));
        }

        if !self.board.is_empty_at(index) {
            return Err(GameError::illegal(index, IllegalMoveReason::Occupied));
        }

        self.board.set(index, mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.phase == GamePhase::Running {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            phase: self.phase,
            winning_line: self.winning_line,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.phase = GamePhase::WonBy(line.mark);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.phase = GamePhase::Drawn;
        }
    }
}

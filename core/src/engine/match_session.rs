use crate::error::{GameError, IllegalMoveReason};
use crate::log;
use crate::rng::SessionRng;
use super::bot_controller::{BotInput, select_move};
use super::game_state::GameState;
use super::types::{Difficulty, GamePhase, Mark, MoveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsComputer {
        difficulty: Difficulty,
        computer_mark: Mark,
    },
}

impl GameMode {
    pub fn computer_mark(&self) -> Option<Mark> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer { computer_mark, .. } => Some(*computer_mark),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::WonBy(Mark::X) => self.x_wins += 1,
            GamePhase::WonBy(Mark::O) => self.o_wins += 1,
            GamePhase::Drawn => self.draws += 1,
            GamePhase::WonBy(Mark::Empty) | GamePhase::Running => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Drives one table: a game, its mode, the running score and the random source.
/// Human and computer moves both go through `GameState::apply_move`.
pub struct MatchSession {
    state: GameState,
    mode: GameMode,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl MatchSession {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            state: GameState::new(),
            mode,
            scoreboard: Scoreboard::default(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.phase() == GamePhase::Running
            && self.mode.computer_mark() == Some(self.state.current_mark())
    }

    pub fn play_human(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if self.is_computer_turn() {
            return Err(GameError::illegal(index, IllegalMoveReason::NotYourTurn));
        }
        let mark = self.state.current_mark();
        self.apply(index, mark)
    }

    /// Plays the computer's reply. Returns the chosen cell with the outcome.
    /// Fails with `NoLegalMove` unless a computer move is pending.
    pub fn play_computer(&mut self) -> Result<(usize, MoveOutcome), GameError> {
        let difficulty = match self.mode {
            GameMode::VsComputer { difficulty, .. } => difficulty,
            GameMode::TwoPlayer => return Err(GameError::NoLegalMove),
        };

        if !self.is_computer_turn() {
            return Err(GameError::NoLegalMove);
        }

        let input = BotInput::from_game_state(&self.state);
        let index = select_move(difficulty, &input, &mut self.rng)?;
        log!("Computer ({:?}, {:?}) plays {}", input.bot_mark, difficulty, index);

        let outcome = self.apply(index, input.bot_mark)?;
        Ok((index, outcome))
    }

    pub fn restart(&mut self) {
        self.state.reset();
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.state.reset();
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, GameError> {
        let outcome = self.state.apply_move(index, mark)?;
        if outcome.phase.is_terminal() {
            self.scoreboard.record(outcome.phase);
            match outcome.phase {
                GamePhase::WonBy(winner) => log!("Game over: {:?} wins", winner),
                _ => log!("Game over: draw"),
            }
        }
        Ok(outcome)
    }
}

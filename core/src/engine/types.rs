use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    WonBy(Mark),
    Drawn,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub pattern: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, pattern: [usize; 3]) -> Self {
        Self { mark, pattern }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pattern.contains(&index)
    }
}

/// Result of one accepted move: the phase it led to and, for a win, the completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub phase: GamePhase,
    pub winning_line: Option<WinningLine>,
}

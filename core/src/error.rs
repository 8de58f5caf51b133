use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    Occupied,
    GameOver,
    EmptyMark,
    NotYourTurn,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "position out of bounds",
            IllegalMoveReason::Occupied => "cell is already marked",
            IllegalMoveReason::GameOver => "game is already over",
            IllegalMoveReason::EmptyMark => "cannot place an empty mark",
            IllegalMoveReason::NotYourTurn => "not your turn",
        };
        f.write_str(text)
    }
}

/// Contract violations reported by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move at {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    #[error("no legal move available")]
    NoLegalMove,
}

impl GameError {
    pub fn illegal(index: usize, reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove { index, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::illegal(4, IllegalMoveReason::Occupied);
        assert_eq!(err.to_string(), "illegal move at 4: cell is already marked");
    }

    #[test]
    fn test_no_legal_move_display() {
        assert_eq!(GameError::NoLegalMove.to_string(), "no legal move available");
    }
}

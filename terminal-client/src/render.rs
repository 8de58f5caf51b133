use tictactoe_core::engine::{GamePhase, GameMode, GameState, Scoreboard};

/// Text grid; empty cells show their 1-based number, winning cells are bracketed.
pub fn render_board(state: &GameState) -> String {
    let winning = state.winning_pattern();
    let cells = state.board().cells();
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match cells[index].symbol() {
                    ' ' => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
                    other => other,
                };
                if winning.is_some_and(|pattern| pattern.contains(&index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(line.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn render_status(state: &GameState, mode: GameMode) -> String {
    match state.phase() {
        GamePhase::WonBy(mark) => format!("Player {} wins!", mark.symbol()),
        GamePhase::Drawn => "It's a draw!".to_string(),
        GamePhase::Running => match mode {
            GameMode::TwoPlayer => format!("Player {}'s turn", state.current_mark().symbol()),
            GameMode::VsComputer { difficulty, .. } => format!(
                "Player {}'s turn (vs computer, {:?})",
                state.current_mark().symbol(),
                difficulty
            ),
        },
    }
}

pub fn render_scoreboard(score: &Scoreboard) -> String {
    format!("X: {}  O: {}  Draws: {}", score.x_wins, score.o_wins, score.draws)
}

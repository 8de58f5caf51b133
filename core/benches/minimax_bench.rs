use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_core::SessionRng;
use tictactoe_core::engine::{Board, BotInput, Difficulty, GameState, Mark, select_move};

fn bench_hard_single_move_empty_board() {
    let input = BotInput::new(Board::new(), Mark::X);
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(select_move(Difficulty::Hard, &input, &mut session_rng));
}

fn bench_hard_single_move_after_corner() {
    let input = BotInput::new(Board::new().with_mark(0, Mark::X), Mark::O);
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(select_move(Difficulty::Hard, &input, &mut session_rng));
}

fn bench_hard_self_play() {
    let mut state = GameState::new();
    let mut session_rng = SessionRng::new(0);
    while !state.phase().is_terminal() {
        let input = BotInput::from_game_state(&state);
        match select_move(Difficulty::Hard, &input, &mut session_rng) {
            Ok(index) => {
                let _ = state.apply_move(index, input.bot_mark);
            }
            Err(_) => break,
        }
    }
    black_box(state.phase());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_hard_single_move_empty_board)
    });

    group.bench_function("single_move_after_corner", |b| {
        b.iter(bench_hard_single_move_after_corner)
    });

    group.bench_function("self_play", |b| b.iter(bench_hard_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

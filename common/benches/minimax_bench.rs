use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

use common::engine::tictactoe::{
    BotInput, EMPTY_BOARD, GameState, GameStatus, Mark, calculate_minimax_move,
};

fn bench_single_move_empty_board() {
    let input = BotInput {
        board: EMPTY_BOARD,
        bot_mark: Mark::X,
    };
    calculate_minimax_move(&input);
}

fn bench_single_move_mid_game() {
    let mut board = EMPTY_BOARD;
    let moves = [
        (4, Mark::X),
        (0, Mark::O),
        (8, Mark::X),
        (2, Mark::O),
    ];
    for (position, mark) in moves {
        board[position] = mark;
    }

    let input = BotInput {
        board,
        bot_mark: Mark::X,
    };
    calculate_minimax_move(&input);
}

fn bench_full_self_play_game() {
    let mut state = GameState::new(Mark::X);
    while state.status == GameStatus::InProgress {
        let input = BotInput::from_game_state(&state);
        if let Some(position) = calculate_minimax_move(&input) {
            let _ = state.place_mark(position);
        } else {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

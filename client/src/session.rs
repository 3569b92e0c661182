use common::engine::SessionRng;
use common::engine::tictactoe::{
    BotInput, BotType, FirstPlayerMode, GameState, GameStatus, Mark, calculate_move,
    check_win_with_line,
};

use crate::ui;

pub struct SessionSettings {
    pub bot_type: BotType,
    pub first_player_mode: FirstPlayerMode,
    pub show_index_map: bool,
}

pub fn run_session(settings: &SessionSettings, rng: &mut SessionRng) {
    println!("\n==== Tic-Tac-Toe: Unbeatable Computer ====\n");
    if settings.show_index_map {
        ui::print_index_map();
    }

    loop {
        run_game(settings, rng);

        let again = ui::ask_choice("\nPlay again? (Y/N): ", &["Y", "N"]);
        if again == "N" {
            break;
        }
        println!("\nRestarting...\n");
    }

    println!("Thanks for playing!");
}

fn run_game(settings: &SessionSettings, rng: &mut SessionRng) {
    let human_mark = match ui::ask_choice("Choose your mark (X/O): ", &["X", "O"]).as_str() {
        "X" => Mark::X,
        _ => Mark::O,
    };
    let computer_mark = human_mark.opponent().expect("human mark is always X or O");

    let human_first = ask_first_player(settings.first_player_mode, rng);
    let starting_mark = if human_first { human_mark } else { computer_mark };

    let mut state = GameState::new(starting_mark);
    println!("\nLet's play!");

    while state.status == GameStatus::InProgress {
        ui::print_board(&state.board);

        if state.current_mark == human_mark {
            play_human_turn(&mut state);
        } else {
            play_computer_turn(&mut state, settings.bot_type, rng);
        }
    }

    report_result(&state, human_mark);
    common::log!(
        "Game over: {:?} (human={}, computer={})",
        state.status,
        human_mark,
        computer_mark
    );
}

fn ask_first_player(mode: FirstPlayerMode, rng: &mut SessionRng) -> bool {
    let default_label = match mode {
        FirstPlayerMode::Human => "you",
        FirstPlayerMode::Computer => "the computer",
        FirstPlayerMode::Random => "random",
    };
    let prompt = format!("Who plays first? (P/C, Enter = {}): ", default_label);

    match ui::ask_choice_or_default(&prompt, &["P", "C"]).as_deref() {
        Some("P") => true,
        Some(_) => false,
        None => match mode {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Computer => false,
            FirstPlayerMode::Random => rng.random_bool(),
        },
    }
}

fn play_human_turn(state: &mut GameState) {
    loop {
        let position = ui::ask_move(&state.board);
        match state.place_mark(position) {
            Ok(()) => break,
            Err(message) => println!("{}", message),
        }
    }
}

fn play_computer_turn(state: &mut GameState, bot_type: BotType, rng: &mut SessionRng) {
    println!("Computer is thinking...");

    let input = BotInput::from_game_state(state);
    let position = calculate_move(bot_type, &input, rng)
        .expect("bot was asked to move in a finished game");

    state
        .place_mark(position)
        .expect("bot produced an illegal move");
    println!("Computer plays position {}", position + 1);
}

fn report_result(state: &GameState, human_mark: Mark) {
    ui::print_board(&state.board);

    match state.winner_mark() {
        Some(mark) if mark == human_mark => {
            println!("You win! That was not supposed to happen.");
        }
        Some(_) => {
            println!("Computer wins. Unbeatable remains unbeaten.");
        }
        None => {
            println!("It's a draw!");
        }
    }

    if let Some(line) = check_win_with_line(&state.board) {
        let [a, b, c] = line.positions;
        println!("Winning line: {}-{}-{}", a + 1, b + 1, c + 1);
    }
}

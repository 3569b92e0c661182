use std::io::{self, Write};

use common::engine::tictactoe::{Board, Mark};

pub fn print_board(board: &Board) {
    let row =
        |start: usize| format!(" {} | {} | {} ", board[start], board[start + 1], board[start + 2]);

    println!();
    println!("{}", row(0));
    println!("---+---+---");
    println!("{}", row(3));
    println!("---+---+---");
    println!("{}", row(6));
    println!();
}

pub fn print_index_map() {
    println!("Board index map:");
    println!(" 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n");
}

fn read_trimmed_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().expect("Failed to flush stdout");

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => {
            println!("\nInput closed, exiting.");
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_uppercase(),
        Err(err) => {
            eprintln!("Failed to read input: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn ask_choice(prompt: &str, valid: &[&str]) -> String {
    loop {
        let answer = read_trimmed_line(prompt);
        if valid.contains(&answer.as_str()) {
            return answer;
        }
        println!("Please type one of: {}", valid.join(", "));
    }
}

/// Like `ask_choice`, but an empty line means "use the default".
pub fn ask_choice_or_default(prompt: &str, valid: &[&str]) -> Option<String> {
    loop {
        let answer = read_trimmed_line(prompt);
        if answer.is_empty() {
            return None;
        }
        if valid.contains(&answer.as_str()) {
            return Some(answer);
        }
        println!(
            "Please type one of: {} (or press Enter for the default)",
            valid.join(", ")
        );
    }
}

pub fn ask_move(board: &Board) -> usize {
    loop {
        let raw = read_trimmed_line("Enter your move (1-9, left-to-right, top-to-bottom): ");
        let entered: usize = match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Please enter a valid number (1-9).");
                continue;
            }
        };

        if entered < 1 || entered > 9 {
            println!("Choose a number from 1 to 9.");
            continue;
        }

        let position = entered - 1;
        if board[position] != Mark::Empty {
            println!("That spot is taken. Try again.");
            continue;
        }

        return position;
    }
}

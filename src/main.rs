use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};
use std::time::Instant;

use gridgame_ai::board::{Board, GameState, Move, Placement, Player};
use gridgame_ai::eval::EvalPolicy;
use gridgame_ai::search::Searcher;
use gridgame_ai::{CONNECT_COLUMNS, TIC_TAC_TOE_SIZE};

mod display;
use display::draw_board;

const DEFAULT_CONNECT_DEPTH: usize = 7;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to the grid game arena\n");

    // choose the game variant
    let board;
    let eval;
    loop {
        print!("Which game? 1: tic-tac-toe, 2: Connect 4: ");
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.trim() {
            "1" => {
                board = Board::tic_tac_toe()?;
                eval = EvalPolicy::Exact;
                break;
            }
            "2" => {
                board = Board::connect_four()?;
                eval = EvalPolicy::Windowed;
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    // tic-tac-toe is searched to the full board, Connect 4 to a chosen bound
    let depth = match board.placement() {
        Placement::Direct => TIC_TAC_TOE_SIZE * TIC_TAC_TOE_SIZE,
        Placement::GravityDrop => loop {
            print!(
                "Search depth for the AI? (default {}, higher is slower): ",
                DEFAULT_CONNECT_DEPTH
            );
            stdout().flush().expect("failed to flush to stdout!");

            let mut buffer = String::new();
            stdin.read_line(&mut buffer)?;
            let trimmed = buffer.trim();
            if trimmed.is_empty() {
                break DEFAULT_CONNECT_DEPTH;
            }
            match trimmed.parse::<usize>() {
                Ok(depth) if depth > 0 => break depth,
                _ => println!("Invalid depth: {}", trimmed),
            }
        },
    };

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut board = board;
    let mut searcher = Searcher::new(depth, eval)?;
    let mut current = Player::One;

    // game loop
    loop {
        draw_board(&board).expect("Failed to draw board!");

        match board.terminal_status() {
            GameState::Playing => {
                let ai_turn = match current {
                    Player::One => ai_players.0,
                    Player::Two => ai_players.1,
                };

                let next_move = if ai_turn {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let start = Instant::now();
                    let result = searcher.best_move(&board, current)?;
                    let elapsed = start.elapsed();

                    match result.mv {
                        Some(mv) => {
                            println!(
                                "AI plays {} with a score of {} ({} nodes in {:.3}s)",
                                mv,
                                result.score,
                                searcher.node_count,
                                elapsed.as_secs_f64()
                            );
                            mv
                        }
                        None => {
                            // no legal continuation, nothing to apply
                            println!("No moves remain.");
                            break;
                        }
                    }
                } else {
                    match read_human_move(&stdin, board.placement()) {
                        Some(mv) => mv,
                        None => continue,
                    }
                };

                if let Err(err) = board.place(next_move, current) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                current = current.other();
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

/// Reads a move from stdin: "row col" for direct placement, a column
/// number for gravity drop
fn read_human_move(stdin: &Stdin, placement: Placement) -> Option<Move> {
    match placement {
        Placement::Direct => print!("Move input (row col) > "),
        Placement::GravityDrop => print!("Move input (column) > "),
    }
    stdout().flush().expect("Failed to flush to stdout!");

    let mut input_str = String::new();
    if stdin.read_line(&mut input_str).is_err() {
        return None;
    }

    match placement {
        Placement::Direct => {
            let mut fields = input_str.split_whitespace();
            let row = fields.next()?.parse::<usize>().ok();
            let col = fields.next()?.parse::<usize>().ok();
            match (row, col) {
                (Some(row), Some(col))
                    if row < TIC_TAC_TOE_SIZE && col < TIC_TAC_TOE_SIZE =>
                {
                    Some(Move::Cell { row, col })
                }
                _ => {
                    println!("Invalid move: {}", input_str.trim());
                    None
                }
            }
        }
        Placement::GravityDrop => match input_str.trim().parse::<usize>() {
            Ok(col) if col < CONNECT_COLUMNS => Some(Move::Column(col)),
            _ => {
                println!("Invalid column: {}", input_str.trim());
                None
            }
        },
    }
}

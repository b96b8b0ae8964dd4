use std::io::{self, Write};

use super::{MoveScript, TerminalDisplay};
use crate::BoardDisplay;
use crate::board::Coord;
use crate::feedback::compute_feedback;
use crate::game_logic::Game;

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal session against a single [`Game`].
///
/// Selecting a square highlights its destinations; move scripts are
/// validated before they are committed.
pub fn run_interactive_terminal() {
    let mut game = Game::new();
    let mut display = TerminalDisplay::new();
    let mut selected: Option<Coord> = None;

    clear_screen();
    draw_interface(&mut display, &game, selected);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "s" => {
                if parts.len() < 2 {
                    println!("Usage: s <square>");
                } else {
                    match parts[1].parse::<Coord>() {
                        Ok(square) => {
                            selected = Some(square);
                            clear_screen();
                            draw_interface(&mut display, &game, selected);
                        }
                        Err(e) => println!("Invalid square: {}", e),
                    }
                }
            }
            "m" => {
                if parts.len() < 2 {
                    println!("Usage: m <moves>  (e.g. m e2e4 e7e5)");
                } else {
                    let mut script = MoveScript::new();
                    if let Err(e) = script.push_script(&parts[1..].join(" ")) {
                        println!("❌ {}", e);
                        continue;
                    }
                    let result = script.drain(&mut game);
                    selected = None;
                    clear_screen();
                    draw_interface(&mut display, &game, selected);
                    match result {
                        Ok(played) => println!("\n✅ Played {} move(s)", played),
                        Err(e) => println!("\n❌ {}", e),
                    }
                }
            }
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <fen> | load startpos");
                } else {
                    let loaded = if parts[1] == "startpos" {
                        Ok(Game::new())
                    } else {
                        // Rejoin the rest of the parts as FEN contains spaces
                        Game::from_fen(&parts[1..].join(" "))
                    };

                    match loaded {
                        Ok(new_game) => {
                            game = new_game;
                            selected = None;
                            clear_screen();
                            draw_interface(&mut display, &game, selected);
                            println!("\n✅ Position loaded from FEN");
                        }
                        Err(e) => println!("❌ {}", e),
                    }
                }
            }
            "r" => {
                game = Game::new();
                selected = None;
                clear_screen();
                draw_interface(&mut display, &game, selected);
                println!("\n🔄 Reset to initial state");
            }
            "p" => {
                clear_screen();
                draw_interface(&mut display, &game, selected);
            }
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Draws the complete interface: help text, turn, and board.
fn draw_interface(display: &mut TerminalDisplay, game: &Game, selected: Option<Coord>) {
    println!("♟️  Chess Move Checker");
    println!();
    println!("Commands: s <square> | m <moves> | load <fen> | r (reset) | p (refresh) | q (quit)");
    println!();

    let feedback = compute_feedback(game, selected);
    if let Err(e) = display.show(game.board(), &feedback) {
        eprintln!("{}", e);
    }

    let side = if game.is_white_to_move() {
        "White"
    } else {
        "Black"
    };
    println!();
    println!("{} to move | FEN: {}", side, game.to_fen());
    if let Some(square) = selected {
        let moves: Vec<String> = game
            .legal_moves(square)
            .iter()
            .map(Coord::to_string)
            .collect();
        println!("Selected {}: [{}]", square, moves.join(", "));
    }
}

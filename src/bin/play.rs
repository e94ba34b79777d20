use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tesseract_chess::coord::{Coord, Dims, AXES};
use tesseract_chess::game::{AlienOp, Game};
use tesseract_chess::project::project;

const HELP: &str = "\
Commands:
  show                          Display a projection of the board.
  status                        Display the current game status.
  move x,y,z,w a,b,c,d          Move from start to end coordinate.
  alien <op> [args]             Perform an alien layout operation. Examples:
                                alien transpose 0 1 2 3
                                alien swapaxis 0 2
                                alien moveaxis 3 0
                                alien reshapeaxis 0 4
  help                          Show this message.
  quit                          Exit the game.
";

fn parse_coordinate(text: &str) -> Result<Coord, String> {
    let cleaned = text.replace(['(', ')'], "");
    let parts: Vec<&str> = cleaned.split(',').collect();
    if parts.len() != AXES {
        return Err("coordinates must have four comma-separated values".into());
    }
    let mut values = [0i32; AXES];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("not an integer: {part}"))?;
    }
    Ok(Coord(values))
}

fn parse_alien_op(tokens: &[&str]) -> Result<AlienOp, String> {
    let (op, args) = tokens
        .split_first()
        .ok_or_else(|| "alien requires an operation name".to_string())?;
    let nums: Vec<i32> = args
        .iter()
        .map(|a| a.parse().map_err(|_| format!("not an integer: {a}")))
        .collect::<Result<_, _>>()?;
    match (op.to_lowercase().as_str(), nums.as_slice()) {
        ("transpose", &[a, b, c, d]) => Ok(AlienOp::Transpose([
            a as usize, b as usize, c as usize, d as usize,
        ])),
        ("swapaxis", &[a, b]) => Ok(AlienOp::SwapAxes(a as usize, b as usize)),
        ("moveaxis", &[src, dst]) => Ok(AlienOp::MoveAxis(src as usize, dst as usize)),
        ("reshapeaxis", &[axis, size]) => Ok(AlienOp::ReshapeAxis(axis as usize, size)),
        _ => Err(format!("unknown alien operation or argument count: {op}")),
    }
}

fn run(players: usize, dims: Dims) -> Result<(), String> {
    let mut game = Game::new(players, dims).map_err(|e| e.to_string())?;
    println!("Welcome to 4D Chess! Type 'help' for a list of commands.");
    let stdin = io::stdin();
    loop {
        if game.winner().is_some() {
            println!("{}", game.status_report());
            return Ok(());
        }
        print!("[{}] > ", game.current_player());
        io::stdout().flush().ok();
        let mut raw = String::new();
        if stdin.lock().read_line(&mut raw).map_err(|e| e.to_string())? == 0 {
            println!();
            return Ok(());
        }
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens[0].to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("Exiting game.");
                return Ok(());
            }
            "help" => println!("{HELP}"),
            "show" => println!("{}", project(&game.board).join("\n")),
            "status" => println!("{}", game.status_report()),
            "move" if tokens.len() == 3 => {
                let result = parse_coordinate(tokens[1]).and_then(|start| {
                    let end = parse_coordinate(tokens[2])?;
                    game.play_move(start, end).map_err(|e| e.to_string())?;
                    Ok(())
                });
                if let Err(message) = result {
                    println!("Error: {message}");
                }
            }
            "alien" => {
                let player = game.current_player().index;
                let result = parse_alien_op(&tokens[1..]).and_then(|op| {
                    game.alien_op(player, op).map_err(|e| e.to_string())?;
                    Ok(())
                });
                if let Err(message) = result {
                    println!("Error: {message}");
                }
            }
            _ => println!("Unknown command. Type 'help' for assistance."),
        }
    }
}

fn main() -> ExitCode {
    let mut players = 2usize;
    let mut sizes = [8i32; AXES];

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--players" if i + 1 < args.len() => {
                players = match args[i + 1].parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Invalid player count: {}", args[i + 1]);
                        return ExitCode::FAILURE;
                    }
                };
                i += 2;
            }
            "--dims" if i + AXES < args.len() => {
                for (slot, arg) in sizes.iter_mut().zip(&args[i + 1..i + 1 + AXES]) {
                    *slot = match arg.parse() {
                        Ok(n) => n,
                        Err(_) => {
                            eprintln!("Invalid dimension: {arg}");
                            return ExitCode::FAILURE;
                        }
                    };
                }
                i += 1 + AXES;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: play [--players N] [--dims A B C D]");
                return ExitCode::FAILURE;
            }
        }
    }

    if sizes.iter().any(|&s| s <= 0) {
        eprintln!("Board dimensions must be positive: {sizes:?}");
        return ExitCode::FAILURE;
    }

    match run(players, Dims::new(sizes)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Fatal error: {message}");
            ExitCode::FAILURE
        }
    }
}

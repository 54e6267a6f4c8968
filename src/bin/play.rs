use std::io::{self, BufRead, Write};

use chess_rules::config::RulesConfig;
use chess_rules::coord::Coordinate;
use chess_rules::error::ChessError;
use chess_rules::game::{Game, Outcome, Selection};
use chess_rules::piece::PieceType;

const HELP: &str = "commands: <square> (e.g. e2), <from><to> (e.g. e2e4), \
q/r/b/n (promotion), undo, redo, reset, board, json, help, quit";

fn print_status(game: &Game) {
    println!("{}", game.board_snapshot());
    match game.outcome() {
        Outcome::Checkmate { winner } => println!("CHECKMATE, {winner} wins (type reset or quit)"),
        Outcome::Stalemate => println!("STALEMATE (type reset or quit)"),
        Outcome::Ongoing if game.is_in_check() => println!("{} to move, in check", game.side_to_move()),
        Outcome::Ongoing => println!("{} to move", game.side_to_move()),
    }
}

fn report(game: &Game, selection: Selection) {
    match selection {
        Selection::Selected => {
            let moves: Vec<String> = game.legal_destinations().iter().map(|c| c.to_string()).collect();
            println!("legal: [{}]", moves.join(", "));
        }
        Selection::Moved => print_status(game),
        Selection::PromotionPending => {
            println!("PAWN PROMOTION: [Q] queen, [R] rook, [B] bishop, [N] knight")
        }
        Selection::Cleared | Selection::Ignored => {}
    }
}

fn select_squares(game: &mut Game, input: &str) -> Result<(), ChessError> {
    if let (4, Some(from), Some(to)) = (input.len(), input.get(..2), input.get(2..)) {
        let from: Coordinate = from.parse()?;
        let to: Coordinate = to.parse()?;
        if game.select(from) == Selection::Selected {
            let selection = game.select(to);
            report(game, selection);
        }
    } else {
        let at: Coordinate = input.parse()?;
        let selection = game.select(at);
        report(game, selection);
    }
    Ok(())
}

fn handle(game: &mut Game, input: &str) -> Result<bool, ChessError> {
    if game.pending_promotion().is_some() && input.len() == 1 {
        if let Some(piece_type) = input.chars().next().and_then(PieceType::from_char) {
            game.supply_promotion_choice(piece_type)?;
            print_status(game);
            return Ok(true);
        }
    }

    match input {
        "quit" | "exit" => return Ok(false),
        "help" => println!("{HELP}"),
        "board" => print_status(game),
        "json" => println!("{}", serde_json::to_string_pretty(game.board_snapshot())?),
        "undo" => {
            if game.undo() {
                println!("UNDO");
                print_status(game);
            }
        }
        "redo" => {
            if game.redo() {
                println!("REDO");
                print_status(game);
            }
        }
        "reset" => {
            game.reset();
            print_status(game);
        }
        _ => select_squares(game, input)?,
    }
    Ok(true)
}

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RulesConfig::load(path)?,
        None => RulesConfig::default(),
    };
    let mut game = Game::with_config(config);

    println!("{HELP}");
    print_status(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim().to_ascii_lowercase();
        if input.is_empty() {
            continue;
        }
        match handle(&mut game, &input) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

// Plays random legal games through the command surface and checks the
// engine's invariants after every ply. Usage: playout [games] [seed]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use chess_rules::game::{Game, Outcome, Selection};
use chess_rules::piece::{Color, PieceType};

const MAX_PLIES: u32 = 300;
const DEFAULT_GAMES: usize = 20;

#[derive(Debug, Default)]
struct Tally {
    white_wins: u32,
    black_wins: u32,
    stalemates: u32,
    unfinished: u32,
    plies: u64,
    undo_checks: u32,
}

/// One invariant violation, described for the summary.
type Violation = String;

fn check_position(game: &Game) -> Result<(), Violation> {
    let board = game.board_snapshot();
    let turn = game.side_to_move();
    for piece in board.pieces_of(turn) {
        let legal = game.legal_moves_for(&piece);
        for mv in &legal {
            let mut clone = board.clone();
            clone.apply(mv);
            if clone.is_in_check(turn) {
                return Err(format!("{mv} leaves the king in check"));
            }
        }
        for to in piece.get_moves(board) {
            if legal.iter().any(|m| m.to == to) {
                continue;
            }
            let mut clone = board.clone();
            clone.move_piece(piece.position, to);
            if !clone.is_in_check(turn) {
                return Err(format!("{piece}{to} was filtered but is safe"));
            }
        }
    }
    Ok(())
}

fn play_game(rng: &mut StdRng, tally: &mut Tally) -> Result<(), Violation> {
    let mut game = Game::new();
    for _ in 0..MAX_PLIES {
        if game.outcome().is_terminal() {
            break;
        }
        check_position(&game)?;

        let moves = game.all_legal_moves(game.side_to_move());
        let Some(mv) = moves.choose(rng).copied() else {
            return Err("ongoing game without legal moves".to_string());
        };
        let before = game.side_to_move();
        game.select(mv.from);
        match game.select(mv.to) {
            Selection::Moved => {}
            Selection::PromotionPending => {
                let choice = PieceType::PROMOTIONS[rng.gen_range(0..PieceType::PROMOTIONS.len())];
                game.supply_promotion_choice(choice).map_err(|e| e.to_string())?;
            }
            other => return Err(format!("{mv} rejected: {other:?}")),
        }
        if game.side_to_move() == before {
            return Err(format!("turn did not pass after {mv}"));
        }
        tally.plies += 1;
    }

    // Undo everything, redo everything, and expect the same final board.
    let last = game.board_snapshot().clone();
    let plies = game.history_len();
    for _ in 0..plies {
        game.undo();
    }
    for _ in 0..plies {
        game.redo();
    }
    if game.board_snapshot() != &last {
        return Err("undo/redo did not restore the final board".to_string());
    }
    tally.undo_checks += 1;

    match game.outcome() {
        Outcome::Checkmate { winner } if winner == Color::White => tally.white_wins += 1,
        Outcome::Checkmate { .. } => tally.black_wins += 1,
        Outcome::Stalemate => tally.stalemates += 1,
        Outcome::Ongoing => tally.unfinished += 1,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let games = args.next().and_then(|a| a.parse().ok()).unwrap_or(DEFAULT_GAMES);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("=== Random playouts: {games} games, seed {seed} ===");
    let mut tally = Tally::default();
    let mut failures = 0;
    for i in 0..games {
        if let Err(violation) = play_game(&mut rng, &mut tally) {
            failures += 1;
            eprintln!("  game {i}: {violation}");
        }
    }

    println!("{tally:?}");
    if failures > 0 {
        eprintln!("{failures} game(s) violated an invariant");
        std::process::exit(1);
    }
}

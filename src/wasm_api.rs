use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::coord::Coordinate;
use crate::game::{Game, Outcome, Selection};
use crate::piece::PieceType;

#[derive(Serialize)]
struct SquarePiece {
    piece_type: String,
    color: String,
    move_count: u32,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    side_to_move: String,
    selected: Option<[usize; 2]>,
    legal_destinations: Vec<[usize; 2]>,
    is_in_check: bool,
    outcome: String,
    winner: Option<String>,
    pending_promotion: Option<[usize; 2]>,
    can_undo: bool,
    can_redo: bool,
}

#[derive(Serialize)]
struct CommandResult {
    #[serde(flatten)]
    board_state: BoardState,
    applied: bool,
    error: Option<String>,
}

fn pair(c: Coordinate) -> [usize; 2] {
    [c.col, c.row]
}

fn string_to_piece_type(s: &str) -> Option<PieceType> {
    match s {
        "Queen" => Some(PieceType::Queen),
        "Rook" => Some(PieceType::Rook),
        "Bishop" => Some(PieceType::Bishop),
        "Knight" => Some(PieceType::Knight),
        _ => s.chars().next().filter(|_| s.len() == 1).and_then(PieceType::from_char),
    }
}

fn build_board_state(game: &Game) -> BoardState {
    let board = game.board_snapshot();
    let squares = board
        .squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.map(|p| SquarePiece {
                        piece_type: p.piece_type.to_string(),
                        color: p.color.to_string(),
                        move_count: p.move_count,
                    })
                })
                .collect()
        })
        .collect();

    let (outcome, winner) = match game.outcome() {
        Outcome::Ongoing => ("Ongoing", None),
        Outcome::Checkmate { winner } => ("Checkmate", Some(winner.to_string())),
        Outcome::Stalemate => ("Stalemate", None),
    };

    BoardState {
        squares,
        side_to_move: game.side_to_move().to_string(),
        selected: game.selected_square().map(pair),
        legal_destinations: game.legal_destinations().into_iter().map(pair).collect(),
        is_in_check: game.is_in_check(),
        outcome: outcome.to_string(),
        winner,
        pending_promotion: game.pending_promotion().map(pair),
        can_undo: game.history_len() > 0,
        can_redo: game.future_len() > 0,
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Browser handle over the rules engine. The page renders the returned
/// state and forwards clicks and key presses.
#[wasm_bindgen(js_name = Game)]
pub struct GameHandle {
    game: Game,
}

#[wasm_bindgen(js_class = Game)]
impl GameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameHandle {
        GameHandle { game: Game::new() }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.game))
    }

    pub fn select(&mut self, col: usize, row: usize) -> JsValue {
        let at = Coordinate::new(col, row);
        if !at.is_on_board() {
            return self.result(false, None);
        }
        let applied = self.game.select(at) != Selection::Ignored;
        self.result(applied, None)
    }

    pub fn undo(&mut self) -> JsValue {
        let applied = self.game.undo();
        self.result(applied, None)
    }

    pub fn redo(&mut self) -> JsValue {
        let applied = self.game.redo();
        self.result(applied, None)
    }

    pub fn reset(&mut self) -> JsValue {
        self.game.reset();
        self.result(true, None)
    }

    pub fn supply_promotion(&mut self, kind: &str) -> JsValue {
        let Some(piece_type) = string_to_piece_type(kind) else {
            return self.result(false, Some(format!("unknown piece: {kind}")));
        };
        match self.game.supply_promotion_choice(piece_type) {
            Ok(()) => self.result(true, None),
            Err(e) => self.result(false, Some(e.to_string())),
        }
    }

    pub fn get_legal_moves_for_square(&self, col: usize, row: usize) -> JsValue {
        if col > 7 || row > 7 {
            return to_js(&Vec::<[usize; 2]>::new());
        }
        let moves: Vec<[usize; 2]> = self
            .game
            .legal_moves_at(Coordinate::new(col, row))
            .into_iter()
            .map(pair)
            .collect();
        to_js(&moves)
    }

    /// Textual board dump for the browser console.
    pub fn dump(&self) -> String {
        self.game.board_snapshot().to_string()
    }
}

impl GameHandle {
    fn result(&self, applied: bool, error: Option<String>) -> JsValue {
        to_js(&CommandResult {
            board_state: build_board_state(&self.game),
            applied,
            error,
        })
    }
}

impl Default for GameHandle {
    fn default() -> Self {
        Self::new()
    }
}

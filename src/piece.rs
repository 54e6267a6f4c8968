use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coordinate;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row a pawn of this color stands on when it may capture en passant.
    pub fn en_passant_row(self) -> usize {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Kinds a pawn may be promoted to.
    pub const PROMOTIONS: [PieceType; 4] =
        [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight];

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Parse a piece letter ("q", "N", ...).
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        f.write_str(name)
    }
}

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2), (1, -2), (-1, 2), (1, 2),
    (-2, -1), (2, -1), (-2, 1), (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0), (0, 1), (-1, 0), (0, -1),
    (1, 1), (-1, -1), (1, -1), (-1, 1),
];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];
const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A piece on the board. Offsets in this module are `(dcol, drow)`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub position: Coordinate,
    /// Completed moves made by this piece. Read by castling and en passant.
    pub move_count: u32,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color, position: Coordinate) -> Self {
        Piece {
            piece_type,
            color,
            position,
            move_count: 0,
        }
    }

    /// Pseudo-legal destinations: the piece's movement pattern only, with no
    /// regard for the safety of its own king. Castling and en passant are
    /// added by the game, which knows the history.
    pub fn get_moves(&self, board: &Board) -> Vec<Coordinate> {
        let mut moves = Vec::new();
        match self.piece_type {
            PieceType::Pawn => self.generate_pawn_moves(board, &mut moves),
            PieceType::Knight => self.generate_step_moves(board, &KNIGHT_OFFSETS, &mut moves),
            PieceType::Bishop => self.generate_sliding_moves(board, &DIAGONALS, &mut moves),
            PieceType::Rook => self.generate_sliding_moves(board, &ORTHOGONALS, &mut moves),
            PieceType::Queen => {
                self.generate_sliding_moves(board, &ORTHOGONALS, &mut moves);
                self.generate_sliding_moves(board, &DIAGONALS, &mut moves);
            }
            PieceType::King => self.generate_step_moves(board, &KING_OFFSETS, &mut moves),
        }
        moves
    }

    fn is_enemy(&self, other: &Piece) -> bool {
        other.color != self.color
    }

    fn generate_pawn_moves(&self, board: &Board, moves: &mut Vec<Coordinate>) {
        let dir = self.color.forward();

        // Two steps from the start, stopping at the first blocker.
        let steps = if self.move_count == 0 { 2 } else { 1 };
        for i in 1..=steps {
            match self.position.offset(0, dir * i) {
                Some(target) if board.piece_at(target).is_none() => moves.push(target),
                _ => break,
            }
        }

        for dc in [1, -1] {
            if let Some(target) = self.position.offset(dc, dir) {
                if board.piece_at(target).is_some_and(|p| self.is_enemy(&p)) {
                    moves.push(target);
                }
            }
        }
    }

    fn generate_step_moves(&self, board: &Board, offsets: &[(i32, i32)], moves: &mut Vec<Coordinate>) {
        for &(dc, dr) in offsets {
            let Some(target) = self.position.offset(dc, dr) else {
                continue;
            };
            match board.piece_at(target) {
                Some(p) if !self.is_enemy(&p) => {}
                _ => moves.push(target),
            }
        }
    }

    fn generate_sliding_moves(&self, board: &Board, directions: &[(i32, i32)], moves: &mut Vec<Coordinate>) {
        for &(dc, dr) in directions {
            let mut current = self.position;
            while let Some(target) = current.offset(dc, dr) {
                if let Some(p) = board.piece_at(target) {
                    if self.is_enemy(&p) {
                        moves.push(target);
                    }
                    break;
                }
                moves.push(target);
                current = target;
            }
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.piece_type.letter())
    }
}

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::moves::{CastleSide, Move, MoveKind};
use crate::piece::{Color, Piece, PieceType};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8×8 placement grid, indexed `squares[row][col]`.
///
/// Mutators here trust their caller: legality is decided by [`crate::game::Game`].
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position; Black occupies rows 0-1.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board.place(Piece::new(piece_type, Color::Black, Coordinate::new(col, 0)));
            board.place(Piece::new(PieceType::Pawn, Color::Black, Coordinate::new(col, 1)));
            board.place(Piece::new(PieceType::Pawn, Color::White, Coordinate::new(col, 6)));
            board.place(Piece::new(piece_type, Color::White, Coordinate::new(col, 7)));
        }
        board
    }

    /// `None` for empty squares and for coordinates off the board.
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares.get(at.row)?.get(at.col).copied().flatten()
    }

    pub fn piece_at_mut(&mut self, at: Coordinate) -> Option<&mut Piece> {
        self.squares.get_mut(at.row)?.get_mut(at.col)?.as_mut()
    }

    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_none()
    }

    /// Put a piece on the square named by its own position, replacing
    /// whatever was there.
    pub fn place(&mut self, piece: Piece) {
        let at = piece.position;
        self.squares[at.row][at.col] = Some(piece);
    }

    pub fn remove(&mut self, at: Coordinate) -> Option<Piece> {
        self.squares[at.row][at.col].take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        self.pieces_of(color)
            .find(|p| p.piece_type == PieceType::King)
            .map(|p| p.position)
    }

    /// Every pseudo-legal destination of every piece of `color`, duplicates
    /// included.
    pub fn get_all_pseudo_moves(&self, color: Color) -> Vec<Coordinate> {
        self.pieces_of(color)
            .flat_map(|p| p.get_moves(self))
            .collect()
    }

    pub fn is_square_attacked_by(&self, at: Coordinate, attacker: Color) -> bool {
        self.get_all_pseudo_moves(attacker).contains(&at)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king) = self.find_king(color) {
            self.is_square_attacked_by(king, color.opposite())
        } else {
            false
        }
    }

    /// Relocate the piece on `from` to `to`; anything on `to` is captured.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) {
        let Some(mut piece) = self.remove(from) else {
            return;
        };
        piece.position = to;
        self.place(piece);
    }

    /// Move the king of `color` to `king_to` and the rook of `side` to the
    /// square the king passed over.
    pub fn castle(&mut self, side: CastleSide, color: Color, king_to: Coordinate) {
        let Some(king_from) = self.find_king(color) else {
            return;
        };
        let rook_from = Coordinate::new(side.rook_col(), king_from.row);
        let rook_to = match side {
            CastleSide::King => Coordinate::new(king_to.col - 1, king_from.row),
            CastleSide::Queen => Coordinate::new(king_to.col + 1, king_from.row),
        };
        debug!("{color} castles {side:?} side");
        self.move_piece(king_from, king_to);
        self.move_piece(rook_from, rook_to);
    }

    /// Move the pawn diagonally and remove the pawn it passed, which stands on
    /// the origin's row in the destination's column.
    pub fn en_passant(&mut self, from: Coordinate, to: Coordinate) {
        let captured = Coordinate::new(to.col, from.row);
        debug!("en passant {from}x{to}, removing {captured}");
        self.move_piece(from, to);
        self.remove(captured);
    }

    pub fn apply(&mut self, mv: &Move) {
        match mv.kind {
            MoveKind::Normal => self.move_piece(mv.from, mv.to),
            MoveKind::Castle(side) => {
                if let Some(king) = self.piece_at(mv.from) {
                    self.castle(side, king.color, mv.to);
                }
            }
            MoveKind::EnPassant => self.en_passant(mv.from, mv.to),
        }
    }

    fn write_row(f: &mut fmt::Formatter<'_>, cells: impl Iterator<Item = String>) -> fmt::Result {
        write!(f, "|")?;
        for cell in cells {
            write!(f, "{cell:^4}|")?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    /// Rank/file labelled grid for terminals and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 43;
        writeln!(f, "{}", "*".repeat(WIDTH))?;
        for (i, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - i)?;
            Self::write_row(f, row.iter().map(|c| c.map(|p| p.to_string()).unwrap_or_default()))?;
            writeln!(f)?;
            writeln!(f, "{}", "-".repeat(WIDTH))?;
        }
        write!(f, "  ")?;
        Self::write_row(f, ('a'..='h').map(String::from))?;
        writeln!(f)?;
        write!(f, "{}", "*".repeat(WIDTH))
    }
}

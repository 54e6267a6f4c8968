use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Column of the rook this side castles with.
    pub fn rook_col(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }
}

/// How a move is carried out on the board.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Castle(CastleSide),
    /// The captured pawn sits beside the origin, not on the destination.
    EnPassant,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Coordinate, to: Coordinate, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    pub fn normal(from: Coordinate, to: Coordinate) -> Self {
        Move::new(from, to, MoveKind::Normal)
    }
}

impl fmt::Display for Move {
    /// Long algebraic form, e.g. "e2e4".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

use thiserror::Error;

use crate::piece::PieceType;

/// Errors surfaced to callers of the engine. Misclicks and empty undo/redo
/// stacks are not errors; they are reported through return values instead.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceType),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read rules config: {0}")]
    Io(#[from] std::io::Error),
}

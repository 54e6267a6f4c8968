use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// Rule toggles. The defaults reproduce the engine's historical behavior;
/// each flag opts into the stricter variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Refuse to offer castling while the king is in check. When off, only
    /// the squares between king and rook and the landing square are verified.
    pub forbid_castling_out_of_check: bool,
    /// Discard the redo stack whenever a new move is committed.
    pub clear_future_on_move: bool,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ChessError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChessError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

// =============================================================================
// Rules engine
//
// Game owns the board plus everything the board cannot know on its own: whose
// turn it is, the move history (for en passant and undo/redo), the current
// selection and the outcome. Legality is decided by brute force: every
// candidate move is played on a clone of the board and rejected if the
// mover's king is then in check.
// =============================================================================

use std::mem;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::RulesConfig;
use crate::coord::Coordinate;
use crate::error::ChessError;
use crate::moves::{CastleSide, Move, MoveKind};
use crate::piece::{Color, Piece, PieceType};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The side that was checkmated, if any.
    pub fn mated(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner.opposite()),
            _ => None,
        }
    }
}

/// What a call to [`Game::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A piece of the side to move is now selected.
    Selected,
    /// The selected piece moved and the turn passed.
    Moved,
    /// A pawn reached the last rank; the turn waits for
    /// [`Game::supply_promotion_choice`].
    PromotionPending,
    /// The click missed the selected piece's destinations; selection dropped.
    Cleared,
    /// Nothing happened.
    Ignored,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Coordinate>,
    legal_moves: Vec<Move>,
    in_check: bool,
    outcome: Outcome,
    pending_promotion: Option<Coordinate>,
    /// Snapshots taken before each committed move.
    history: Vec<Board>,
    /// Snapshots moved aside by undo.
    future: Vec<Board>,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_position_with_config(Board::new(), Color::White, config)
    }

    /// Start from an arbitrary placement. History is empty, so no en passant
    /// capture is available on the first ply.
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self::from_position_with_config(board, turn, RulesConfig::default())
    }

    pub fn from_position_with_config(board: Board, turn: Color, config: RulesConfig) -> Self {
        let mut game = Game {
            board,
            turn,
            selected: None,
            legal_moves: Vec::new(),
            in_check: false,
            outcome: Outcome::Ongoing,
            pending_promotion: None,
            history: Vec::new(),
            future: Vec::new(),
            config,
        };
        game.refresh_status();
        game
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn board_snapshot(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    pub fn selected_square(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Destinations of the selected piece, empty when nothing is selected.
    pub fn legal_destinations(&self) -> Vec<Coordinate> {
        self.legal_moves.iter().map(|m| m.to).collect()
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn pending_promotion(&self) -> Option<Coordinate> {
        self.pending_promotion
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Destinations of the side-to-move piece on `at`, without selecting it.
    pub fn legal_moves_at(&self, at: Coordinate) -> Vec<Coordinate> {
        match self.board.piece_at(at) {
            Some(piece) if piece.color == self.turn => self.get_legal_moves(&piece),
            _ => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Legal move generation
    // -------------------------------------------------------------------------

    pub fn get_legal_moves(&self, piece: &Piece) -> Vec<Coordinate> {
        self.legal_moves_for(piece).into_iter().map(|m| m.to).collect()
    }

    /// Pseudo-legal moves plus en passant and castling, keeping only those
    /// that leave the mover's king out of check.
    pub fn legal_moves_for(&self, piece: &Piece) -> Vec<Move> {
        let from = piece.position;
        let mut candidates: Vec<Move> = piece
            .get_moves(&self.board)
            .into_iter()
            .map(|to| Move::normal(from, to))
            .collect();

        match piece.piece_type {
            PieceType::Pawn => candidates.extend(
                self.get_en_passant_move(piece)
                    .into_iter()
                    .map(|to| Move::new(from, to, MoveKind::EnPassant)),
            ),
            PieceType::King => candidates.extend(
                self.get_castle_move(piece)
                    .into_iter()
                    .map(|(side, to)| Move::new(from, to, MoveKind::Castle(side))),
            ),
            _ => {}
        }

        candidates
            .into_iter()
            .filter(|m| {
                let mut clone = self.board.clone();
                clone.apply(m);
                !clone.is_in_check(piece.color)
            })
            .collect()
    }

    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .flat_map(|p| self.legal_moves_for(&p))
            .collect()
    }

    /// En passant destinations for `pawn`: an enemy pawn beside it has made
    /// exactly one move, and that square was empty before the last ply.
    pub fn get_en_passant_move(&self, pawn: &Piece) -> Vec<Coordinate> {
        let mut moves = Vec::new();
        if pawn.position.row != pawn.color.en_passant_row() {
            return moves;
        }
        let Some(before) = self.history.last() else {
            return moves;
        };

        for dc in [1, -1] {
            let Some(beside) = pawn.position.offset(dc, 0) else {
                continue;
            };
            let just_arrived = self.board.piece_at(beside).is_some_and(|p| {
                p.piece_type == PieceType::Pawn && p.color != pawn.color && p.move_count == 1
            });
            if just_arrived && before.is_empty(beside) {
                if let Some(target) = pawn.position.offset(dc, pawn.color.forward()) {
                    moves.push(target);
                }
            }
        }
        moves
    }

    /// Castling destinations for an unmoved `king`. The squares between king
    /// and rook must be empty and outside the opponent's pseudo-moves; the
    /// landing square is left to the check filter.
    pub fn get_castle_move(&self, king: &Piece) -> Vec<(CastleSide, Coordinate)> {
        let mut moves = Vec::new();
        if king.move_count != 0 {
            return moves;
        }
        if self.config.forbid_castling_out_of_check && self.board.is_in_check(king.color) {
            return moves;
        }

        let attacked = self.board.get_all_pseudo_moves(king.color.opposite());
        let row = king.position.row;

        for side in [CastleSide::King, CastleSide::Queen] {
            let rook_col = side.rook_col();
            let rook_ready = self
                .board
                .piece_at(Coordinate::new(rook_col, row))
                .is_some_and(|p| {
                    p.piece_type == PieceType::Rook && p.color == king.color && p.move_count == 0
                });
            if !rook_ready {
                continue;
            }

            let (low, high) = if rook_col > king.position.col {
                (king.position.col + 1, rook_col)
            } else {
                (rook_col + 1, king.position.col)
            };
            let gap_clear = (low..high).map(|col| Coordinate::new(col, row)).all(|sq| {
                self.board.is_empty(sq) && !attacked.contains(&sq)
            });
            if !gap_clear {
                continue;
            }

            let king_to = match side {
                CastleSide::King => king.position.offset(2, 0),
                CastleSide::Queen => king.position.offset(-2, 0),
            };
            // The king must land strictly between its square and the rook's.
            if let Some(to) = king_to.filter(|to| (low..high).contains(&to.col)) {
                moves.push((side, to));
            }
        }
        moves
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Two-phase selection: pick up a piece of the side to move, then click
    /// one of its destinations to play it.
    pub fn select(&mut self, at: Coordinate) -> Selection {
        if self.pending_promotion.is_some() || self.outcome.is_terminal() || !at.is_on_board() {
            return Selection::Ignored;
        }

        if self.selected.is_some() {
            let chosen = self.legal_moves.iter().copied().find(|m| m.to == at);
            self.clear_selection();
            return match chosen {
                Some(mv) => self.commit(mv),
                None => Selection::Cleared,
            };
        }

        match self.board.piece_at(at) {
            Some(piece) if piece.color == self.turn => {
                self.selected = Some(at);
                self.legal_moves = self.legal_moves_for(&piece);
                trace!("selected {piece} on {at}: {} moves", self.legal_moves.len());
                Selection::Selected
            }
            _ => Selection::Ignored,
        }
    }

    /// Answer a pending promotion and hand the turn over.
    pub fn supply_promotion_choice(&mut self, piece_type: PieceType) -> Result<(), ChessError> {
        let at = self.pending_promotion.ok_or(ChessError::NoPendingPromotion)?;
        if !piece_type.is_promotion_target() {
            return Err(ChessError::InvalidPromotion(piece_type));
        }
        self.promote_pawn(at, self.turn, piece_type);
        self.pending_promotion = None;
        self.finish_turn();
        Ok(())
    }

    /// Take back the last committed move. Returns `false` when there is
    /// nothing to undo or a promotion is pending.
    pub fn undo(&mut self) -> bool {
        if self.pending_promotion.is_some() {
            return false;
        }
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.future.push(mem::replace(&mut self.board, previous));
        self.turn = self.turn.opposite();
        self.clear_selection();
        self.refresh_status();
        debug!("undo: {} to move", self.turn);
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.pending_promotion.is_some() {
            return false;
        }
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.history.push(mem::replace(&mut self.board, next));
        self.turn = self.turn.opposite();
        self.clear_selection();
        self.refresh_status();
        debug!("redo: {} to move", self.turn);
        true
    }

    /// Back to the starting position, keeping the rules config.
    pub fn reset(&mut self) {
        *self = Game::with_config(mem::take(&mut self.config));
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
    }

    fn commit(&mut self, mv: Move) -> Selection {
        self.history.push(self.board.clone());
        if self.config.clear_future_on_move {
            self.future.clear();
        }

        self.board.apply(&mv);
        let moved = self.board.piece_at_mut(mv.to).map(|p| {
            p.move_count += 1;
            *p
        });

        if let Some(piece) = moved {
            debug!("{piece} plays {mv}");
            if piece.piece_type == PieceType::Pawn && mv.to.row == piece.color.promotion_row() {
                self.pending_promotion = Some(mv.to);
                return Selection::PromotionPending;
            }
        }

        self.finish_turn();
        Selection::Moved
    }

    fn promote_pawn(&mut self, at: Coordinate, color: Color, piece_type: PieceType) {
        debug!("{color} pawn on {at} becomes a {piece_type}");
        self.board.place(Piece::new(piece_type, color, at));
    }

    fn finish_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.refresh_status();
        match self.outcome {
            Outcome::Checkmate { winner } => info!("checkmate, {winner} wins"),
            Outcome::Stalemate => info!("stalemate"),
            Outcome::Ongoing => {}
        }
    }

    fn refresh_status(&mut self) {
        self.in_check = self.board.is_in_check(self.turn);
        self.outcome = if !self.all_legal_moves(self.turn).is_empty() {
            Outcome::Ongoing
        } else if self.in_check {
            Outcome::Checkmate { winner: self.turn.opposite() }
        } else {
            Outcome::Stalemate
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn play(game: &mut Game, from: &str, to: &str) -> Selection {
        assert_eq!(game.select(sq(from)), Selection::Selected, "cannot pick up {from}");
        game.select(sq(to))
    }

    fn sorted(mut v: Vec<Coordinate>) -> Vec<Coordinate> {
        v.sort();
        v
    }

    fn position(pieces: &[(PieceType, Color, &str)]) -> Board {
        let mut board = Board::empty();
        for &(piece_type, color, at) in pieces {
            board.place(Piece::new(piece_type, color, sq(at)));
        }
        board
    }

    #[test]
    fn opening_position_has_twenty_legal_moves() {
        let game = Game::new();
        assert_eq!(game.all_legal_moves(Color::White).len(), 20);
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert!(!game.is_in_check());
    }

    #[test]
    fn selecting_an_enemy_or_empty_square_is_ignored() {
        let mut game = Game::new();
        assert_eq!(game.select(sq("e4")), Selection::Ignored);
        assert_eq!(game.select(sq("e7")), Selection::Ignored);
        assert_eq!(game.selected_square(), None);
    }

    #[test]
    fn selecting_off_the_board_is_ignored() {
        let mut game = Game::new();
        let outside = Coordinate::new(8, 0);
        assert_eq!(game.select(outside), Selection::Ignored);
        assert!(game.legal_moves_at(outside).is_empty());

        game.select(sq("e2"));
        assert_eq!(game.select(Coordinate::new(4, 8)), Selection::Ignored);
        assert_eq!(game.selected_square(), Some(sq("e2")));
        assert_eq!(game.select(sq("e4")), Selection::Moved);
    }

    #[test]
    fn missed_destination_clears_selection_without_moving() {
        let mut game = Game::new();
        game.select(sq("e2"));
        assert_eq!(sorted(game.legal_destinations()), sorted(vec![sq("e3"), sq("e4")]));
        assert_eq!(game.select(sq("e5")), Selection::Cleared);
        assert_eq!(game.selected_square(), None);
        assert!(game.legal_destinations().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn committed_move_bumps_move_count_and_flips_turn() {
        let mut game = Game::new();
        assert_eq!(play(&mut game, "g1", "f3"), Selection::Moved);
        let knight = game.board_snapshot().piece_at(sq("f3")).unwrap();
        assert_eq!(knight.move_count, 1);
        assert_eq!(knight.position, sq("f3"));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Bishop, Color::White, "e2"),
            (PieceType::Rook, Color::Black, "e8"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let game = Game::from_position(board, Color::White);
        assert!(game.legal_moves_at(sq("e2")).is_empty());

        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::White, "e2"),
            (PieceType::Rook, Color::Black, "e8"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let game = Game::from_position(board, Color::White);
        let moves = sorted(game.legal_moves_at(sq("e2")));
        let expected = ["e3", "e4", "e5", "e6", "e7", "e8"].iter().map(|s| sq(s)).collect();
        assert_eq!(moves, sorted(expected));
    }

    #[test]
    fn king_may_not_step_into_check() {
        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::Black, "d8"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let game = Game::from_position(board, Color::White);
        let moves = game.legal_moves_at(sq("e1"));
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("f2")));
    }

    #[test]
    fn en_passant_needs_a_previous_snapshot() {
        let mut white = Piece::new(PieceType::Pawn, Color::White, sq("e5"));
        white.move_count = 2;
        let mut black = Piece::new(PieceType::Pawn, Color::Black, sq("d5"));
        black.move_count = 1;
        let mut board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::King, Color::Black, "e8"),
        ]);
        board.place(white);
        board.place(black);
        let game = Game::from_position(board, Color::White);
        assert!(game.get_en_passant_move(&white).is_empty());
    }

    #[test]
    fn castling_is_offered_on_both_wings() {
        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::White, "a1"),
            (PieceType::Rook, Color::White, "h1"),
            (PieceType::King, Color::Black, "e8"),
        ]);
        let mut game = Game::from_position(board, Color::White);
        let king = game.board_snapshot().piece_at(sq("e1")).unwrap();
        assert_eq!(
            game.get_castle_move(&king),
            vec![(CastleSide::King, sq("g1")), (CastleSide::Queen, sq("c1"))]
        );

        assert_eq!(play(&mut game, "e1", "c1"), Selection::Moved);
        let board = game.board_snapshot();
        assert_eq!(board.piece_at(sq("c1")).unwrap().piece_type, PieceType::King);
        assert_eq!(board.piece_at(sq("d1")).unwrap().piece_type, PieceType::Rook);
        assert!(board.is_empty(sq("a1")));
        assert_eq!(board.piece_at(sq("c1")).unwrap().move_count, 1);
    }

    #[test]
    fn castling_needs_room_for_the_king_to_land() {
        let board = position(&[
            (PieceType::King, Color::White, "c1"),
            (PieceType::Rook, Color::White, "a1"),
            (PieceType::King, Color::Black, "h8"),
        ]);
        let mut game = Game::from_position(board, Color::White);
        let king = game.board_snapshot().piece_at(sq("c1")).unwrap();
        assert!(game.get_castle_move(&king).is_empty());
        assert!(!game.legal_moves_at(sq("c1")).contains(&sq("a1")));
        assert_eq!(game.select(sq("c1")), Selection::Selected);
        assert_eq!(game.select(sq("a1")), Selection::Cleared);
        assert_eq!(game.board_snapshot().pieces_of(Color::White).count(), 2);

        let board = position(&[
            (PieceType::King, Color::White, "f1"),
            (PieceType::Rook, Color::White, "h1"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let game = Game::from_position(board, Color::White);
        let king = game.board_snapshot().piece_at(sq("f1")).unwrap();
        assert!(game.get_castle_move(&king).is_empty());

        // One square further from the corner leaves room again.
        let board = position(&[
            (PieceType::King, Color::White, "d1"),
            (PieceType::Rook, Color::White, "a1"),
            (PieceType::King, Color::Black, "h8"),
        ]);
        let mut game = Game::from_position(board, Color::White);
        let king = game.board_snapshot().piece_at(sq("d1")).unwrap();
        assert_eq!(game.get_castle_move(&king), vec![(CastleSide::Queen, sq("b1"))]);
        assert_eq!(play(&mut game, "d1", "b1"), Selection::Moved);
        let board = game.board_snapshot();
        assert_eq!(board.piece_at(sq("b1")).unwrap().piece_type, PieceType::King);
        assert_eq!(board.piece_at(sq("c1")).unwrap().piece_type, PieceType::Rook);
        assert_eq!(board.pieces_of(Color::White).count(), 2);
    }

    #[test]
    fn castling_out_of_check_follows_the_config() {
        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::White, "h1"),
            (PieceType::Rook, Color::Black, "e5"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let legacy = Game::from_position(board.clone(), Color::White);
        assert!(legacy.is_in_check());
        assert!(legacy.legal_moves_at(sq("e1")).contains(&sq("g1")));

        let strict = Game::from_position_with_config(
            board,
            Color::White,
            RulesConfig {
                forbid_castling_out_of_check: true,
                ..RulesConfig::default()
            },
        );
        assert!(!strict.legal_moves_at(sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn castling_into_check_is_filtered() {
        let board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::White, "h1"),
            (PieceType::Pawn, Color::Black, "h2"),
            (PieceType::King, Color::Black, "a8"),
        ]);
        let game = Game::from_position(board, Color::White);
        let king = game.board_snapshot().piece_at(sq("e1")).unwrap();
        // A pawn's pseudo-moves only cover occupied diagonals, so the gap rule
        // misses the attack on g1; playing the castle on the clone catches it.
        assert_eq!(game.get_castle_move(&king), vec![(CastleSide::King, sq("g1"))]);
        assert!(!game.legal_moves_at(sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn undo_and_redo_move_snapshots_between_stacks() {
        let mut game = Game::new();
        assert!(!game.undo());
        assert!(!game.redo());

        play(&mut game, "e2", "e4");
        let after = game.board_snapshot().clone();
        assert!(game.undo());
        assert_eq!(game.board_snapshot(), &Board::new());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!((game.history_len(), game.future_len()), (0, 1));

        assert!(game.redo());
        assert_eq!(game.board_snapshot(), &after);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn new_move_keeps_redo_stack_unless_configured() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        game.undo();
        play(&mut game, "d2", "d4");
        assert_eq!(game.future_len(), 1);

        let mut game = Game::with_config(RulesConfig {
            clear_future_on_move: true,
            ..RulesConfig::default()
        });
        play(&mut game, "e2", "e4");
        game.undo();
        play(&mut game, "d2", "d4");
        assert_eq!(game.future_len(), 0);
    }

    #[test]
    fn promotion_blocks_other_commands_until_answered() {
        let mut pawn = Piece::new(PieceType::Pawn, Color::White, sq("b7"));
        pawn.move_count = 5;
        let mut board = position(&[
            (PieceType::King, Color::White, "e1"),
            (PieceType::King, Color::Black, "h8"),
        ]);
        board.place(pawn);
        let mut game = Game::from_position(board, Color::White);

        assert_eq!(play(&mut game, "b7", "b8"), Selection::PromotionPending);
        assert_eq!(game.pending_promotion(), Some(sq("b8")));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.select(sq("e1")), Selection::Ignored);
        assert!(!game.undo());
        assert!(matches!(
            game.supply_promotion_choice(PieceType::King),
            Err(ChessError::InvalidPromotion(PieceType::King))
        ));

        game.supply_promotion_choice(PieceType::Knight).unwrap();
        let knight = game.board_snapshot().piece_at(sq("b8")).unwrap();
        assert_eq!((knight.piece_type, knight.color, knight.move_count), (PieceType::Knight, Color::White, 0));
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(matches!(
            game.supply_promotion_choice(PieceType::Queen),
            Err(ChessError::NoPendingPromotion)
        ));
    }

    #[test]
    fn reset_restores_the_start_and_keeps_config() {
        let config = RulesConfig {
            clear_future_on_move: true,
            ..RulesConfig::default()
        };
        let mut game = Game::with_config(config.clone());
        play(&mut game, "e2", "e4");
        game.select(sq("e7"));
        game.reset();
        assert_eq!(game.board_snapshot(), &Board::new());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.selected_square(), None);
        assert_eq!((game.history_len(), game.future_len()), (0, 0));
        assert_eq!(game.config(), &config);
    }
}

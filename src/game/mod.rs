//! Turn-by-turn game state machine.
//!
//! A [`Game`] owns one board plus everything the board alone cannot know:
//! side to move, move clocks, the repetition history and the result. Every
//! call to [`Game::make_move`] re-evaluates the result in a fixed order
//! (fifty-move rule, insufficient material, repetition, mate or stalemate).

mod state;

#[cfg(test)]
mod tests;

pub use state::{DrawReason, GameError, GameState, FIFTY_MOVE_LIMIT, REPETITION_LIMIT};

use state::RepetitionTable;

use crate::board::{Board, Color, FenError, FenFields, Move, MoveKind, PieceKind, Square};
use crate::zobrist::default_hasher;

/// A chess game in progress (or finished).
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
    state: GameState,
    draw_reason: Option<DrawReason>,
    repetitions: RepetitionTable,
    hash: u64,
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::starting_position(), Color::White, 0, 1)
    }

    /// A game from a FEN record.
    ///
    /// The initial position is evaluated like any other, so a FEN describing
    /// a mate, stalemate or dead draw yields a finished game.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields = FenFields::parse(fen)?;
        let board = Board::from_fen_parts(&fields.placement, &fields.castling, &fields.en_passant)?;
        Ok(Game::from_board(
            board,
            fields.side_to_move,
            fields.halfmove_clock,
            fields.fullmove_number,
        ))
    }

    /// A game from an already built board.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color, halfmove_clock: u32, fullmove_number: u32) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            halfmove_clock,
            fullmove_number,
            state: GameState::Active,
            draw_reason: None,
            repetitions: RepetitionTable::default(),
            hash: 0,
        };
        game.hash = default_hasher().hash(&game);
        game.repetitions.increment(game.hash);

        if game.halfmove_clock >= FIFTY_MOVE_LIMIT {
            game.finish_draw(DrawReason::FiftyMoveRule);
        } else if game.is_dead_position() {
            game.finish_draw(DrawReason::InsufficientMaterial);
        } else {
            game.check_mate_or_stalemate();
        }
        game
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Set once the game is drawn
    #[inline]
    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        self.draw_reason
    }

    /// Zobrist hash of the current position (default key set).
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// How many times the current position has occurred.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.hash)
    }

    /// Returns true if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.side_to_move)
    }

    /// All legal moves of the side to move.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        self.ensure_active()?;
        Ok(self.board.legal_moves(self.side_to_move))
    }

    /// Legal moves of the piece on `from`, which must belong to the side to move.
    pub fn legal_moves_from(&self, from: Square) -> Result<Vec<Move>, GameError> {
        self.ensure_active()?;
        self.ensure_own_piece(from)?;
        Ok(self.board.legal_moves_from(from, self.side_to_move))
    }

    /// The legal move written in long algebraic form (`e2e4`, `e7e8q`).
    #[must_use]
    pub fn find_move(&self, notation: &str) -> Option<Move> {
        self.legal_moves()
            .ok()?
            .into_iter()
            .find(|m| m.to_string() == notation)
    }

    /// Play a move and return the resulting state.
    ///
    /// The move must be legal in the current position; a move taken from
    /// another game or an earlier ply is refused with
    /// [`GameError::IllegalMove`].
    ///
    /// The side to move and the full-move number advance before the result
    /// is evaluated, so after a drawn or mating move [`Game::side_to_move`]
    /// and [`Game::fen`] already describe the player who would move next.
    pub fn make_move(&mut self, m: &Move) -> Result<GameState, GameError> {
        self.ensure_active()?;
        self.ensure_own_piece(m.from())?;
        if !self.board.legal_moves_from(m.from(), self.side_to_move).contains(m) {
            return Err(GameError::IllegalMove { mv: *m });
        }
        self.apply_move(m)
    }

    /// [`Game::make_move`] without the legality lookup, for moves that come
    /// straight from this position's `legal_moves()`.
    pub(crate) fn apply_move(&mut self, m: &Move) -> Result<GameState, GameError> {
        self.ensure_active()?;

        let mover = self.side_to_move;
        let resets_clock = self.board.piece_on(m.from()).kind() == Some(PieceKind::Pawn)
            || self.board.piece_on(m.to()).is_piece()
            || matches!(m.kind(), MoveKind::EnPassant { .. });

        self.board.make_move(m)?;
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opponent();
        self.hash = default_hasher().hash(self);

        if resets_clock {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
            if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
                self.finish_draw(DrawReason::FiftyMoveRule);
                return Ok(self.state);
            }
        }

        if self.is_dead_position() {
            self.finish_draw(DrawReason::InsufficientMaterial);
            return Ok(self.state);
        }

        if self.repetitions.increment(self.hash) >= REPETITION_LIMIT {
            self.finish_draw(DrawReason::ThreefoldRepetition);
            return Ok(self.state);
        }

        self.check_mate_or_stalemate();
        Ok(self.state)
    }

    /// FEN record of the current position.
    #[must_use]
    pub fn fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!(
            "{} {} {} {} {} {}",
            self.board.placement_fen(),
            side,
            self.board.castling_fen(),
            self.board.en_passant_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Leaf count of the legal move tree from this position.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        self.board.perft(self.side_to_move, depth)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(GameError::NotActive { state: self.state })
        }
    }

    fn ensure_own_piece(&self, square: Square) -> Result<(), GameError> {
        if self.board.piece_on(square).is_color(self.side_to_move) {
            Ok(())
        } else {
            Err(GameError::NotSideToMove { square })
        }
    }

    fn is_dead_position(&self) -> bool {
        Color::BOTH
            .into_iter()
            .all(|color| self.board.has_insufficient_material(color))
    }

    fn check_mate_or_stalemate(&mut self) {
        let side = self.side_to_move;
        if self.board.has_legal_move(side) {
            return;
        }
        self.state = if self.board.is_in_check(side) {
            GameState::win_for(side.opponent())
        } else {
            GameState::Stalemate
        };
        crate::debug_log!("game over: {} ({})", self.state, self.fen());
    }

    fn finish_draw(&mut self, reason: DrawReason) {
        self.state = GameState::Draw;
        self.draw_reason = Some(reason);
        crate::debug_log!("game drawn by {reason} ({})", self.fen());
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl std::str::FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}

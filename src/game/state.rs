use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, MoveError, Square};

/// Half-moves without a capture or pawn move that end the game in a draw.
pub const FIFTY_MOVE_LIMIT: u32 = 100;
/// Occurrences of one position that end the game in a draw.
pub const REPETITION_LIMIT: u32 = 3;

/// Result of a game so far. Every variant but `Active` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Active,
    WhiteWins,
    BlackWins,
    Stalemate,
    Draw,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, GameState::Active)
    }

    /// The state in which `color` has won.
    #[inline]
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWins,
            Color::Black => GameState::BlackWins,
        }
    }

    /// The winning color, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWins => Some(Color::White),
            GameState::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Active => "active",
            GameState::WhiteWins => "white wins",
            GameState::BlackWins => "black wins",
            GameState::Stalemate => "stalemate",
            GameState::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Why a game ended in [`GameState::Draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        };
        f.write_str(text)
    }
}

/// Error type for game-level move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended
    NotActive { state: GameState },
    /// The square does not hold a piece of the side to move
    NotSideToMove { square: Square },
    /// The move is not legal in the current position
    IllegalMove { mv: Move },
    /// The board refused the move
    Board(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotActive { state } => {
                write!(f, "Game is over ({state})")
            }
            GameError::NotSideToMove { square } => {
                write!(f, "Square {square} holds no piece of the side to move")
            }
            GameError::IllegalMove { mv } => {
                write!(f, "Move {mv} is not legal in this position")
            }
            GameError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Board(err)
    }
}

/// Occurrence count per position hash.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let count = self.counts.entry(hash).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}

//! Chess rules on a padded mailbox board, plus a time-bounded search bot.
//!
//! ```
//! use mailbox_chess::{Bot, Game, SearchLimits};
//!
//! let mut game = Game::new();
//! let bot = Bot::new(SearchLimits::depth(2));
//! let mv = bot.generate_move(&game).unwrap();
//! game.make_move(&mv).unwrap();
//! assert_eq!(game.fullmove_number(), 1);
//! ```

/// Debug-level log line through the `log` facade, compiled out without the
/// `logging` feature.
#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use debug_log;

pub mod board;
pub mod game;
mod perft;
pub mod search;
pub mod sync;
pub mod tt;
pub mod zobrist;

pub use board::{
    Board, CastleSide, CastlingRights, Color, FenError, MaterialIndex, Move, MoveError, MoveKind, Piece, PieceKind,
    Square, SquareError, SquareSet, STARTING_FEN,
};
pub use game::{DrawReason, Game, GameError, GameState};
pub use search::{
    generate_move, spawn_search, Bot, SearchHandle, SearchInfo, SearchInfoCallback, SearchLimits, SearchResult,
};
pub use sync::StopFlag;
pub use tt::TranspositionTable;
pub use zobrist::PositionHasher;

//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a wall-clock budget
//! - Minimax with alpha-beta pruning, scores seen from the searching side
//! - Transposition table for move ordering and cutoffs, one per search call
//! - Background search on a worker thread with cooperative cancellation

mod alphabeta;
mod clock;
mod eval;
mod iterative;
mod log;
mod worker;


use std::fmt;
use std::time::Duration;

use crate::board::Move;
use crate::game::{Game, GameError};
use crate::sync::StopFlag;

pub use eval::{evaluate, material_and_position};
pub use self::log::{SearchInfo, SearchInfoCallback};
pub use worker::{spawn_search, SearchHandle};

pub(crate) use clock::{SearchAborted, SearchClock};

/// Score of a won position before the remaining-depth bonus.
pub const WIN_SCORE: i32 = 1_000_000;

/// Bigger than any reachable score.
pub(crate) const INF: i32 = WIN_SCORE * 2;

/// Depth ceiling when neither a time budget nor a max depth is set.
pub const MAX_DEPTH: u32 = 64;

/// Budget used by [`SearchLimits::default`].
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Limits and hooks for one search.
#[derive(Clone)]
pub struct SearchLimits {
    /// Wall-clock budget (None = no deadline)
    pub time_budget: Option<Duration>,
    /// Deepest iteration to run (None = until the budget runs out)
    pub max_depth: Option<u32>,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::time(DEFAULT_TIME_BUDGET)
    }
}

impl SearchLimits {
    /// Create a time-limited search config
    #[must_use]
    pub fn time(budget: Duration) -> Self {
        SearchLimits {
            time_budget: Some(budget),
            max_depth: None,
            info_callback: None,
        }
    }

    /// Create a depth-limited search config with no deadline
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            time_budget: None,
            max_depth: Some(max_depth),
            info_callback: None,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Set callback for per-iteration search info
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    /// The deepest iteration this search may start.
    #[must_use]
    pub fn depth_ceiling(&self) -> u32 {
        self.max_depth.unwrap_or(MAX_DEPTH).clamp(1, MAX_DEPTH)
    }
}

impl fmt::Debug for SearchLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchLimits")
            .field("time_budget", &self.time_budget)
            .field("max_depth", &self.max_depth)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}

/// Outcome of a search: the move to play plus what was learned about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Move,
    /// Score from the searching side's point of view
    pub score: i32,
    /// Deepest completed iteration (0 when no search was needed)
    pub depth: u32,
    /// Nodes visited over all iterations
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Returns true if the score proves a forced win for the searching side.
    #[must_use]
    pub fn is_forced_win(&self) -> bool {
        self.score >= WIN_SCORE
    }
}

/// A computer player.
#[derive(Clone, Debug, Default)]
pub struct Bot {
    limits: SearchLimits,
}

impl Bot {
    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Bot { limits }
    }

    #[must_use]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Search the position and return the full result.
    ///
    /// Fails only when the game is already over.
    pub fn search(&self, game: &Game) -> Result<SearchResult, GameError> {
        self.search_with_stop(game, &StopFlag::new())
    }

    /// Like [`Bot::search`], abandoning the in-flight iteration once `stop`
    /// is raised.
    pub fn search_with_stop(&self, game: &Game, stop: &StopFlag) -> Result<SearchResult, GameError> {
        iterative::iterative_deepening(game, &self.limits, stop)
    }

    /// The move the bot would play.
    pub fn generate_move(&self, game: &Game) -> Result<Move, GameError> {
        self.search(game).map(|result| result.best_move)
    }
}

/// Pick a move for the side to move within `budget`.
pub fn generate_move(game: &Game, budget: Duration) -> Result<Move, GameError> {
    Bot::new(SearchLimits::time(budget)).generate_move(game)
}

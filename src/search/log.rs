use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::board::Move;

/// Information about one completed search iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub best_move: Move,
    /// Positions stored in the transposition table so far
    pub tt_entries: usize,
}

/// Callback type for receiving search iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {} score {} nodes {} time {}ms tt {} bestmove {}",
            self.depth,
            self.score,
            self.nodes,
            self.elapsed.as_millis(),
            self.tt_entries,
            self.best_move
        )
    }
}

/// Send one iteration to the log and to the caller's callback, if any.
pub(crate) fn report(info: &SearchInfo, callback: Option<&SearchInfoCallback>) {
    crate::debug_log!("search {info}");
    if let Some(callback) = callback {
        callback(info);
    }
}

//! Background search on a dedicated thread.

use std::io;
use std::panic;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::game::{Game, GameError};
use crate::sync::StopFlag;

use super::{Bot, SearchLimits, SearchResult};

/// Search thread stack size: 16 MB, enough for the recursion plus one game
/// copy per ply.
const SEARCH_STACK_SIZE: usize = 16 * 1024 * 1024;

type Outcome = Result<SearchResult, GameError>;

/// Handle to a search running on its own thread.
///
/// Dropping the handle detaches the worker, which still ends at its
/// deadline. Call [`SearchHandle::stop`] first to end it sooner.
pub struct SearchHandle {
    stop: StopFlag,
    slot: Arc<Mutex<Option<Outcome>>>,
    thread: JoinHandle<Outcome>,
}

/// Start searching `game` in the background.
///
/// Fails only if the operating system refuses to create the thread.
pub fn spawn_search(game: Game, limits: SearchLimits) -> io::Result<SearchHandle> {
    let stop = StopFlag::new();
    let slot: Arc<Mutex<Option<Outcome>>> = Arc::new(Mutex::new(None));

    let thread = {
        let stop = stop.clone();
        let slot = Arc::clone(&slot);
        thread::Builder::new()
            .name("mailbox-search".into())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let outcome = Bot::new(limits).search_with_stop(&game, &stop);
                *slot.lock() = Some(outcome.clone());
                outcome
            })?
    };

    Ok(SearchHandle { stop, slot, thread })
}

impl SearchHandle {
    /// The result, once the worker has published it.
    #[must_use]
    pub fn try_result(&self) -> Option<Outcome> {
        self.slot.lock().clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Ask the worker to stop; it keeps the deepest completed iteration.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Wait for the worker and take its result.
    ///
    /// A panic on the worker thread is resumed on the caller.
    pub fn join(self) -> Outcome {
        match self.thread.join() {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Stop the search and wait for its result.
    pub fn stop_and_join(self) -> Outcome {
        self.stop();
        self.join()
    }
}

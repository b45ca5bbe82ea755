use std::time::{Duration, Instant};

use crate::sync::StopFlag;

/// Raised inside the search when the deadline passes or a stop is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchAborted;

/// Deadline plus external stop flag, checked at every node.
#[derive(Debug)]
pub(crate) struct SearchClock {
    start: Instant,
    deadline: Option<Instant>,
    stop: StopFlag,
}

impl SearchClock {
    pub(crate) fn new(budget: Option<Duration>, stop: StopFlag) -> Self {
        let start = Instant::now();
        SearchClock {
            start,
            deadline: budget.and_then(|b| start.checked_add(b)),
            stop,
        }
    }

    #[inline]
    pub(crate) fn check(&self) -> Result<(), SearchAborted> {
        if self.stop.is_stopped() {
            return Err(SearchAborted);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(SearchAborted),
            _ => Ok(()),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

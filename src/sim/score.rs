//! Score keeping for the current run and the best across runs

use super::state::ScoreState;

/// Owns the score state. `best` never decreases.
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    state: ScoreState,
}

impl ScoreKeeper {
    /// Start a session with a previously persisted best
    pub fn with_best(best: u32) -> Self {
        Self {
            state: ScoreState { current: 0, best },
        }
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn current(&self) -> u32 {
        self.state.current
    }

    pub fn best(&self) -> u32 {
        self.state.best
    }

    /// Count one pass. Returns the new best if it went up, so the caller can
    /// persist it.
    pub fn on_pass(&mut self) -> Option<u32> {
        self.state.current = self.state.current.saturating_add(1);
        if self.state.current > self.state.best {
            self.raise_best(self.state.current);
            Some(self.state.best)
        } else {
            None
        }
    }

    /// Begin a new run; the best survives
    pub fn reset(&mut self) {
        self.state.current = 0;
    }

    /// Merge a best loaded from storage. Lower values are ignored.
    pub fn restore_best(&mut self, best: u32) {
        if best > self.state.best {
            self.raise_best(best);
        }
    }

    fn raise_best(&mut self, best: u32) {
        debug_assert!(best >= self.state.best, "best score must never decrease");
        self.state.best = self.state.best.max(best);
    }
}

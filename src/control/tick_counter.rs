//! Monotonic tick counter that wraps to zero at a fixed ceiling.
//!
//! The first tick after construction (or after a wrap) is tick 1.

use crate::config::Tick;

pub struct TickCounter {
    current: Tick,
    ceiling: Tick,
}

impl TickCounter {
    pub fn new(ceiling: Tick) -> Self {
        Self {
            current: 0,
            ceiling,
        }
    }

    /// Start a new tick and return its index.
    pub fn advance(&mut self) -> Tick {
        self.current = self.current.saturating_add(1);
        self.current
    }

    /// End-of-tick housekeeping.  Returns `true` if the counter sat at the
    /// ceiling and was reset to zero; callers must rebase any stored tick
    /// stamps in the same step.
    pub fn wrap_if_due(&mut self) -> bool {
        if self.current >= self.ceiling {
            self.current = 0;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Tick {
        self.current
    }

    pub fn ceiling(&self) -> Tick {
        self.ceiling
    }
}

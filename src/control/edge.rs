//! Falling-edge press detector for active-low buttons.
//!
//! Buttons idle high through a pull-up and read low while held.  A press
//! is reported only on the tick where the line goes high → low, so one
//! physical press toggles state once no matter how many ticks it is held.
//! Contact bounce is not filtered.

use super::Level;

pub struct ButtonEdge {
    previous: Level,
}

impl ButtonEdge {
    /// `initial` seeds the previous level, normally from a boot-time read
    /// so a button held at power-on does not count as a press.
    pub fn new(initial: Level) -> Self {
        Self { previous: initial }
    }

    /// Record this tick's level.  Returns `true` on a high → low transition.
    pub fn sample(&mut self, current: Level) -> bool {
        let pressed = self.previous == Level::High && current == Level::Low;
        self.previous = current;
        pressed
    }

    /// Overwrite the previous level without reporting an edge.
    pub fn prime(&mut self, level: Level) {
        self.previous = level;
    }

    pub fn previous(&self) -> Level {
        self.previous
    }
}

impl Default for ButtonEdge {
    fn default() -> Self {
        Self::new(Level::High)
    }
}

//! Free-running idle motion, independent of scrolling.

use crate::Millis;
use crate::anim::{Easing, Repeating};

/// Produces the ambient phase in `[0, 1]`: an eased rise then fall,
/// repeating forever from the moment the carousel becomes visible.
#[derive(Debug, Clone)]
pub struct AmbientOscillator {
    leg_ms: Millis,
    curve: Option<Repeating>,
}

impl AmbientOscillator {
    pub fn new(leg_ms: Millis) -> Self {
        Self {
            leg_ms,
            curve: None,
        }
    }

    /// Start oscillating at `now`. Restarting a running oscillator is a no-op.
    pub fn start(&mut self, now: Millis) {
        if self.curve.is_none() {
            self.curve = Some(Repeating::new(0.0, 1.0, now, self.leg_ms, Easing::InOutQuad));
        }
    }

    pub fn stop(&mut self) {
        self.curve = None;
    }

    pub fn is_running(&self) -> bool {
        self.curve.is_some()
    }

    /// Current phase; `0.0` while stopped.
    pub fn phase(&self, now: Millis) -> f64 {
        self.curve.map_or(0.0, |c| c.value(now))
    }

    /// Length of one full up-and-down cycle.
    pub fn cycle_ms(&self) -> Millis {
        self.leg_ms.saturating_mul(2)
    }
}

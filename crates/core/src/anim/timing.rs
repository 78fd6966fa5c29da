use crate::Millis;

use super::Easing;

/// A single tween from `from` to `to`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub from: f64,
    pub to: f64,
    pub start: Millis,
    pub duration: Millis,
    pub easing: Easing,
}

impl Timing {
    pub fn new(from: f64, to: f64, start: Millis, duration: Millis, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`. A zero-length tween is complete at once.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: Millis) -> f64 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn finish_time(&self) -> Millis {
        self.start.saturating_add(self.duration)
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.finish_time()
    }
}

/// A value that can be told to animate towards a target.
///
/// Each `animate_to` starts from whatever is displayed at that instant, so
/// competing writers simply retarget one another: the last write wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    resting: f64,
    active: Option<Timing>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            resting: value,
            active: None,
        }
    }

    pub fn value(&self, now: Millis) -> f64 {
        match &self.active {
            Some(timing) => timing.sample(now),
            None => self.resting,
        }
    }

    /// The value this animation will come to rest at.
    pub fn target(&self) -> f64 {
        self.active.map_or(self.resting, |t| t.to)
    }

    /// Start a tween towards `target` and return it, so the caller can
    /// schedule work for when it finishes.
    pub fn animate_to(
        &mut self,
        now: Millis,
        target: f64,
        duration: Millis,
        easing: Easing,
    ) -> Timing {
        let timing = Timing::new(self.value(now), target, now, duration, easing);
        self.active = Some(timing);
        self.resting = target;
        timing
    }

    /// Jump to `value`, dropping any running tween.
    pub fn set(&mut self, value: f64) {
        self.active = None;
        self.resting = value;
    }

    pub fn is_animating(&self, now: Millis) -> bool {
        self.active.is_some_and(|t| !t.is_finished(now))
    }

    /// Forget a tween that has already finished.
    pub fn settle(&mut self, now: Millis) {
        if self.active.is_some_and(|t| t.is_finished(now)) {
            self.active = None;
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// An endless back-and-forth tween between `from` and `to`.
///
/// Leg `k` (each `leg` ms long) runs forward when `k` is even and backward
/// when it is odd, so the value is continuous at every turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repeating {
    pub from: f64,
    pub to: f64,
    pub start: Millis,
    pub leg: Millis,
    pub easing: Easing,
}

impl Repeating {
    pub fn new(from: f64, to: f64, start: Millis, leg: Millis, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            leg,
            easing,
        }
    }

    pub fn value(&self, now: Millis) -> f64 {
        if self.leg == 0 {
            return self.from;
        }
        let elapsed = now.saturating_sub(self.start);
        let leg_index = elapsed / self.leg;
        let within = (elapsed % self.leg) as f64 / self.leg as f64;
        let eased = self.easing.apply(within);
        if leg_index % 2 == 0 {
            self.from + (self.to - self.from) * eased
        } else {
            self.to + (self.from - self.to) * eased
        }
    }
}

//! Timed splash shown once before the carousel.
//!
//! ```text
//!  mount        enter done        exit starts        exit done
//!    │  0 → 1 (out-cubic)  │   hold   │ 1 → 0 (in-cubic) │
//!    ├─────────────────────┼──────────┼──────────────────┤
//!    0 ms               700 ms     1200 ms            1600 ms
//!    └──────── EnteringIn ────────────┴ HoldingOrExiting ┴ Done
//! ```
//!
//! The exit replays the entry mapping in reverse: scale and opacity are the
//! same functions of progress in both directions.

use onboard_protocol::IntroFrame;
use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::anim::{AnimatedValue, Easing, interpolate_range};
use crate::config::IntroConfig;
use crate::scheduler::Scheduler;

pub const LOGO_SCALE_RANGE: (f64, f64) = (0.8, 1.1);
pub const BACKDROP_LARGE_OPACITY: (f64, f64) = (0.25, 0.6);
pub const BACKDROP_SMALL_OPACITY: (f64, f64) = (0.12, 0.4);

/// Ordered: a sequencer only ever moves to a greater phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    EnteringIn,
    HoldingOrExiting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroTimer {
    BeginExit,
    ExitFinished,
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    config: IntroConfig,
    phase: IntroPhase,
    progress: AnimatedValue,
    timers: Scheduler<IntroTimer>,
    mounted_at: Option<Millis>,
    torn_down: bool,
}

impl IntroSequencer {
    pub fn new(config: IntroConfig) -> Self {
        Self {
            config,
            phase: IntroPhase::EnteringIn,
            progress: AnimatedValue::new(0.0),
            timers: Scheduler::new(),
            mounted_at: None,
            torn_down: false,
        }
    }

    /// Start the entry animation and schedule the exit. Only the first call
    /// has any effect.
    pub fn mount(&mut self, now: Millis) {
        if self.mounted_at.is_some() || self.torn_down {
            return;
        }
        self.mounted_at = Some(now);
        self.progress.animate_to(now, 1.0, self.config.enter_ms, Easing::OutCubic);
        self.timers.schedule(now, self.config.exit_start_ms(), IntroTimer::BeginExit);
        tracing::debug!(at = now, "intro entering");
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }

    pub fn mounted_at(&self) -> Option<Millis> {
        self.mounted_at
    }

    /// Fire every timer due by `now`. Returns the instant the intro reached
    /// `Done`, exactly once: on the tick that got it there.
    ///
    /// Timers are handled at their own deadlines, so a late tick produces
    /// the same animation as a punctual one.
    pub fn tick(&mut self, now: Millis) -> Option<Millis> {
        let mut finished = None;
        loop {
            let due = self.timers.drain_due(now);
            if due.is_empty() {
                break;
            }
            for (deadline, timer) in due {
                match timer {
                    IntroTimer::BeginExit => {
                        self.enter_phase(IntroPhase::HoldingOrExiting, deadline);
                        let exit = self.progress.animate_to(
                            deadline,
                            0.0,
                            self.config.exit_ms,
                            Easing::InCubic,
                        );
                        self.timers.schedule_at(exit.finish_time(), IntroTimer::ExitFinished);
                    }
                    IntroTimer::ExitFinished => {
                        self.progress.settle(deadline);
                        if self.enter_phase(IntroPhase::Done, deadline) {
                            finished = Some(deadline);
                        }
                    }
                }
            }
        }
        finished
    }

    fn enter_phase(&mut self, next: IntroPhase, at: Millis) -> bool {
        if next <= self.phase {
            return false;
        }
        tracing::debug!(from = ?self.phase, to = ?next, at, "intro phase changed");
        self.phase = next;
        true
    }

    /// Raw progress in `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f64 {
        self.progress.value(now)
    }

    pub fn frame(&self, now: Millis) -> IntroFrame {
        let progress = self.progress(now);
        IntroFrame {
            progress,
            logo_scale: interpolate_range(progress, LOGO_SCALE_RANGE.0, LOGO_SCALE_RANGE.1),
            logo_opacity: progress,
            backdrop_large_opacity: interpolate_range(
                progress,
                BACKDROP_LARGE_OPACITY.0,
                BACKDROP_LARGE_OPACITY.1,
            ),
            backdrop_small_opacity: interpolate_range(
                progress,
                BACKDROP_SMALL_OPACITY.0,
                BACKDROP_SMALL_OPACITY.1,
            ),
        }
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Cancel every pending timer. The sequencer never changes phase again.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn mounted() -> IntroSequencer {
        let mut intro = IntroSequencer::new(IntroConfig::default());
        intro.mount(0);
        intro
    }

    #[test]
    fn scale_follows_the_timeline() {
        let mut intro = mounted();
        assert!(approx_eq(intro.frame(0).logo_scale, 0.8));
        assert!(approx_eq(intro.frame(0).logo_opacity, 0.0));

        assert_eq!(intro.tick(700), None);
        assert!(approx_eq(intro.frame(700).logo_scale, 1.1));
        assert_eq!(intro.tick(1_199), None);
        assert!(approx_eq(intro.frame(1_199).logo_scale, 1.1));
        assert_eq!(intro.phase(), IntroPhase::EnteringIn);

        assert_eq!(intro.tick(1_200), None);
        assert_eq!(intro.phase(), IntroPhase::HoldingOrExiting);
        assert!(approx_eq(intro.frame(1_200).logo_scale, 1.1));
        let mid = intro.frame(1_400).logo_scale;
        assert!(mid > 0.8 && mid < 1.1);

        assert_eq!(intro.tick(1_600), Some(1_600));
        assert_eq!(intro.phase(), IntroPhase::Done);
        assert!(approx_eq(intro.frame(1_600).logo_scale, 0.8));
        assert!(approx_eq(intro.frame(1_600).logo_opacity, 0.0));
    }

    #[test]
    fn entry_uses_out_cubic() {
        let intro = mounted();
        // Out-cubic at 50% time is 87.5% of the way.
        assert!(approx_eq(intro.progress(350), 0.875));
    }

    #[test]
    fn exit_mirrors_entry_mapping() {
        let mut intro = mounted();
        intro.tick(1_200);
        // In-cubic at 50% of the exit has dropped 12.5%.
        let f = intro.frame(1_400);
        assert!(approx_eq(f.progress, 0.875));
        assert!(approx_eq(f.logo_opacity, f.progress));
        assert!(approx_eq(f.logo_scale, 0.8 + 0.3 * 0.875));
    }

    #[test]
    fn signals_done_exactly_once() {
        let mut intro = mounted();
        let signals = (0..=40u64)
            .filter(|step| intro.tick(step * 100).is_some())
            .count();
        assert_eq!(signals, 1);
        assert_eq!(intro.tick(100_000), None);
    }

    #[test]
    fn late_tick_catches_up_in_one_go() {
        let mut intro = mounted();
        // Completion is reported at its scheduled instant, not the tick's.
        assert_eq!(intro.tick(10_000), Some(1_600));
        assert!(intro.is_done());
        assert!(approx_eq(intro.progress(10_000), 0.0));
    }

    #[test]
    fn teardown_prevents_completion() {
        let mut intro = mounted();
        intro.tick(1_300);
        intro.teardown();
        assert_eq!(intro.tick(5_000), None);
        assert_eq!(intro.phase(), IntroPhase::HoldingOrExiting);
        assert_eq!(intro.next_deadline(), None);
        // Remounting after teardown is ignored.
        intro.mount(6_000);
        assert_eq!(intro.tick(20_000), None);
    }

    #[test]
    fn backdrops_track_progress() {
        let mut intro = mounted();
        let start = intro.frame(0);
        assert!(approx_eq(start.backdrop_large_opacity, 0.25));
        assert!(approx_eq(start.backdrop_small_opacity, 0.12));
        intro.tick(800);
        let full = intro.frame(800);
        assert!(approx_eq(full.backdrop_large_opacity, 0.6));
        assert!(approx_eq(full.backdrop_small_opacity, 0.4));
    }
}

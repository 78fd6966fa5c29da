//! A simulated paged scroll view for the terminal.
//!
//! Terminals have no native scroll surface, so this stands in for one: it
//! eases between pages, reports its offset every frame like a real scroll
//! event stream, and accepts programmatic `scroll_to` requests.

use onboard_core::Millis;
use onboard_core::anim::{Easing, Timing};
use onboard_core::{ScrollSurface, ScrollTarget};

const SETTLE_MS: Millis = 320;
const FLICK_MS: Millis = 180;
const FLICK_SETTLE_MS: Millis = 160;
/// Fraction of a page a flick travels past its target before settling.
const OVERSHOOT: f64 = 0.08;

#[derive(Debug, Default)]
pub struct PagedScroller {
    offset: f64,
    tween: Option<Timing>,
    /// Second leg of a flick: settle back onto the page.
    settle_to: Option<f64>,
    /// Programmatic requests waiting for the next `step`.
    requested: Option<f64>,
}

impl PagedScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flick one page left (`-1`) or right (`1`), overshooting slightly.
    pub fn flick(&mut self, now: Millis, direction: i32, page_width: f64, page_count: usize) {
        if page_width <= 0.0 || page_count == 0 {
            return;
        }
        let last = (page_count - 1) as f64;
        let page = (self.target() / page_width).round();
        let target = (page + f64::from(direction)).clamp(0.0, last) * page_width;
        let overshoot = target + f64::from(direction) * OVERSHOOT * page_width;
        self.tween = Some(Timing::new(self.offset, overshoot, now, FLICK_MS, Easing::OutCubic));
        self.settle_to = Some(target);
    }

    fn target(&self) -> f64 {
        self.settle_to
            .or(self.tween.map(|t| t.to))
            .unwrap_or(self.offset)
    }

    /// Advance the simulation. Returns the new offset whenever it moved.
    pub fn step(&mut self, now: Millis) -> Option<f64> {
        if let Some(x) = self.requested.take() {
            self.tween = Some(Timing::new(self.offset, x, now, SETTLE_MS, Easing::InOutCubic));
            self.settle_to = None;
        }

        let tween = self.tween?;
        let before = self.offset;
        self.offset = tween.sample(now);
        if tween.is_finished(now) {
            self.tween = self
                .settle_to
                .take()
                .map(|x| Timing::new(self.offset, x, now, FLICK_SETTLE_MS, Easing::OutCubic));
        }
        (self.offset != before).then_some(self.offset)
    }
}

impl ScrollTarget for PagedScroller {
    fn scroll_to(&mut self, x: f64, _y: f64, _animated: bool) {
        self.requested = Some(x);
    }
}

impl ScrollSurface for PagedScroller {
    fn direct(&mut self) -> Option<&mut dyn ScrollTarget> {
        Some(self)
    }
}

//! Discrete navigation: skip, arrow-advance, get-started, and programmatic
//! page changes on the host's scroll surface.

use onboard_protocol::HostCommand;

use crate::Millis;
use crate::anim::{AnimatedValue, Easing};
use crate::config::{ArrowConfig, OnboardingConfig};
use crate::scheduler::Scheduler;

/// Anything that can be told to scroll to an absolute offset.
pub trait ScrollTarget {
    fn scroll_to(&mut self, x: f64, y: f64, animated: bool);
}

/// The host's paged scroll view, as seen by the engine.
///
/// Embeddings differ in how (and whether) they expose programmatic
/// scrolling: some views scroll directly, some only through the native
/// node they wrap, and some not at all.
pub trait ScrollSurface {
    /// Primary capability: the view itself scrolls.
    fn direct(&mut self) -> Option<&mut dyn ScrollTarget>;

    /// Fallback: the wrapped native node scrolls.
    fn native_node(&mut self) -> Option<&mut dyn ScrollTarget> {
        None
    }
}

/// A surface with no programmatic scroll capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl ScrollSurface for DetachedSurface {
    fn direct(&mut self) -> Option<&mut dyn ScrollTarget> {
        None
    }
}

/// Which path a scroll request took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Direct,
    NativeNode,
    Unavailable,
}

/// Ask `surface` to scroll to `index`, trying the direct capability first
/// and the native node second. Neither being available is not an error.
pub fn scroll_to_page(
    surface: &mut dyn ScrollSurface,
    index: usize,
    page_width: f64,
) -> ScrollOutcome {
    let x = index as f64 * page_width;
    if let Some(target) = surface.direct() {
        target.scroll_to(x, 0.0, true);
        return ScrollOutcome::Direct;
    }
    if let Some(target) = surface.native_node() {
        target.scroll_to(x, 0.0, true);
        return ScrollOutcome::NativeNode;
    }
    tracing::warn!(index, x, "scroll surface exposes no programmatic scroll; page change skipped");
    ScrollOutcome::Unavailable
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTimer {
    Advance { next: usize },
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    arrow: ArrowConfig,
    page_count: usize,
    main_route: String,
    /// Shared by the advance animation and press feedback; last write wins.
    arrow_scale: AnimatedValue,
    timers: Scheduler<NavTimer>,
    outbox: Vec<HostCommand>,
    finished: bool,
}

impl NavigationController {
    pub fn new(config: &OnboardingConfig) -> Self {
        Self {
            arrow: config.arrow,
            page_count: config.page_count,
            main_route: config.main_route.clone(),
            arrow_scale: AnimatedValue::new(1.0),
            timers: Scheduler::new(),
            outbox: Vec::new(),
            finished: false,
        }
    }

    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// Whether a terminal command has been issued (or the screen torn down).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn arrow_scale(&self, now: Millis) -> f64 {
        self.arrow_scale.value(now)
    }

    pub fn has_pending_advance(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Leave onboarding from any page, at any time.
    pub fn skip(&mut self) {
        self.replace_to_main("skip");
    }

    /// The get-started action on the last page.
    pub fn finish(&mut self) {
        self.replace_to_main("finish");
    }

    /// Arrow on `current`: finish on the last page, otherwise pulse the
    /// arrow and change page once the advance delay has passed.
    pub fn advance(&mut self, now: Millis, current: usize) {
        if self.finished {
            tracing::debug!(current, "advance ignored after navigation");
            return;
        }
        if current >= self.last_page() {
            self.replace_to_main("advance");
            return;
        }
        self.arrow_scale.animate_to(
            now,
            self.arrow.press_scale,
            self.arrow.press_ms,
            Easing::InOutQuad,
        );
        self.timers.schedule(
            now,
            self.arrow.advance_delay_ms,
            NavTimer::Advance { next: current + 1 },
        );
    }

    /// Press/hover feedback on the arrow. Not synchronized with `advance`.
    pub fn press_feedback(&mut self, now: Millis, pressed: bool) {
        if self.finished {
            return;
        }
        let (target, duration) = if pressed {
            (self.arrow.feedback_scale, self.arrow.feedback_in_ms)
        } else {
            (1.0, self.arrow.feedback_out_ms)
        };
        self.arrow_scale.animate_to(now, target, duration, Easing::InOutQuad);
    }

    /// Fire due advance timers against `surface`.
    pub fn tick(&mut self, now: Millis, page_width: f64, surface: &mut dyn ScrollSurface) {
        for (deadline, timer) in self.timers.drain_due(now) {
            match timer {
                NavTimer::Advance { next } => {
                    self.arrow_scale.animate_to(
                        deadline,
                        1.0,
                        self.arrow.release_ms,
                        Easing::InOutQuad,
                    );
                    self.scroll_to_page(next, page_width, surface);
                }
            }
        }
        self.arrow_scale.settle(now);
    }

    /// Move to `index`, recording a scroll command if the surface took it.
    pub fn scroll_to_page(
        &mut self,
        index: usize,
        page_width: f64,
        surface: &mut dyn ScrollSurface,
    ) -> ScrollOutcome {
        if self.finished {
            return ScrollOutcome::Unavailable;
        }
        let outcome = scroll_to_page(surface, index, page_width);
        if outcome != ScrollOutcome::Unavailable {
            self.outbox.push(HostCommand::ScrollToPage {
                index,
                offset: index as f64 * page_width,
                animated: true,
            });
        }
        outcome
    }

    fn replace_to_main(&mut self, reason: &'static str) {
        if self.finished {
            tracing::debug!(reason, "navigation already issued");
            return;
        }
        self.finished = true;
        self.timers.cancel_all();
        tracing::info!(reason, route = %self.main_route, "leaving onboarding");
        self.outbox.push(HostCommand::ReplaceToMain {
            route: self.main_route.clone(),
        });
    }

    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.outbox)
    }

    /// Cancel pending page changes and refuse all further work.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.finished = true;
    }
}

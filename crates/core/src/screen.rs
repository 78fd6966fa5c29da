//! One onboarding screen: splash, then carousel, then hand-off.
//!
//! The screen owns every piece of animation state for its lifetime and
//! drops it with itself. Hosts drive it with three calls per frame:
//! `on_scroll` when the surface moved, `tick` to fire due timers, and
//! `render` to get the frame to draw.

use onboard_protocol::{CarouselFrame, HostCommand, Intent, ScreenFrame, Viewport};

use crate::Millis;
use crate::ambient::AmbientOscillator;
use crate::config::OnboardingConfig;
use crate::deriver;
use crate::intro::{IntroPhase, IntroSequencer};
use crate::navigation::{NavigationController, ScrollSurface};
use crate::scroll::ScrollPositionTracker;

/// Lifecycle of a screen. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unmounted,
    Intro,
    Carousel,
    /// Navigated away or torn down. Terminal.
    Closed,
}

#[derive(Debug)]
pub struct OnboardingScreen {
    config: OnboardingConfig,
    viewport: Viewport,
    fonts_ready: bool,
    stage: Stage,
    scroll: ScrollPositionTracker,
    intro: IntroSequencer,
    ambient: AmbientOscillator,
    navigation: NavigationController,
}

impl OnboardingScreen {
    pub fn new(config: OnboardingConfig) -> Self {
        let intro = IntroSequencer::new(config.intro);
        let ambient = AmbientOscillator::new(config.ambient.leg_ms);
        let navigation = NavigationController::new(&config);
        Self {
            config,
            viewport: Viewport::default(),
            fonts_ready: false,
            stage: Stage::Unmounted,
            scroll: ScrollPositionTracker::new(),
            intro,
            ambient,
            navigation,
        }
    }

    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn intro_phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    pub fn scroll(&self) -> &ScrollPositionTracker {
        &self.scroll
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Page nearest the current scroll offset.
    pub fn current_page(&self) -> usize {
        self.scroll
            .nearest_page(self.viewport.page_width(), self.config.page_count)
    }

    /// Show the splash and start its timeline.
    pub fn mount(&mut self, now: Millis) {
        if self.stage != Stage::Unmounted {
            return;
        }
        self.stage = Stage::Intro;
        self.intro.mount(now);
    }

    pub fn set_fonts_ready(&mut self, ready: bool) {
        self.fonts_ready = ready;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() && !self.viewport.is_degenerate() {
            tracing::debug!(width = viewport.width, "viewport collapsed, pages centered");
        }
        self.viewport = viewport;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        if self.stage == Stage::Closed {
            return;
        }
        self.scroll.on_scroll(offset);
    }

    /// Apply a user action. Skip works in every stage; the carousel
    /// controls only exist once the carousel is showing.
    pub fn handle(&mut self, now: Millis, intent: Intent) {
        match (self.stage, intent) {
            (Stage::Closed, _) => {
                tracing::debug!(?intent, "intent after close ignored");
            }
            (_, Intent::Skip) => self.navigation.skip(),
            (Stage::Carousel, Intent::Arrow { page }) => self.navigation.advance(now, page),
            (Stage::Carousel, Intent::GetStarted) => self.navigation.finish(),
            (Stage::Carousel, Intent::PressIn) => self.navigation.press_feedback(now, true),
            (Stage::Carousel, Intent::PressOut) => self.navigation.press_feedback(now, false),
            (stage, intent) => {
                tracing::debug!(?stage, ?intent, "control not on screen");
            }
        }
        self.close_if_navigated();
    }

    /// Fire every due timer and collect the commands for the host.
    pub fn tick(&mut self, now: Millis, surface: &mut dyn ScrollSurface) -> Vec<HostCommand> {
        if self.stage == Stage::Intro
            && let Some(done_at) = self.intro.tick(now)
        {
            self.show_carousel(done_at);
        }
        if self.stage == Stage::Carousel {
            self.navigation.tick(now, self.viewport.page_width(), surface);
        }
        self.close_if_navigated();
        self.navigation.take_commands()
    }

    /// Commands queued by `handle` that have not been returned by `tick`.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        self.navigation.take_commands()
    }

    /// The intro stops drawing and the carousel starts in the same step.
    fn show_carousel(&mut self, at: Millis) {
        self.stage = Stage::Carousel;
        self.scroll.start();
        self.ambient.start(at);
        tracing::debug!(at, "carousel visible");
    }

    fn close_if_navigated(&mut self) {
        if self.navigation.is_finished() && self.stage != Stage::Closed {
            self.close();
        }
    }

    fn close(&mut self) {
        if self.stage != Stage::Closed {
            tracing::debug!(scroll_events = self.scroll.events(), "onboarding closed");
        }
        self.stage = Stage::Closed;
        self.intro.teardown();
        self.ambient.stop();
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        match (self.intro.next_deadline(), self.navigation.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn render(&self, now: Millis) -> ScreenFrame {
        if !self.fonts_ready {
            return ScreenFrame::Blank;
        }
        match self.stage {
            Stage::Unmounted | Stage::Closed => ScreenFrame::Blank,
            Stage::Intro => ScreenFrame::Intro(self.intro.frame(now)),
            Stage::Carousel => ScreenFrame::Carousel(self.carousel_frame(now)),
        }
    }

    fn carousel_frame(&self, now: Millis) -> CarouselFrame {
        let scroll_offset = self.scroll.offset_or_origin();
        let page_width = self.viewport.page_width();
        let page_count = self.config.page_count;
        let ambient_phase = self.ambient.phase(now);
        CarouselFrame {
            scroll_offset,
            page_width,
            current_page: self.current_page(),
            pages: deriver::derive_visible(scroll_offset, page_width, ambient_phase, page_count),
            indicators: deriver::derive_indicators(scroll_offset, page_width, page_count),
            arrow_scale: self.navigation.arrow_scale(now),
        }
    }

    /// Cancel every timer. Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        self.navigation.teardown();
        self.close();
    }
}

impl Drop for OnboardingScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetachedSurface;

    fn screen() -> OnboardingScreen {
        let mut s = OnboardingScreen::new(OnboardingConfig::default());
        s.set_fonts_ready(true);
        s.set_viewport(Viewport::new(400.0, 800.0));
        s
    }

    #[test]
    fn blank_until_fonts_ready() {
        let mut s = screen();
        s.set_fonts_ready(false);
        s.mount(0);
        assert_eq!(s.render(100), ScreenFrame::Blank);
        s.set_fonts_ready(true);
        assert!(s.render(100).is_intro());
    }

    #[test]
    fn intro_hands_over_to_carousel() {
        let mut s = screen();
        s.mount(0);
        s.tick(1_599, &mut DetachedSurface);
        assert!(s.render(1_599).is_intro());
        s.tick(1_600, &mut DetachedSurface);
        assert_eq!(s.stage(), Stage::Carousel);
        assert!(s.render(1_600).is_carousel());
    }

    #[test]
    fn arrow_ignored_during_intro() {
        let mut s = screen();
        s.mount(0);
        s.handle(10, Intent::Arrow { page: 2 });
        assert!(s.tick(20, &mut DetachedSurface).is_empty());
        assert_eq!(s.stage(), Stage::Intro);
    }

    #[test]
    fn drop_after_teardown_is_quiet() {
        let mut s = screen();
        s.mount(0);
        s.teardown();
        assert_eq!(s.stage(), Stage::Closed);
        assert_eq!(s.next_deadline(), None);
        s.teardown();
    }
}

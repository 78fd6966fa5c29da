//! Integration test: drive a whole onboarding screen through splash,
//! carousel and hand-off the way a host would, frame by frame.

use onboard_core::deriver::derive_frame;
use onboard_core::intro::IntroPhase;
use onboard_core::{
    DetachedSurface, OnboardingConfig, OnboardingScreen, ScrollSurface, ScrollTarget, Stage,
};
use onboard_protocol::{CarouselFrame, HostCommand, Intent, ScreenFrame, Viewport};

const WIDTH: f64 = 390.0;
const FRAME_MS: u64 = 16;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A scroll view that jumps straight to the requested offset and reports
/// it back through `on_scroll`, like a host with animations disabled.
#[derive(Default)]
struct InstantScroller {
    requests: Vec<f64>,
}

impl ScrollTarget for InstantScroller {
    fn scroll_to(&mut self, x: f64, _y: f64, animated: bool) {
        assert!(animated, "page changes are always animated");
        self.requests.push(x);
    }
}

impl ScrollSurface for InstantScroller {
    fn direct(&mut self) -> Option<&mut dyn ScrollTarget> {
        Some(self)
    }
}

fn mounted_screen() -> OnboardingScreen {
    let mut screen = OnboardingScreen::new(OnboardingConfig::default());
    screen.set_fonts_ready(true);
    screen.set_viewport(Viewport::new(WIDTH, 844.0));
    screen.mount(0);
    screen
}

fn carousel(frame: ScreenFrame) -> CarouselFrame {
    match frame {
        ScreenFrame::Carousel(c) => c,
        other => panic!("expected carousel, got {other:?}"),
    }
}

/// Run frames until the intro has handed over, returning the time reached.
fn skip_past_intro(screen: &mut OnboardingScreen) -> u64 {
    let mut now = 0;
    while screen.stage() == Stage::Intro {
        now += FRAME_MS;
        let cmds = screen.tick(now, &mut DetachedSurface);
        assert!(cmds.is_empty());
    }
    now
}

#[test]
fn intro_timeline_is_exact_and_signals_once() {
    let mut screen = mounted_screen();
    let mut transitions = 0;
    let mut saw_holding = false;
    let mut last_stage = screen.stage();

    for now in 0..=3_000u64 {
        screen.tick(now, &mut DetachedSurface);
        let frame = screen.render(now);

        match now {
            0 => {
                let ScreenFrame::Intro(intro) = frame else {
                    panic!("intro must show at mount");
                };
                assert!(approx_eq(intro.logo_scale, 0.8));
            }
            700..=1_199 => {
                let ScreenFrame::Intro(intro) = frame else {
                    panic!("intro must still show at {now}");
                };
                assert!(approx_eq(intro.logo_scale, 1.1), "t={now}");
                assert_eq!(screen.intro_phase(), IntroPhase::EnteringIn);
            }
            1_200..=1_599 => {
                assert!(frame.is_intro(), "t={now}");
                saw_holding |= screen.intro_phase() == IntroPhase::HoldingOrExiting;
            }
            1_600.. => assert!(frame.is_carousel(), "t={now}"),
            _ => assert!(frame.is_intro(), "t={now}"),
        }

        if screen.stage() != last_stage {
            transitions += 1;
            last_stage = screen.stage();
        }
    }

    assert!(saw_holding);
    assert_eq!(screen.intro_phase(), IntroPhase::Done);
    // Intro -> Carousel, once.
    assert_eq!(transitions, 1);
}

#[test]
fn carousel_frames_follow_a_drag_across_all_pages() {
    let mut screen = mounted_screen();
    let now = skip_past_intro(&mut screen);

    // Drag from page 0 to page 2 in 10-unit steps, overshooting both ends.
    let mut x = -60.0;
    while x <= 2.0 * WIDTH + 60.0 {
        screen.on_scroll(x);
        let frame = carousel(screen.render(now));
        assert!(!frame.pages.is_empty());
        for page in &frame.pages {
            // The oscillator started on this very frame, so its phase is 0.
            assert_eq!(*page, derive_frame(x, page.page, WIDTH, 0.0));
            assert!(page.image_scale >= 0.9 - 1e-9 && page.image_scale <= 1.0 + 1e-9);
            assert!(page.indicator_width >= 8.0 - 1e-9 && page.indicator_width <= 16.0 + 1e-9);
            assert!(page.illusion_rotation.abs() <= 10.0 + 1e-9);
        }
        assert_eq!(frame.indicators.len(), 3);
        x += 10.0;
    }

    screen.on_scroll(WIDTH);
    let frame = carousel(screen.render(now));
    assert_eq!(frame.current_page, 1);
    let center = frame.page(1).expect("current page present");
    assert!(approx_eq(center.image_scale, 1.0));
    assert!(approx_eq(center.indicator_opacity, 1.0));
    let left = frame.page(0).expect("left neighbour present");
    assert!(approx_eq(left.image_translate_y, 40.0));
    assert!(approx_eq(left.indicator_width, 8.0));
}

#[test]
fn ambient_float_is_independent_of_scroll() {
    let mut screen = mounted_screen();
    let start = skip_past_intro(&mut screen);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for step in 0..=1_000u64 {
        let now = start + step * 10;
        screen.on_scroll(0.0);
        let a = carousel(screen.render(now)).pages[0].dot_translate_y;
        screen.on_scroll(WIDTH * 0.37);
        let b = carousel(screen.render(now)).pages[0].dot_translate_y;
        assert!(approx_eq(a, b), "scroll leaked into ambient at {now}");
        min = min.min(a);
        max = max.max(a);
    }
    assert!(approx_eq(min, -6.0));
    assert!(approx_eq(max, 6.0));
}

#[test]
fn arrow_advance_scrolls_one_page_per_press() {
    let mut screen = mounted_screen();
    let mut now = skip_past_intro(&mut screen);
    let mut surface = InstantScroller::default();

    for page in 0..2 {
        screen.handle(now, Intent::Arrow { page });
        let mut cmds = Vec::new();
        for _ in 0..20 {
            now += FRAME_MS;
            cmds.extend(screen.tick(now, &mut surface));
        }
        assert_eq!(
            cmds,
            vec![HostCommand::ScrollToPage {
                index: page + 1,
                offset: (page + 1) as f64 * WIDTH,
                animated: true,
            }]
        );
        let x = *surface.requests.last().expect("scroll request sent");
        screen.on_scroll(x);
        assert_eq!(screen.current_page(), page + 1);
    }

    // Last page: the arrow behaves as get-started.
    screen.handle(now, Intent::Arrow { page: 2 });
    let cmds = screen.tick(now + 500, &mut surface);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], HostCommand::ReplaceToMain { route } if route == "/(tabs)"));
    assert_eq!(surface.requests.len(), 2);
    assert_eq!(screen.stage(), Stage::Closed);
    assert_eq!(screen.render(now + 500), ScreenFrame::Blank);
}

#[test]
fn skip_during_intro_is_terminal_and_cancels_the_splash() {
    let mut screen = mounted_screen();
    screen.tick(300, &mut DetachedSurface);
    screen.handle(300, Intent::Skip);
    let cmds = screen.tick(301, &mut DetachedSurface);
    assert_eq!(cmds.len(), 1);
    assert!(cmds[0].is_terminal());

    // Nothing else ever happens on this screen.
    screen.handle(400, Intent::Skip);
    screen.on_scroll(WIDTH);
    for now in (400..5_000).step_by(16) {
        assert!(screen.tick(now, &mut DetachedSurface).is_empty());
    }
    assert_eq!(screen.intro_phase(), IntroPhase::EnteringIn);
    assert_eq!(screen.render(5_000), ScreenFrame::Blank);
}

#[test]
fn skip_from_carousel_issues_exactly_one_replace() {
    let mut screen = mounted_screen();
    let now = skip_past_intro(&mut screen);
    screen.handle(now, Intent::Arrow { page: 0 });
    screen.handle(now + 10, Intent::Skip);
    screen.handle(now + 20, Intent::GetStarted);
    let mut surface = InstantScroller::default();
    let cmds = screen.tick(now + 1_000, &mut surface);
    assert_eq!(cmds.len(), 1);
    assert!(cmds[0].is_terminal());
    // The pending advance was cancelled with the navigation.
    assert!(surface.requests.is_empty());
}

#[test]
fn zero_width_viewport_renders_centered_values() {
    let mut screen = mounted_screen();
    let now = skip_past_intro(&mut screen);
    screen.set_viewport(Viewport::new(0.0, 844.0));
    screen.on_scroll(250.0);

    let frame = carousel(screen.render(now));
    for page in &frame.pages {
        assert!(approx_eq(page.image_scale, 1.0));
        assert!(approx_eq(page.image_translate_y, 0.0));
        assert!(approx_eq(page.indicator_width, 16.0));
        assert!(!page.image_opacity.is_nan());
    }
    for (width, opacity) in &frame.indicators {
        assert!(width.is_finite() && opacity.is_finite());
    }
}

#[test]
fn teardown_before_done_prevents_the_swap() {
    let mut screen = mounted_screen();
    screen.tick(1_300, &mut DetachedSurface);
    screen.teardown();
    assert!(screen.tick(10_000, &mut DetachedSurface).is_empty());
    assert_ne!(screen.intro_phase(), IntroPhase::Done);
    assert_eq!(screen.stage(), Stage::Closed);
}

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use onboard_core::pages::{self, PageControl};
use onboard_core::{Millis, OnboardingConfig, OnboardingScreen};
use onboard_protocol::{
    CarouselFrame, HostCommand, Intent, IntroFrame, ScreenFrame, ThemeToken, Viewport,
    VisualFrame,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::scroller::PagedScroller;

/// Layout units (points) per terminal row / column when turning
/// translations into cell offsets.
const POINTS_PER_ROW: f64 = 10.0;
const POINTS_PER_COL: f64 = 4.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn theme_rgb(token: ThemeToken) -> (u8, u8, u8) {
    match token {
        ThemeToken::Surface => (15, 23, 42),
        ThemeToken::Text => (241, 245, 249),
        ThemeToken::TextMuted => (148, 163, 184),
        ThemeToken::Primary => (2, 132, 199),
    }
}

/// Blend a theme color towards the surface to emulate opacity.
fn faded(token: ThemeToken, opacity: f64) -> Color {
    let (r, g, b) = theme_rgb(token);
    let (sr, sg, sb) = theme_rgb(ThemeToken::Surface);
    let a = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, s: u8| (f64::from(s) + (f64::from(c) - f64::from(s)) * a).round() as u8;
    Color::Rgb(mix(r, sr), mix(g, sg), mix(b, sb))
}

fn surface() -> Color {
    faded(ThemeToken::Surface, 1.0)
}

/// Run the onboarding screen until the user quits or finishes. Returns the
/// route the engine navigated to, if any.
pub fn run_tui(config: OnboardingConfig) -> Result<Option<String>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: OnboardingConfig,
) -> Result<Option<String>> {
    let page_count = config.page_count;
    let clock = Instant::now();
    let now = || clock.elapsed().as_millis() as Millis;

    let mut screen = OnboardingScreen::new(config);
    let mut scroller = PagedScroller::new();
    let mut fonts_ready = true;
    let mut pressed = false;
    let mut exit_route: Option<String> = None;

    screen.set_fonts_ready(fonts_ready);
    screen.mount(now());

    loop {
        let t = now();
        let size = terminal.size()?;
        let viewport = Viewport::new(f64::from(size.width), f64::from(size.height));
        screen.set_viewport(viewport);

        if let Some(x) = scroller.step(t) {
            screen.on_scroll(x);
        }
        for cmd in screen.tick(t, &mut scroller) {
            match cmd {
                HostCommand::ReplaceToMain { route } => exit_route = Some(route),
                HostCommand::ScrollToPage { index, .. } => {
                    tracing::debug!(index, "page change requested");
                }
            }
        }

        let frame = screen.render(t);
        terminal.draw(|f| match (&exit_route, &frame) {
            (Some(route), _) => draw_main_placeholder(f, route),
            (None, ScreenFrame::Blank) => draw_blank(f),
            (None, ScreenFrame::Intro(intro)) => draw_intro(f, intro),
            (None, ScreenFrame::Carousel(carousel)) => draw_carousel(f, carousel, page_count),
        })?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if exit_route.is_some() {
            break;
        }

        let t = now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Left => scroller.flick(t, -1, viewport.page_width(), page_count),
            KeyCode::Right => scroller.flick(t, 1, viewport.page_width(), page_count),
            KeyCode::Enter | KeyCode::Char('n') => {
                let page = screen.current_page();
                let intent = match pages::control_for(page, page_count) {
                    PageControl::Arrow => Intent::Arrow { page },
                    PageControl::GetStarted => Intent::GetStarted,
                };
                screen.handle(t, intent);
            }
            KeyCode::Char('s') => screen.handle(t, Intent::Skip),
            KeyCode::Char('g') => {
                if pages::control_for(screen.current_page(), page_count) == PageControl::GetStarted
                {
                    screen.handle(t, Intent::GetStarted);
                }
            }
            KeyCode::Char('p') => {
                pressed = !pressed;
                let intent = if pressed {
                    Intent::PressIn
                } else {
                    Intent::PressOut
                };
                screen.handle(t, intent);
            }
            KeyCode::Char('f') => {
                fonts_ready = !fonts_ready;
                screen.set_fonts_ready(fonts_ready);
            }
            _ => {}
        }
    }

    Ok(exit_route)
}

/// Intersect a floating-point rectangle (in cells) with `area`.
fn clip(x: f64, y: f64, w: f64, h: f64, area: Rect) -> Option<Rect> {
    let x0 = x.round().max(f64::from(area.x));
    let y0 = y.round().max(f64::from(area.y));
    let x1 = (x + w).round().min(f64::from(area.right()));
    let y1 = (y + h).round().min(f64::from(area.bottom()));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

fn fill(f: &mut Frame, area: Rect, color: Color) {
    f.render_widget(Block::default().style(Style::default().bg(color)), area);
}

fn draw_blank(f: &mut Frame) {
    let area = f.area();
    fill(f, area, surface());
}

fn draw_intro(f: &mut Frame, intro: &IntroFrame) {
    let area = f.area();
    fill(f, area, surface());

    // Two backdrop circles, approximated as offset blocks.
    let w = f64::from(area.width);
    let h = f64::from(area.height);
    if let Some(r) = clip(w * 0.55, -2.0, w * 0.6, h * 0.6, area) {
        fill(f, r, faded(ThemeToken::Primary, intro.backdrop_large_opacity * 0.3));
    }
    if let Some(r) = clip(-4.0, h * 0.7, w * 0.35, h * 0.4, area) {
        fill(f, r, faded(ThemeToken::Primary, intro.backdrop_small_opacity * 0.3));
    }

    let logo_w = 22.0 * intro.logo_scale;
    let logo_h = 7.0 * intro.logo_scale;
    let Some(logo) = clip((w - logo_w) / 2.0, (h - logo_h) / 2.0, logo_w, logo_h, area) else {
        return;
    };
    let color = faded(ThemeToken::Primary, intro.logo_opacity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(surface()));
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "✓ tasks",
            Style::default()
                .fg(faded(ThemeToken::Text, intro.logo_opacity))
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(text, logo);
}

fn draw_carousel(f: &mut Frame, carousel: &CarouselFrame, page_count: usize) {
    let area = f.area();
    fill(f, area, surface());

    let top_bar = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    f.render_widget(
        Paragraph::new(Line::styled(
            "Skip (s) ",
            Style::default()
                .fg(faded(ThemeToken::TextMuted, 1.0))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        top_bar,
    );

    let body = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(3),
    );
    for page in &carousel.pages {
        draw_page(f, body, carousel, page, page_count);
    }

    let dots_row = Rect::new(
        area.x,
        area.bottom().saturating_sub(2),
        area.width,
        1.min(area.height),
    );
    draw_indicators(f, dots_row, &carousel.indicators);
}

fn draw_page(
    f: &mut Frame,
    body: Rect,
    carousel: &CarouselFrame,
    page: &VisualFrame,
    page_count: usize,
) {
    let width = f64::from(body.width);
    let page_x =
        f64::from(body.x) + page.page as f64 * carousel.page_width - carousel.scroll_offset;

    // Image card.
    let card_w = width * 0.8 * page.image_scale;
    let card_h = f64::from(body.height) * 0.5 * page.image_scale;
    let card_x = page_x + (width - card_w) / 2.0;
    let card_y = f64::from(body.y) + 1.0 + page.image_translate_y / POINTS_PER_ROW;
    if let Some(card) = clip(card_x, card_y, card_w, card_h, body) {
        let border = faded(ThemeToken::Text, page.image_opacity * 0.5);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(faded(ThemeToken::Primary, page.image_opacity * 0.35))),
            card,
        );

        // Illusion: a glyph whose orientation follows the rotation.
        let glyph = match page.illusion_rotation {
            r if r < -5.0 => '◜',
            r if r < 0.0 => '◠',
            r if r <= 5.0 => '◯',
            _ => '◝',
        };
        let gx = card_x + card_w * 0.35;
        let gy = card_y + card_h * 0.45;
        put(f, body, gx, gy, glyph, faded(ThemeToken::Text, page.illusion_opacity * 0.4));

        // Floating dot, top right of the card.
        let dx = card_x + card_w - 4.0 + page.dot_translate_x / POINTS_PER_COL;
        let dy = card_y + 1.0 + page.dot_translate_y / POINTS_PER_COL;
        put(f, body, dx, dy, '●', faded(ThemeToken::Text, page.dot_opacity * 0.5));
    }

    // Caption.
    let Some(content) = pages::content(page.page) else {
        return;
    };
    let caption_y = card_y.max(f64::from(body.y)) + card_h + 1.0
        + page.caption_translate_y / POINTS_PER_ROW;
    let caption_w = (width - 4.0).max(1.0);
    let Some(caption) = clip(page_x + 2.0, caption_y, caption_w, 6.0, body) else {
        return;
    };
    let control = match pages::control_for(page.page, page_count) {
        PageControl::GetStarted => Span::styled(
            "  Get Started (g)  ",
            Style::default()
                .fg(faded(ThemeToken::Text, 1.0))
                .bg(faded(ThemeToken::Primary, page.caption_opacity))
                .add_modifier(Modifier::BOLD),
        ),
        PageControl::Arrow => {
            let label = if carousel.arrow_scale > 1.04 { "[  →  ]" } else { "[ → ]" };
            let mut style = Style::default().fg(faded(ThemeToken::Text, page.caption_opacity));
            if carousel.arrow_scale > 1.1 {
                style = style.add_modifier(Modifier::BOLD);
            }
            Span::styled(label, style)
        }
    };
    let lines = vec![
        Line::styled(
            content.title,
            Style::default()
                .fg(faded(ThemeToken::Text, page.caption_opacity))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            content.subtitle,
            Style::default().fg(faded(ThemeToken::TextMuted, page.caption_opacity)),
        ),
        Line::from(""),
        Line::from(control),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        caption,
    );
}

fn draw_indicators(f: &mut Frame, row: Rect, indicators: &[(f64, f64)]) {
    let spans: Vec<Span> = indicators
        .iter()
        .flat_map(|&(width, opacity)| {
            let cells = (width / POINTS_PER_COL).round().max(1.0) as usize;
            [
                Span::styled(
                    "▬".repeat(cells),
                    Style::default().fg(faded(ThemeToken::Text, opacity)),
                ),
                Span::raw("  "),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

/// Write a single glyph if it lands inside `area`.
fn put(f: &mut Frame, area: Rect, x: f64, y: f64, ch: char, fg: Color) {
    let (x, y) = (x.round(), y.round());
    if x < f64::from(area.x)
        || y < f64::from(area.y)
        || x >= f64::from(area.right())
        || y >= f64::from(area.bottom())
    {
        return;
    }
    let buf = f.buffer_mut();
    buf[(x as u16, y as u16)].set_char(ch).set_fg(fg);
}

fn draw_main_placeholder(f: &mut Frame, route: &str) {
    let area = f.area();
    fill(f, area, surface());
    let text = Paragraph::new(vec![
        Line::styled(
            "Main app",
            Style::default()
                .fg(faded(ThemeToken::Text, 1.0))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("replaced onboarding with {route}; press any key"),
            Style::default().fg(faded(ThemeToken::TextMuted, 1.0)),
        ),
    ])
    .alignment(Alignment::Center);
    let y = area.height / 2;
    f.render_widget(text, Rect::new(area.x, area.y + y, area.width, 2.min(area.height - y)));
}

use serde::{Deserialize, Serialize};

/// Per-page visual parameters derived from the scroll position.
///
/// Always recomputed, never stored: the same inputs give the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualFrame {
    pub page: usize,
    pub image_scale: f64,
    pub image_translate_y: f64,
    pub image_opacity: f64,
    /// Degrees.
    pub illusion_rotation: f64,
    pub illusion_opacity: f64,
    pub dot_translate_x: f64,
    /// Driven by the ambient oscillator only.
    pub dot_translate_y: f64,
    pub dot_opacity: f64,
    pub indicator_width: f64,
    pub indicator_opacity: f64,
    pub caption_translate_y: f64,
    pub caption_opacity: f64,
}

/// Splash parameters while the intro is showing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntroFrame {
    /// Raw intro progress in `[0, 1]`.
    pub progress: f64,
    pub logo_scale: f64,
    pub logo_opacity: f64,
    pub backdrop_large_opacity: f64,
    pub backdrop_small_opacity: f64,
}

/// Everything the renderer needs to draw one carousel frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub scroll_offset: f64,
    pub page_width: f64,
    /// Page nearest to the current scroll offset.
    pub current_page: usize,
    /// Frames for the current page and its neighbours, ascending by page.
    pub pages: Vec<VisualFrame>,
    /// Dot indicator `(width, opacity)` for every page, ascending.
    pub indicators: Vec<(f64, f64)>,
    /// Shared scale of the arrow control.
    pub arrow_scale: f64,
}

impl CarouselFrame {
    pub fn page(&self, index: usize) -> Option<&VisualFrame> {
        self.pages.iter().find(|p| p.page == index)
    }
}

/// What the screen shows this frame. Exactly one variant is ever active,
/// so the splash and the carousel can never be visible together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "frame", rename_all = "snake_case")]
pub enum ScreenFrame {
    /// Nothing renders: fonts are not ready, or the screen is not mounted
    /// or already navigated away.
    Blank,
    Intro(IntroFrame),
    Carousel(CarouselFrame),
}

impl ScreenFrame {
    pub fn is_intro(&self) -> bool {
        matches!(self, Self::Intro(_))
    }

    pub fn is_carousel(&self) -> bool {
        matches!(self, Self::Carousel(_))
    }
}

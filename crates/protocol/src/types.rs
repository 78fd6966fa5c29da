use serde::{Deserialize, Serialize};

/// Whether `width` is too small (or NaN) to lay pages out along.
#[inline]
pub fn is_degenerate_width(width: f64) -> bool {
    width.is_nan() || width <= 0.0
}

/// The visible area the carousel is laid out in.
///
/// `width` doubles as the page width: page `i` is centered at `i * width`
/// on the scroll axis. Hosts resend it on every layout pass (rotation,
/// window resize) and the engine simply recomputes control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Page width used for scroll math. Same unit as scroll offsets.
    #[inline]
    pub fn page_width(&self) -> f64 {
        self.width
    }

    /// Whether the viewport is too small to lay pages out in.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

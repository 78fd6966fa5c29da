//! Pure mapping from scroll position to per-page visual parameters.
//!
//! Every output is a three-point clamped interpolation over the page's
//! control points `L = (i - 1) * w`, `M = i * w`, `R = (i + 1) * w`, except
//! the floating dot's vertical offset which follows the ambient phase.

use onboard_protocol::{VisualFrame, is_degenerate_width};

use crate::anim::{interpolate, interpolate_range};

/// The values a parameter takes at the left, middle and right control
/// points of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamCurve {
    pub at_left: f64,
    pub at_mid: f64,
    pub at_right: f64,
}

impl ParamCurve {
    pub const fn new(at_left: f64, at_mid: f64, at_right: f64) -> Self {
        Self {
            at_left,
            at_mid,
            at_right,
        }
    }

    pub fn sample(&self, scroll: f64, points: &ControlPoints) -> f64 {
        interpolate(
            scroll,
            &[points.left, points.mid, points.right],
            &[self.at_left, self.at_mid, self.at_right],
        )
    }
}

pub const IMAGE_SCALE: ParamCurve = ParamCurve::new(0.9, 1.0, 0.9);
pub const IMAGE_TRANSLATE_Y: ParamCurve = ParamCurve::new(40.0, 0.0, 40.0);
pub const IMAGE_OPACITY: ParamCurve = ParamCurve::new(0.6, 1.0, 0.6);
pub const ILLUSION_ROTATION: ParamCurve = ParamCurve::new(-10.0, 0.0, 10.0);
pub const ILLUSION_OPACITY: ParamCurve = ParamCurve::new(0.6, 1.0, 0.6);
pub const DOT_TRANSLATE_X: ParamCurve = ParamCurve::new(-20.0, 0.0, 20.0);
pub const DOT_OPACITY: ParamCurve = ParamCurve::new(0.6, 1.0, 0.6);
pub const INDICATOR_WIDTH: ParamCurve = ParamCurve::new(8.0, 16.0, 8.0);
pub const INDICATOR_OPACITY: ParamCurve = ParamCurve::new(0.4, 1.0, 0.4);
pub const CAPTION_TRANSLATE_Y: ParamCurve = ParamCurve::new(20.0, 0.0, -20.0);
pub const CAPTION_OPACITY: ParamCurve = ParamCurve::new(0.6, 1.0, 0.6);

/// Range the floating dot bobs over as the ambient phase goes `0 → 1`.
pub const DOT_FLOAT_RANGE: (f64, f64) = (-6.0, 6.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub left: f64,
    pub mid: f64,
    pub right: f64,
}

impl ControlPoints {
    pub fn for_page(page: usize, page_width: f64) -> Self {
        let i = page as f64;
        Self {
            left: (i - 1.0) * page_width,
            mid: i * page_width,
            right: (i + 1.0) * page_width,
        }
    }
}

/// Vertical offset of the floating dot for an ambient phase.
pub fn ambient_translate_y(ambient_phase: f64) -> f64 {
    interpolate_range(ambient_phase, DOT_FLOAT_RANGE.0, DOT_FLOAT_RANGE.1)
}

/// Visual parameters for `page` at scroll offset `scroll`.
///
/// A non-positive (or NaN) page width has no meaningful control points;
/// the page is then shown as if centered.
pub fn derive_frame(scroll: f64, page: usize, page_width: f64, ambient_phase: f64) -> VisualFrame {
    let dot_translate_y = ambient_translate_y(ambient_phase);
    if is_degenerate_width(page_width) {
        return centered_frame(page, dot_translate_y);
    }

    let points = ControlPoints::for_page(page, page_width);
    let at = |curve: &ParamCurve| curve.sample(scroll, &points);
    VisualFrame {
        page,
        image_scale: at(&IMAGE_SCALE),
        image_translate_y: at(&IMAGE_TRANSLATE_Y),
        image_opacity: at(&IMAGE_OPACITY),
        illusion_rotation: at(&ILLUSION_ROTATION),
        illusion_opacity: at(&ILLUSION_OPACITY),
        dot_translate_x: at(&DOT_TRANSLATE_X),
        dot_translate_y,
        dot_opacity: at(&DOT_OPACITY),
        indicator_width: at(&INDICATOR_WIDTH),
        indicator_opacity: at(&INDICATOR_OPACITY),
        caption_translate_y: at(&CAPTION_TRANSLATE_Y),
        caption_opacity: at(&CAPTION_OPACITY),
    }
}

fn centered_frame(page: usize, dot_translate_y: f64) -> VisualFrame {
    VisualFrame {
        page,
        image_scale: IMAGE_SCALE.at_mid,
        image_translate_y: IMAGE_TRANSLATE_Y.at_mid,
        image_opacity: IMAGE_OPACITY.at_mid,
        illusion_rotation: ILLUSION_ROTATION.at_mid,
        illusion_opacity: ILLUSION_OPACITY.at_mid,
        dot_translate_x: DOT_TRANSLATE_X.at_mid,
        dot_translate_y,
        dot_opacity: DOT_OPACITY.at_mid,
        indicator_width: INDICATOR_WIDTH.at_mid,
        indicator_opacity: INDICATOR_OPACITY.at_mid,
        caption_translate_y: CAPTION_TRANSLATE_Y.at_mid,
        caption_opacity: CAPTION_OPACITY.at_mid,
    }
}

/// Frames for the page nearest `scroll` and whichever neighbours exist.
pub fn derive_visible(
    scroll: f64,
    page_width: f64,
    ambient_phase: f64,
    page_count: usize,
) -> Vec<VisualFrame> {
    if page_count == 0 {
        return Vec::new();
    }
    let current = crate::scroll::nearest_page(scroll, page_width, page_count);
    let first = current.saturating_sub(1);
    let last = (current + 1).min(page_count - 1);
    (first..=last)
        .map(|page| derive_frame(scroll, page, page_width, ambient_phase))
        .collect()
}

/// Dot indicator `(width, opacity)` for every page.
pub fn derive_indicators(scroll: f64, page_width: f64, page_count: usize) -> Vec<(f64, f64)> {
    (0..page_count)
        .map(|page| {
            if is_degenerate_width(page_width) {
                return (INDICATOR_WIDTH.at_mid, INDICATOR_OPACITY.at_mid);
            }
            let points = ControlPoints::for_page(page, page_width);
            (
                INDICATOR_WIDTH.sample(scroll, &points),
                INDICATOR_OPACITY.sample(scroll, &points),
            )
        })
        .collect()
}

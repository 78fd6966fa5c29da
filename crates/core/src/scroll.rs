//! Single source of truth for the carousel's horizontal scroll offset.

use onboard_protocol::is_degenerate_width;

/// Latest horizontal offset reported by the paged scroll surface.
///
/// Written only by the scroll event stream, read by any number of pure
/// derivations. Values are stored as received: fast flicks may overshoot
/// `[0, (N - 1) * page_width]` and it is the deriver's job to clamp.
#[derive(Debug, Clone, Default)]
pub struct ScrollPositionTracker {
    offset: Option<f64>,
    events: u64,
}

impl ScrollPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking at the origin. Later scroll events overwrite it.
    pub fn start(&mut self) {
        if self.offset.is_none() {
            self.offset = Some(0.0);
        }
    }

    /// Record an offset from the scroll surface.
    #[inline]
    pub fn on_scroll(&mut self, offset: f64) {
        self.offset = Some(offset);
        self.events += 1;
    }

    /// `None` until the tracker has been started or received an event.
    pub fn position(&self) -> Option<f64> {
        self.offset
    }

    pub fn is_started(&self) -> bool {
        self.offset.is_some()
    }

    /// Offset for renderers, with the origin standing in before start.
    pub fn offset_or_origin(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    /// Number of scroll events received.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Page whose center is closest to the current offset, clamped to the
    /// valid range. A degenerate width always reports the first page.
    pub fn nearest_page(&self, page_width: f64, page_count: usize) -> usize {
        nearest_page(self.offset_or_origin(), page_width, page_count)
    }
}

/// See [`ScrollPositionTracker::nearest_page`].
pub fn nearest_page(offset: f64, page_width: f64, page_count: usize) -> usize {
    if is_degenerate_width(page_width) {
        return 0;
    }
    let last = page_count.saturating_sub(1);
    if !offset.is_finite() {
        return if offset == f64::INFINITY { last } else { 0 };
    }
    let raw = (offset / page_width).round();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(last)
    }
}

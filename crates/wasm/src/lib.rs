//! JS bridge. Each mounted onboarding screen gets its own handle; dropping
//! the handle (or calling `teardown`) cancels everything it scheduled.

use onboard_core::{Millis, OnboardingConfig, OnboardingScreen, ScrollSurface, ScrollTarget};
use onboard_protocol::{HostCommand, Intent, Viewport};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Scroll surface that accepts every request without scrolling anything.
///
/// The JS side owns the real scroll view and performs the `ScrollToPage`
/// commands returned from `tick`, which carry the same offset.
#[derive(Debug, Default)]
struct CommandSurface;

impl ScrollTarget for CommandSurface {
    fn scroll_to(&mut self, _x: f64, _y: f64, _animated: bool) {}
}

impl ScrollSurface for CommandSurface {
    fn direct(&mut self) -> Option<&mut dyn ScrollTarget> {
        Some(self)
    }
}

#[derive(Debug, Serialize)]
struct TickResult {
    commands: Vec<HostCommand>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub struct OnboardingHandle {
    screen: OnboardingScreen,
    surface: CommandSurface,
}

#[wasm_bindgen]
impl OnboardingHandle {
    /// Create a screen. `config_json` may be omitted for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<OnboardingHandle, JsError> {
        let config = match config_json.as_deref() {
            Some(json) => OnboardingConfig::from_json_str(json)
                .map_err(|e| JsError::new(&e.to_string()))?,
            None => OnboardingConfig::default(),
        };
        Ok(Self {
            screen: OnboardingScreen::new(config),
            surface: CommandSurface::default(),
        })
    }

    pub fn mount(&mut self, now: f64) {
        self.screen.mount(to_millis(now));
    }

    #[wasm_bindgen(js_name = setFontsReady)]
    pub fn set_fonts_ready(&mut self, ready: bool) {
        self.screen.set_fonts_ready(ready);
    }

    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.screen.set_viewport(Viewport::new(width, height));
    }

    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, offset: f64) {
        self.screen.on_scroll(offset);
    }

    /// Apply a user action, given as `{"type": "skip"}`,
    /// `{"type": "arrow", "page": 1}`, etc.
    pub fn intent(&mut self, now: f64, intent_json: &str) -> Result<(), JsError> {
        let intent: Intent =
            serde_json::from_str(intent_json).map_err(|e| JsError::new(&e.to_string()))?;
        self.screen.handle(to_millis(now), intent);
        Ok(())
    }

    /// Fire due timers. Returns `{"commands": [...]}`; scroll commands in
    /// the list are the page changes JS should perform on its view.
    pub fn tick(&mut self, now: f64) -> Result<String, JsError> {
        let commands = self.screen.tick(to_millis(now), &mut self.surface);
        to_json(&TickResult { commands })
    }

    /// The frame to draw, as JSON.
    pub fn render(&self, now: f64) -> Result<String, JsError> {
        to_json(&self.screen.render(to_millis(now)))
    }

    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.screen.next_deadline().map(|t| t as f64)
    }

    pub fn teardown(&mut self) {
        self.screen.teardown();
    }
}

/// JS clocks are fractional milliseconds; negative or NaN clamp to zero.
fn to_millis(now: f64) -> Millis {
    if now.is_finite() && now > 0.0 {
        now as Millis
    } else {
        0
    }
}

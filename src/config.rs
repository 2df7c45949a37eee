//! Slider defaults and the options accepted at mount time.

use crate::SliderError;
use serde::Deserialize;

// Timing
pub const DEFAULT_TRANSITION_MS: u32 = 500;
pub const DEFAULT_INTERVAL_MS: u32 = 5000;

// Gesture thresholds
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_DRAG_COMMIT_FRACTION: f64 = 0.2;

// Markup contract
pub const WRAPPER_SELECTOR: &str = ".slider-wrapper";
pub const SLIDE_SELECTOR: &str = ".slider-item";
pub const AUTO_MOUNT_SELECTOR: &str = "[data-slider]";
pub const AUTO_MOUNT_ATTRIBUTE: &str = "data-slider";

// Generated controls
pub const CONTROLS_CLASS: &str = "slider-controls";
pub const INDICATOR_CLASS: &str = "slider-indicator";
pub const ACTIVE_CLASS: &str = "active";
pub const ARROW_PREV_CLASS: &str = "slider-arrow prev";
pub const ARROW_NEXT_CLASS: &str = "slider-arrow next";
pub const ARROW_PREV_GLYPH: &str = "\u{276E}";
pub const ARROW_NEXT_GLYPH: &str = "\u{276F}";
pub const GRABBING_CURSOR: &str = "grabbing";

/// Runtime options for one mounted slider.
///
/// Every field is optional when deserializing; missing fields take the
/// defaults below. `interval` is accepted as an alias of `intervalMs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub autoplay: bool,
    #[serde(alias = "interval")]
    pub interval_ms: u32,
    pub show_indicators: bool,
    pub show_arrows: bool,
    pub pause_on_hover: bool,
    pub transition_ms: u32,
    pub swipe: bool,
    pub drag: bool,
    pub swipe_threshold_px: f64,
    pub drag_commit_fraction: f64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            show_indicators: true,
            show_arrows: true,
            pause_on_hover: false,
            transition_ms: DEFAULT_TRANSITION_MS,
            swipe: true,
            drag: true,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            drag_commit_fraction: DEFAULT_DRAG_COMMIT_FRACTION,
        }
    }
}

impl SliderOptions {
    /// Parse options from a JSON object, e.g. a `data-slider` attribute.
    /// An empty or whitespace-only string yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SliderError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_json::from_str(raw)
            .map_err(|e| SliderError::InvalidOptions(e.to_string()))?;
        options.validate()
    }

    /// Check value ranges, returning the options unchanged when they hold.
    pub fn validate(self) -> Result<Self, SliderError> {
        if self.interval_ms == 0 {
            return Err(SliderError::InvalidOptions(
                "intervalMs must be greater than 0".into(),
            ));
        }
        if self.transition_ms == 0 {
            return Err(SliderError::InvalidOptions(
                "transitionMs must be greater than 0".into(),
            ));
        }
        if !(self.swipe_threshold_px >= 0.0) {
            return Err(SliderError::InvalidOptions(format!(
                "swipeThresholdPx must be non-negative, got {}",
                self.swipe_threshold_px
            )));
        }
        if !(self.drag_commit_fraction > 0.0 && self.drag_commit_fraction < 1.0) {
            return Err(SliderError::InvalidOptions(format!(
                "dragCommitFraction must be within (0, 1), got {}",
                self.drag_commit_fraction
            )));
        }
        Ok(self)
    }
}

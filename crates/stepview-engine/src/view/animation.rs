use crate::tracker::HIGHLIGHT_DURATION;
use serde::Serialize;
use std::time::Duration;

/// Message shown when there are no steps yet.
pub const DEFAULT_PLACEHOLDER: &str = "Your generated sequences will appear here.";

/// Static timing parameters for the rendered view.
///
/// These never influence which steps are highlighted; they only describe how
/// a front end should animate the blocks it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Animation {
    /// Pulse duration for highlighted steps. Matches the tracker's clear delay.
    pub highlight: Duration,
    /// Base entrance duration of a step block.
    pub entrance: Duration,
    /// Offset added per list position and per paragraph index.
    pub stagger: Duration,
    /// Fade duration of titles and paragraphs.
    pub fade: Duration,
    pub placeholder_fade: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            highlight: HIGHLIGHT_DURATION,
            entrance: Duration::from_millis(500),
            stagger: Duration::from_millis(100),
            fade: Duration::from_millis(300),
            placeholder_fade: Duration::from_millis(500),
        }
    }
}

impl Animation {
    /// Delay for the item at `index` in a staggered run.
    pub fn stagger_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(index)
    }
}

/// Everything [`render`](super::render) needs besides the data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    pub animation: Animation,
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            animation: Animation::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

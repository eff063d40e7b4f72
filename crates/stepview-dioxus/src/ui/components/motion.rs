//! Inline CSS for the transitions described by the engine's view model.
//!
//! Keyframes live in `assets/sequence.css`; these helpers only bind names,
//! durations and delays.

use std::time::Duration;
use stepview_engine::{Transition, Treatment};

const EASE_STANDARD: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

fn ms(duration: Duration) -> u128 {
    duration.as_millis()
}

/// List-level entrance, staggered by position.
pub fn entrance_style(entrance: &Transition) -> String {
    format!(
        "animation: step-enter {}ms {EASE_STANDARD} {}ms both;",
        ms(entrance.duration),
        ms(entrance.delay)
    )
}

pub fn treatment_style(treatment: &Treatment) -> String {
    match treatment {
        Treatment::Pulse { duration } => {
            format!("animation: step-pulse {}ms {EASE_STANDARD};", ms(*duration))
        }
        Treatment::Appear { duration } => {
            format!("animation: step-appear {}ms {EASE_STANDARD};", ms(*duration))
        }
    }
}

pub fn fade_style(fade: &Transition) -> String {
    format!(
        "animation: fade-in {}ms ease {}ms both;",
        ms(fade.duration),
        ms(fade.delay)
    )
}

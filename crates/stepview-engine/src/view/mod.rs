//! Render contract for a step sequence.
//!
//! [`render`] is a pure function from `(sequence, highlighted)` to a
//! [`SequenceView`] description. Front ends (Dioxus, ratatui) draw that
//! description and never decide highlight state themselves.
//!
//! ```rust
//! use stepview_engine::{HighlightedSet, RenderOptions, Sequence, Step, Treatment, render};
//!
//! let sequence = Sequence::from(vec![Step::new(1, "Hello"), Step::new(2, "World")]);
//! let view = render(&sequence, &HighlightedSet::from([2]), &RenderOptions::default());
//!
//! let blocks = view.step_blocks();
//! assert!(matches!(blocks[0].treatment, Treatment::Appear { .. }));
//! assert!(matches!(blocks[1].treatment, Treatment::Pulse { .. }));
//! ```

pub mod animation;

pub use animation::{Animation, DEFAULT_PLACEHOLDER, RenderOptions};

use crate::models::{HighlightedSet, Sequence, Step, StepNumber};
use crate::paragraphs::split_paragraphs;
use serde::Serialize;
use std::time::Duration;

/// A delayed, fixed-length cosmetic transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
}

impl Transition {
    pub fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }

    pub fn immediate(duration: Duration) -> Self {
        Self::new(Duration::ZERO, duration)
    }
}

/// Per-step animation chosen by highlight membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Treatment {
    /// Standard entrance for previously seen steps
    Appear { duration: Duration },
    /// Transient pulse for newly added steps; resolves when the highlight clears
    Pulse { duration: Duration },
}

impl Treatment {
    pub fn is_pulse(&self) -> bool {
        matches!(self, Treatment::Pulse { .. })
    }

    pub fn duration(&self) -> Duration {
        match self {
            Treatment::Appear { duration } | Treatment::Pulse { duration } => *duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphBlock {
    pub index: usize,
    pub text: String,
    pub fade: Transition,
}

/// Titled block for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepBlock {
    /// List key; the step's identity.
    pub step_number: StepNumber,
    /// Position in the sequence, which drives the list stagger.
    pub position: usize,
    pub title: String,
    pub title_fade: Transition,
    pub entrance: Transition,
    pub treatment: Treatment,
    pub paragraphs: Vec<ParagraphBlock>,
}

impl StepBlock {
    pub fn is_highlighted(&self) -> bool {
        self.treatment.is_pulse()
    }
}

/// Visual description of the whole view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceView {
    /// Nothing to show yet
    Placeholder { message: String, fade: Transition },
    Steps { blocks: Vec<StepBlock> },
}

impl SequenceView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, SequenceView::Placeholder { .. })
    }

    /// Step blocks in render order; empty for the placeholder.
    pub fn step_blocks(&self) -> &[StepBlock] {
        match self {
            SequenceView::Placeholder { .. } => &[],
            SequenceView::Steps { blocks } => blocks,
        }
    }

    pub fn highlighted_steps(&self) -> Vec<StepNumber> {
        self.step_blocks()
            .iter()
            .filter(|block| block.is_highlighted())
            .map(|block| block.step_number)
            .collect()
    }
}

/// Build the visual description for `sequence` given the current highlight.
pub fn render(
    sequence: &Sequence,
    highlighted: &HighlightedSet,
    options: &RenderOptions,
) -> SequenceView {
    let animation = &options.animation;

    if sequence.is_empty() {
        return SequenceView::Placeholder {
            message: options.placeholder.clone(),
            fade: Transition::immediate(animation.placeholder_fade),
        };
    }

    let blocks = sequence
        .iter()
        .enumerate()
        .map(|(position, step)| render_step(position, step, highlighted, animation))
        .collect();

    SequenceView::Steps { blocks }
}

fn render_step(
    position: usize,
    step: &Step,
    highlighted: &HighlightedSet,
    animation: &Animation,
) -> StepBlock {
    let treatment = if highlighted.contains(step.step_number) {
        Treatment::Pulse {
            duration: animation.highlight,
        }
    } else {
        Treatment::Appear {
            duration: animation.entrance,
        }
    };

    let paragraphs = split_paragraphs(&step.content)
        .into_iter()
        .enumerate()
        .map(|(index, text)| ParagraphBlock {
            index,
            text: text.to_string(),
            fade: Transition::new(animation.stagger_for(index), animation.fade),
        })
        .collect();

    StepBlock {
        step_number: step.step_number,
        position,
        title: format!("Step {}", step.step_number),
        title_fade: Transition::immediate(animation.fade),
        entrance: Transition::new(animation.stagger_for(position), animation.entrance),
        treatment,
        paragraphs,
    }
}

pub mod models;
pub mod paragraphs;
pub mod script;
pub mod tracker;
pub mod view;

// Re-export key types for easier usage
pub use models::{HighlightedSet, Sequence, Step, StepNumber};
pub use paragraphs::split_paragraphs;
pub use script::{Replay, ReplayScript, ScriptError};
pub use tracker::{ClearTimer, DiffTracker, HIGHLIGHT_DURATION};
pub use view::{
    Animation, ParagraphBlock, RenderOptions, SequenceView, StepBlock, Transition, Treatment,
    render,
};

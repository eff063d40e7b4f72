pub mod highlighted;
pub mod step;

pub use highlighted::HighlightedSet;
pub use step::{Sequence, Step, StepNumber};

pub mod motion;
pub mod placeholder;
pub mod sequence_view;
pub mod step_card;
pub mod step_list;

pub use placeholder::Placeholder;
pub use sequence_view::SequenceView;
pub use step_card::StepCard;
pub use step_list::StepList;

use crate::models::StepNumber;
use serde::Serialize;
use std::collections::BTreeSet;

/// Step numbers currently flagged as newly added.
///
/// Kept ordered so that logging and snapshots are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightedSet {
    numbers: BTreeSet<StepNumber>,
}

impl HighlightedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, step_number: StepNumber) -> bool {
        self.numbers.contains(&step_number)
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = StepNumber> + '_ {
        self.numbers.iter().copied()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }
}

impl FromIterator<StepNumber> for HighlightedSet {
    fn from_iter<I: IntoIterator<Item = StepNumber>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[StepNumber; N]> for HighlightedSet {
    fn from(numbers: [StepNumber; N]) -> Self {
        numbers.into_iter().collect()
    }
}

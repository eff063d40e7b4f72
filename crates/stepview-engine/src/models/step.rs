use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordinal identity of a step within a sequence.
pub type StepNumber = i64;

/// One atomic unit of generated content.
///
/// `step_number` is the identity key used for diffing and for list keys. It is
/// assumed to be unique within a single [`Sequence`]; duplicates are tolerated
/// but make highlight attribution ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub step_number: StepNumber,
    pub content: String,
}

impl Step {
    pub fn new(step_number: StepNumber, content: impl Into<String>) -> Self {
        Self {
            step_number,
            content: content.into(),
        }
    }
}

/// Ordered collection of steps as currently known to the view.
///
/// Render order is list order, never the numeric order of `step_number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Distinct step numbers present in this sequence.
    pub fn step_numbers(&self) -> HashSet<StepNumber> {
        self.steps.iter().map(|step| step.step_number).collect()
    }
}

impl From<Vec<Step>> for Sequence {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<Step> for Sequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_preserves_list_order() {
        let sequence = Sequence::from(vec![
            Step::new(3, "third"),
            Step::new(1, "first"),
            Step::new(2, "second"),
        ]);

        let numbers: Vec<_> = sequence.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_step_numbers_collapses_duplicates() {
        let sequence = Sequence::from(vec![Step::new(1, "a"), Step::new(1, "b")]);

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.step_numbers(), HashSet::from([1]));
    }

    #[test]
    fn test_sequence_deserializes_from_producer_json() {
        let json = r#"[
            {"step_number": 1, "content": "Hello"},
            {"step_number": 2, "content": "World\n\nAgain"}
        ]"#;

        let sequence: Sequence = serde_json::from_str(json).unwrap();

        assert_eq!(
            sequence,
            Sequence::from(vec![Step::new(1, "Hello"), Step::new(2, "World\n\nAgain")])
        );
    }

    #[test]
    fn test_sequence_serializes_as_plain_array() {
        let sequence = Sequence::from(vec![Step::new(7, "x")]);

        let json = serde_json::to_string(&sequence).unwrap();

        assert_eq!(json, r#"[{"step_number":7,"content":"x"}]"#);
    }
}

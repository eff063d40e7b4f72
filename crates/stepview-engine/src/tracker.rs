/*!
 * # Diff Tracker
 *
 * Decides which steps are "new since the last update" and owns the timed
 * reset of that marking.
 *
 * ## State
 *
 * - **snapshot**: the sequence seen by the previous update, used only for diffing
 * - **highlighted**: step numbers present now but absent from the snapshot
 * - **pending**: the single live [`ClearTimer`], if any
 *
 * ## Timer discipline
 *
 * Every update bumps the tracker's generation before deciding whether to arm a
 * new timer. A [`ClearTimer`] carries the generation it was armed under, so a
 * handle from an earlier update can be fired at any time without effect. Hosts
 * are free to cancel their scheduled task as well, but correctness never
 * depends on it.
 *
 * ```rust
 * use std::time::{Duration, Instant};
 * use stepview_engine::{DiffTracker, Sequence, Step};
 *
 * let start = Instant::now();
 * let mut tracker = DiffTracker::new();
 *
 * tracker.update(&Sequence::from(vec![Step::new(1, "Hello")]), start);
 * let timer = tracker
 *     .update(
 *         &Sequence::from(vec![Step::new(1, "Hello"), Step::new(2, "World")]),
 *         start,
 *     )
 *     .unwrap();
 *
 * assert!(tracker.is_highlighted(2));
 * assert!(!tracker.is_highlighted(1));
 *
 * tracker.poll(start + Duration::from_millis(2000));
 * assert!(tracker.highlighted().is_empty());
 * # let _ = timer;
 * ```
 */

use crate::models::{HighlightedSet, Sequence, StepNumber};
use std::time::{Duration, Instant};

/// How long a newly added step stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

/// Handle for one armed clear action.
///
/// Only the handle returned by the most recent arming update is live; every
/// other handle is stale and firing it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTimer {
    generation: u64,
    deadline: Instant,
    delay: Duration,
}

impl ClearTimer {
    /// Instant at which the highlight should be cleared.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Delay between arming and the deadline, for hosts that schedule by sleeping.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[derive(Debug, Clone)]
pub struct DiffTracker {
    snapshot: Sequence,
    highlighted: HighlightedSet,
    generation: u64,
    pending: Option<ClearTimer>,
    highlight_duration: Duration,
}

impl Default for DiffTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffTracker {
    pub fn new() -> Self {
        Self::with_highlight_duration(HIGHLIGHT_DURATION)
    }

    pub fn with_highlight_duration(highlight_duration: Duration) -> Self {
        Self {
            snapshot: Sequence::default(),
            highlighted: HighlightedSet::new(),
            generation: 0,
            pending: None,
            highlight_duration,
        }
    }

    /// Process an incoming sequence.
    ///
    /// Computes the step numbers added since the previous snapshot, replaces
    /// the highlighted set with exactly those numbers and then overwrites the
    /// snapshot. Any earlier timer is invalidated. Returns the newly armed
    /// timer when something was added.
    pub fn update(&mut self, current: &Sequence, now: Instant) -> Option<ClearTimer> {
        let previous = self.snapshot.step_numbers();
        let added: HighlightedSet = current
            .iter()
            .map(|step| step.step_number)
            .filter(|number| !previous.contains(number))
            .collect();

        self.snapshot = current.clone();
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;

        if added.is_empty() {
            self.highlighted.clear();
            log::debug!(
                "diff generation {}: no new steps in {} step(s)",
                self.generation,
                current.len()
            );
            return None;
        }

        log::debug!(
            "diff generation {}: {} new step(s) {:?}",
            self.generation,
            added.len(),
            added.iter().collect::<Vec<_>>()
        );
        self.highlighted = added;

        let timer = ClearTimer {
            generation: self.generation,
            deadline: now + self.highlight_duration,
            delay: self.highlight_duration,
        };
        self.pending = Some(timer);
        Some(timer)
    }

    /// Fire a clear action.
    ///
    /// Clears the highlighted set only when `timer` is the live handle.
    /// Returns whether anything was cleared.
    pub fn fire(&mut self, timer: ClearTimer) -> bool {
        if self.pending != Some(timer) {
            log::trace!(
                "ignoring stale clear timer from generation {} (current {})",
                timer.generation,
                self.generation
            );
            return false;
        }

        self.pending = None;
        let cleared = !self.highlighted.is_empty();
        self.highlighted.clear();
        cleared
    }

    /// Fire the live timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(timer) if timer.is_due(now) => self.fire(timer),
            _ => false,
        }
    }

    pub fn highlighted(&self) -> &HighlightedSet {
        &self.highlighted
    }

    pub fn is_highlighted(&self, step_number: StepNumber) -> bool {
        self.highlighted.contains(step_number)
    }

    pub fn pending(&self) -> Option<ClearTimer> {
        self.pending
    }

    pub fn snapshot(&self) -> &Sequence {
        &self.snapshot
    }

    pub fn highlight_duration(&self) -> Duration {
        self.highlight_duration
    }
}

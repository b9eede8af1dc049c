// reveal.rs — Staggered reveal of diff rows.
//
// Entry i becomes visible at `i * delay` after the animation starts. Each
// entry's hidden → visible transition is independent of every other entry,
// so cancelling only stops scheduling: rows already shown stay shown and
// nothing is rolled back.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone)]
pub struct RevealTimeline {
    delay: Duration,
    states: Vec<EntryState>,
    cancelled: bool,
}

impl RevealTimeline {
    pub fn new(len: usize, delay: Duration) -> Self {
        Self {
            delay,
            states: vec![EntryState::Hidden; len],
            cancelled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Offset from start at which entry `index` is due.
    pub fn due_at(&self, index: usize) -> Duration {
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay.checked_mul(factor).unwrap_or(Duration::MAX)
    }

    /// How many entries are due at `elapsed`.
    fn due_count(&self, elapsed: Duration) -> usize {
        if self.delay.is_zero() {
            return self.states.len();
        }
        let steps = elapsed.as_nanos() / self.delay.as_nanos();
        usize::try_from(steps)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(self.states.len())
    }

    /// Advance to `elapsed` since start; returns indices revealed by this
    /// call, in index order. A cancelled timeline reveals nothing.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<usize> {
        if self.cancelled {
            return Vec::new();
        }
        let due = self.due_count(elapsed);
        let mut revealed = Vec::new();
        for (i, state) in self.states.iter_mut().enumerate().take(due) {
            if *state == EntryState::Hidden {
                *state = EntryState::Visible;
                revealed.push(i);
            }
        }
        revealed
    }

    /// Stop scheduling further transitions.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn state(&self, index: usize) -> Option<EntryState> {
        self.states.get(index).copied()
    }

    pub fn visible_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == EntryState::Visible)
            .count()
    }

    /// Every entry is visible.
    pub fn is_complete(&self) -> bool {
        self.visible_count() == self.states.len()
    }

    /// Nothing more will be revealed.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.is_complete()
    }
}

//! A single in-progress sort

use crate::sort::{Algorithm, Direction, Sorter, Step};

/// Transient record of an active sort: which algorithm, which direction,
/// where to resume, and how many steps have been shown so far.
#[derive(Debug, Clone)]
pub struct SortSession {
    sorter: Sorter,
    steps: usize,
    last_step: Option<Step>,
}

impl SortSession {
    pub fn new(algorithm: Algorithm, direction: Direction) -> Self {
        SortSession {
            sorter: Sorter::new(algorithm, direction),
            steps: 0,
            last_step: None,
        }
    }

    /// Steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Indices touched by the most recent step
    pub fn last_step(&self) -> Option<Step> {
        self.last_step
    }

    /// Resume the sort for exactly one step
    pub fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        let step = self.sorter.step(values)?;
        self.steps += 1;
        self.last_step = Some(step);
        Some(step)
    }

    /// Run the remaining steps without suspending
    pub fn drain(&mut self, values: &mut [i64]) -> usize {
        let remaining = self.sorter.run_to_end(values);
        self.steps += remaining;
        self.last_step = None;
        remaining
    }
}

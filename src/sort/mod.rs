//! Resumable sorting algorithms
//!
//! Every algorithm here is an externally polled state machine: the loop indices
//! that a plain sort would keep on the call stack live in the struct instead,
//! and each call to `step` runs the loop only until the next swap or shift.
//! The caller (the render loop) decides when to resume, so exactly one visual
//! change is produced per frame tick.
//!
//! - [`bubble`]: adjacent-swap bubble sort
//! - [`insertion`]: shift-and-insert insertion sort
//!
//! [`Sorter`] is the tagged union the driver holds while a session is active.

pub mod bubble;
pub mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

use std::fmt;

/// Which sorting algorithm to visualize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    /// Human-readable name shown in the title line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target ordering of the sorted list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `left` must move past `right` for the pair to be in order.
    ///
    /// Equal values are never out of order, so a sorted list produces no steps.
    pub fn out_of_order(self, left: i64, right: i64) -> bool {
        match self {
            Direction::Ascending => left > right,
            Direction::Descending => left < right,
        }
    }

    /// Whether `values` is already sorted in this direction
    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One swap or shift: the two adjacent indices whose values were exchanged.
///
/// `right == left + 1` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub left: usize,
    pub right: usize,
}

impl Step {
    pub(crate) fn at(left: usize) -> Self {
        Step {
            left,
            right: left + 1,
        }
    }
}

/// An in-progress sort of one of the supported algorithms
#[derive(Debug, Clone)]
pub enum Sorter {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
}

impl Sorter {
    /// Create a sorter positioned before its first step
    pub fn new(algorithm: Algorithm, direction: Direction) -> Self {
        match algorithm {
            Algorithm::Bubble => Sorter::Bubble(BubbleSort::new(direction)),
            Algorithm::Insertion => Sorter::Insertion(InsertionSort::new(direction)),
        }
    }

    /// Advance until the next swap or shift has been applied to `values`.
    ///
    /// Returns `None` once the list is sorted, and keeps returning `None` on
    /// every later call. `values` must be the same list on every call.
    pub fn step(&mut self, values: &mut [i64]) -> Option<Step> {
        match self {
            Sorter::Bubble(s) => s.step(values),
            Sorter::Insertion(s) => s.step(values),
        }
    }

    /// Drain every remaining step, returning how many were taken
    pub fn run_to_end(&mut self, values: &mut [i64]) -> usize {
        let mut steps = 0;
        while self.step(values).is_some() {
            steps += 1;
        }
        steps
    }
}

/// Upper bound on the number of steps either algorithm takes on `len` values
pub fn max_steps(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_direction() {
        assert!(Direction::Ascending.out_of_order(5, 3));
        assert!(!Direction::Ascending.out_of_order(3, 5));
        assert!(Direction::Descending.out_of_order(3, 5));
        assert!(!Direction::Descending.out_of_order(5, 3));
        assert!(!Direction::Ascending.out_of_order(4, 4));
        assert!(!Direction::Descending.out_of_order(4, 4));
    }

    #[test]
    fn test_is_sorted() {
        assert!(Direction::Ascending.is_sorted(&[1, 2, 2, 9]));
        assert!(!Direction::Ascending.is_sorted(&[2, 1]));
        assert!(Direction::Descending.is_sorted(&[9, 2, 2, 1]));
        assert!(Direction::Descending.is_sorted(&[]));
    }

    #[test]
    fn test_max_steps() {
        assert_eq!(max_steps(0), 0);
        assert_eq!(max_steps(1), 0);
        assert_eq!(max_steps(3), 3);
        assert_eq!(max_steps(50), 1225);
    }

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble Sort");
        assert_eq!(Algorithm::Insertion.to_string(), "Insertion Sort");
        assert_eq!(Direction::Descending.to_string(), "Descending");
    }
}

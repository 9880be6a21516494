//! Bubble sort as a resumable state machine

use super::{Direction, Step};

/// Bubble sort suspended between swaps.
///
/// `pass` is the outer loop counter (the number of values already bubbled to
/// the end) and `index` the next adjacent pair `(index, index + 1)` to compare.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: Direction,
    pass: usize,
    index: usize,
}

impl BubbleSort {
    pub fn new(direction: Direction) -> Self {
        BubbleSort {
            direction,
            pass: 0,
            index: 0,
        }
    }

    /// Compare pairs until one is out of order, swap it and suspend
    pub fn step(&mut self, values: &mut [i64]) -> Option<Step> {
        let len = values.len();

        while self.pass + 1 < len {
            // Last `pass` values are already in place
            if self.index + 1 >= len - self.pass {
                self.pass += 1;
                self.index = 0;
                continue;
            }

            let j = self.index;
            self.index += 1;

            if self.direction.out_of_order(values[j], values[j + 1]) {
                values.swap(j, j + 1);
                return Some(Step::at(j));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_steps(values: &mut [i64], direction: Direction) -> Vec<Step> {
        let mut sort = BubbleSort::new(direction);
        std::iter::from_fn(|| sort.step(values)).collect()
    }

    #[test]
    fn test_three_values_ascending() {
        let mut values = [5, 3, 1];
        let steps = collect_steps(&mut values, Direction::Ascending);

        assert_eq!(
            steps,
            vec![Step::at(0), Step::at(1), Step::at(0)],
            "first pass bubbles 5 to the end, second pass fixes 3 and 1"
        );
        assert_eq!(values, [1, 3, 5]);
    }

    #[test]
    fn test_descending() {
        let mut values = [1, 4, 2, 3];
        collect_steps(&mut values, Direction::Descending);
        assert_eq!(values, [4, 3, 2, 1]);
    }

    #[test]
    fn test_intermediate_state_after_each_step() {
        let mut values = [3, 2, 1];
        let mut sort = BubbleSort::new(Direction::Ascending);

        assert_eq!(sort.step(&mut values), Some(Step::at(0)));
        assert_eq!(values, [2, 3, 1]);
        assert_eq!(sort.step(&mut values), Some(Step::at(1)));
        assert_eq!(values, [2, 1, 3]);
        assert_eq!(sort.step(&mut values), Some(Step::at(0)));
        assert_eq!(values, [1, 2, 3]);
        assert_eq!(sort.step(&mut values), None);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut values = [2, 1];
        let mut sort = BubbleSort::new(Direction::Ascending);
        assert!(sort.step(&mut values).is_some());
        assert!(sort.step(&mut values).is_none());
        assert!(sort.step(&mut values).is_none());
    }

    #[test]
    fn test_trivial_lists() {
        let mut empty: [i64; 0] = [];
        assert!(collect_steps(&mut empty, Direction::Ascending).is_empty());

        let mut single = [7];
        assert!(collect_steps(&mut single, Direction::Descending).is_empty());
    }

    #[test]
    fn test_duplicates_are_not_swapped() {
        let mut values = [2, 2, 2];
        assert!(collect_steps(&mut values, Direction::Ascending).is_empty());
    }
}

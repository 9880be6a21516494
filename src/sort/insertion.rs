//! Insertion sort as a resumable state machine

use super::{Direction, Step};

/// Insertion sort suspended between shifts.
///
/// `next` is the outer loop counter: the index of the next value to insert.
/// While a value is walking left, `cursor` holds its current position; each
/// shift exchanges it with its left neighbour.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    direction: Direction,
    next: usize,
    cursor: Option<usize>,
}

impl InsertionSort {
    pub fn new(direction: Direction) -> Self {
        InsertionSort {
            direction,
            next: 1,
            cursor: None,
        }
    }

    /// Shift the value being inserted one place left and suspend
    pub fn step(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            if let Some(j) = self.cursor {
                if j > 0 && self.direction.out_of_order(values[j - 1], values[j]) {
                    values.swap(j - 1, j);
                    self.cursor = Some(j - 1);
                    return Some(Step::at(j - 1));
                }
                self.cursor = None;
            }

            if self.next >= values.len() {
                return None;
            }

            self.cursor = Some(self.next);
            self.next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_steps(values: &mut [i64], direction: Direction) -> Vec<Step> {
        let mut sort = InsertionSort::new(direction);
        std::iter::from_fn(|| sort.step(values)).collect()
    }

    #[test]
    fn test_reverse_ascending_list_descending() {
        let mut values = [1, 2, 3];
        let steps = collect_steps(&mut values, Direction::Descending);

        assert_eq!(values, [3, 2, 1]);
        // 2 moves past 1, then 3 moves past 1 and 2
        assert_eq!(steps, vec![Step::at(0), Step::at(1), Step::at(0)]);
    }

    #[test]
    fn test_shift_moves_value_left() {
        let mut values = [2, 3, 1];
        let mut sort = InsertionSort::new(Direction::Ascending);

        assert_eq!(sort.step(&mut values), Some(Step::at(1)));
        assert_eq!(values, [2, 1, 3]);
        assert_eq!(sort.step(&mut values), Some(Step::at(0)));
        assert_eq!(values, [1, 2, 3]);
        assert_eq!(sort.step(&mut values), None);
        assert_eq!(sort.step(&mut values), None);
    }

    #[test]
    fn test_stable_for_duplicates() {
        let mut values = [3, 1, 3, 1];
        let steps = collect_steps(&mut values, Direction::Ascending);
        assert_eq!(values, [1, 1, 3, 3]);
        // inversions: (3,1) (3,1) (3,1) -> three shifts
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_trivial_lists() {
        let mut empty: [i64; 0] = [];
        assert!(collect_steps(&mut empty, Direction::Ascending).is_empty());

        let mut single = [42];
        assert!(collect_steps(&mut single, Direction::Ascending).is_empty());
    }
}

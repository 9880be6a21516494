//! Visualization state: the list being sorted and how it maps onto the screen

pub mod layout;

pub use layout::{BarLayout, Canvas, Padding};

use crate::errors::VisualError;
use rand::Rng;
use ratatui::layout::Rect;

/// The list being visualized with its value range and derived layout
#[derive(Debug, Clone)]
pub struct VisualState {
    values: Vec<i64>,
    min_val: i64,
    max_val: i64,
    layout: BarLayout,
}

impl VisualState {
    /// Create the state for `values` on an initial `canvas`
    pub fn new(values: Vec<i64>, canvas: Canvas, padding: Padding) -> Result<Self, VisualError> {
        let (min_val, max_val) = bounds(&values)?;
        let layout = BarLayout::compute(canvas, padding, values.len(), min_val, max_val);
        Ok(VisualState {
            values,
            min_val,
            max_val,
            layout,
        })
    }

    /// Replace the list, recomputing the value range and layout
    pub fn set_list(&mut self, values: Vec<i64>) -> Result<(), VisualError> {
        let (min_val, max_val) = bounds(&values)?;
        self.values = values;
        self.min_val = min_val;
        self.max_val = max_val;
        self.relayout(self.layout.canvas);
        Ok(())
    }

    /// Recompute the layout for a new canvas size. No-op if unchanged.
    pub fn resize(&mut self, canvas: Canvas) {
        if canvas != self.layout.canvas {
            self.relayout(canvas);
        }
    }

    fn relayout(&mut self, canvas: Canvas) {
        self.layout = BarLayout::compute(
            canvas,
            self.layout.padding,
            self.values.len(),
            self.min_val,
            self.max_val,
        );
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Mutable access for in-place sorting.
    ///
    /// Only reorders are expected through this, so the range and layout stay valid.
    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub fn min_val(&self) -> i64 {
        self.min_val
    }

    pub fn max_val(&self) -> i64 {
        self.max_val
    }

    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    /// Canvas-relative rectangle of the bar at `index`
    pub fn bar_rect(&self, index: usize) -> Option<Rect> {
        let value = *self.values.get(index)?;
        self.layout.bar_rect(index, value)
    }
}

fn bounds(values: &[i64]) -> Result<(i64, i64), VisualError> {
    let min = values.iter().copied().min().ok_or(VisualError::EmptyList)?;
    let max = values.iter().copied().max().ok_or(VisualError::EmptyList)?;
    Ok((min, max))
}

/// Generate `len` uniformly random values in `[min_val, max_val]`
pub fn generate_starting_list<R: Rng>(
    rng: &mut R,
    len: usize,
    min_val: i64,
    max_val: i64,
) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(min_val..=max_val)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PADDING: Padding = Padding { side: 2, top: 1 };

    #[test]
    fn test_new_computes_bounds() {
        let state = VisualState::new(vec![4, 9, 1, 7], Canvas::new(40, 10), PADDING).unwrap();
        assert_eq!(state.min_val(), 1);
        assert_eq!(state.max_val(), 9);
        assert_eq!(state.values().len(), 4);
        assert_eq!(state.layout().bar_width, 9);
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = VisualState::new(Vec::new(), Canvas::new(40, 10), PADDING).unwrap_err();
        assert_eq!(err, VisualError::EmptyList);

        let mut state = VisualState::new(vec![1], Canvas::new(40, 10), PADDING).unwrap();
        assert_eq!(state.set_list(Vec::new()), Err(VisualError::EmptyList));
        // failed replacement leaves the old list in place
        assert_eq!(state.values(), &[1]);
    }

    #[test]
    fn test_set_list_recomputes_layout() {
        let mut state = VisualState::new(vec![1, 2], Canvas::new(42, 10), PADDING).unwrap();
        assert_eq!(state.layout().bar_width, 20);

        state.set_list(vec![10, 20, 30, 40, 50]).unwrap();
        assert_eq!(state.min_val(), 10);
        assert_eq!(state.max_val(), 50);
        assert_eq!(state.layout().bar_width, 8);
        assert_eq!(state.layout().min_val, 10);
    }

    #[test]
    fn test_resize() {
        let mut state = VisualState::new(vec![1, 2], Canvas::new(42, 10), PADDING).unwrap();
        state.resize(Canvas::new(82, 20));
        assert_eq!(state.layout().bar_width, 40);
        assert_eq!(state.layout().usable_height(), 19);
    }

    #[test]
    fn test_bar_rect_out_of_range_index() {
        let state = VisualState::new(vec![1, 2], Canvas::new(42, 10), PADDING).unwrap();
        assert!(state.bar_rect(0).is_some());
        assert!(state.bar_rect(2).is_none());
    }

    #[test]
    fn test_generate_starting_list_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate_starting_list(&mut rng, 200, -5, 5);
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_generate_starting_list_is_seeded() {
        let a = generate_starting_list(&mut StdRng::seed_from_u64(42), 20, 0, 100);
        let b = generate_starting_list(&mut StdRng::seed_from_u64(42), 20, 0, 100);
        assert_eq!(a, b);
    }
}

//! Bar layout metrics
//!
//! Maps list indices and values onto cell rectangles inside the bar canvas.
//! The canvas origin is its top-left cell; bars grow upward from the bottom row.

use ratatui::layout::Rect;

/// Size of the drawing area, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas { width, height }
    }
}

/// Empty space kept around the bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Total horizontal padding, split evenly left and right
    pub side: u16,
    /// Rows left free above the tallest bar
    pub top: u16,
}

/// Derived, read-only metrics for the current list and canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub canvas: Canvas,
    pub padding: Padding,
    pub bar_width: u16,
    /// Rows per unit of value above the minimum
    pub height_scale: f64,
    pub start_x: u16,
    pub min_val: i64,
}

impl BarLayout {
    /// Compute the layout for `count` bars spanning `[min_val, max_val]`.
    ///
    /// A zero-width value range is treated as a span of one so a list of
    /// equal values still draws.
    pub fn compute(
        canvas: Canvas,
        padding: Padding,
        count: usize,
        min_val: i64,
        max_val: i64,
    ) -> Self {
        let usable_width = canvas.width.saturating_sub(padding.side) as usize;
        let bar_width = (usable_width / count.max(1)).clamp(1, u16::MAX as usize) as u16;

        let usable_height = f64::from(canvas.height.saturating_sub(padding.top));
        let span = max_val.saturating_sub(min_val).max(1) as f64;

        BarLayout {
            canvas,
            padding,
            bar_width,
            height_scale: usable_height / span,
            start_x: padding.side / 2,
            min_val,
        }
    }

    /// Rows available to the tallest bar
    pub fn usable_height(&self) -> u16 {
        self.canvas.height.saturating_sub(self.padding.top)
    }

    /// Height in rows of a bar holding `value`.
    ///
    /// Never less than one row when the canvas has any room for bars, so the
    /// minimum value stays visible.
    pub fn bar_height(&self, value: i64) -> u16 {
        let avail = self.usable_height();
        let offset = value.saturating_sub(self.min_val).max(0) as f64;
        let rows = (offset * self.height_scale).round();
        let rows = if rows >= f64::from(avail) {
            avail
        } else {
            rows as u16
        };
        rows.clamp(avail.min(1), avail)
    }

    /// Rectangle of the bar at `index` holding `value`, clipped to the canvas.
    ///
    /// Returns `None` when the bar falls entirely outside the canvas.
    pub fn bar_rect(&self, index: usize, value: i64) -> Option<Rect> {
        let x = self.start_x as usize + index * self.bar_width as usize;
        if x >= self.canvas.width as usize {
            return None;
        }
        let x = x as u16;
        let width = self.bar_width.min(self.canvas.width - x);
        let height = self.bar_height(value);
        if height == 0 {
            return None;
        }

        Some(Rect::new(x, self.canvas.height - height, width, height))
    }
}

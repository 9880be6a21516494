//! Bar pane rendering

use crate::config::DrawConfig;
use crate::visual::VisualState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    Frame,
};
use rustc_hash::FxHashMap;

/// Color of bar `index`: the highlight override if present, else its gradient
pub fn bar_color(
    index: usize,
    highlight: &FxHashMap<usize, Color>,
    config: &DrawConfig,
) -> Color {
    highlight
        .get(&index)
        .copied()
        .unwrap_or_else(|| config.theme.gradient(index))
}

/// Draw every bar of `visual` into `area`.
///
/// The layout in `visual` must already match `area`'s size; bars are placed
/// relative to its top-left corner.
pub fn render_bars(
    frame: &mut Frame,
    area: Rect,
    visual: &VisualState,
    highlight: &FxHashMap<usize, Color>,
    config: &DrawConfig,
) {
    frame.render_widget(
        Block::new().style(Style::default().bg(config.theme.bg)),
        area,
    );

    for index in 0..visual.values().len() {
        let Some(rect) = visual.bar_rect(index) else {
            continue;
        };
        let bar = Rect::new(area.x + rect.x, area.y + rect.y, rect.width, rect.height)
            .intersection(area);

        let color = bar_color(index, highlight, config);
        frame.render_widget(Block::new().style(Style::default().bg(color)), bar);
    }
}

//! Title and control hints above the bars

use crate::config::DrawConfig;
use crate::sort::{Algorithm, Direction};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const CONTROLS: &str = "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
pub const ALGORITHMS: &str = "I - Insertion Sort | B - Bubble Sort";

/// Title line, e.g. `Bubble Sort - Ascending`
pub fn title(algorithm: Algorithm, direction: Direction) -> String {
    format!("{} - {}", algorithm, direction)
}

/// Render the centered title and the two control lines into `area`
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    direction: Direction,
    config: &DrawConfig,
) {
    let theme = &config.theme;
    let text_style = Style::default().fg(theme.fg).bg(theme.bg);

    let lines = vec![
        Line::styled(
            title(algorithm, direction),
            Style::default()
                .fg(theme.title)
                .bg(theme.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(CONTROLS, text_style),
        Line::styled(ALGORITHMS, text_style),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.bg))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

//! Status bar rendering with keybindings and state indicators

use crate::config::DrawConfig;
use crate::ui::app::StatusKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub kind: StatusKind,
    /// Steps taken by the active or last completed sort
    pub steps: usize,
    /// Worst-case step count for the current list length
    pub max_steps: usize,
    pub is_sorting: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    data: StatusRenderData<'_>,
    config: &DrawConfig,
) {
    let theme = &config.theme;

    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let chip_color = match data.kind {
        StatusKind::Info => theme.idle,
        StatusKind::Sorting => theme.sorting,
        StatusKind::Finished => theme.finished,
        StatusKind::Rejected => theme.rejected,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.steps, data.max_steps),
            Style::default()
                .bg(chip_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.status_bg).fg(theme.key),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(theme.status_bg).fg(
                if data.kind == StatusKind::Rejected {
                    theme.rejected
                } else {
                    theme.status_fg
                },
            ),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds the main header does not list
    let key_style = Style::default().bg(theme.key).fg(Color::Black);
    let desc_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    let sep_style = Style::default().bg(theme.status_bg).fg(theme.key);

    let mut right_spans = vec![
        Span::styled(" f ", key_style),
        Span::styled(" finish ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
    ];

    let (label, color) = if data.is_sorting {
        (" ▶ SORTING ", theme.sorting)
    } else if data.kind == StatusKind::Finished {
        (" ✔ SORTED ", theme.finished)
    } else {
        (" IDLE ", theme.idle)
    };
    right_spans.push(Span::styled(
        label,
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,
    pub gradients: [Color; 3], // Cycled by bar index
    pub left_highlight: Color,  // Green
    pub right_highlight: Color, // Red
    pub status_bg: Color,
    pub status_fg: Color,
    pub key: Color,       // Grey keybind chips
    pub sorting: Color,   // Orange
    pub idle: Color,      // Blue
    pub finished: Color,  // Green
    pub rejected: Color,  // Red
}

impl Theme {
    /// Color of the bar at `index` when it is not highlighted
    pub fn gradient(&self, index: usize) -> Color {
        self.gradients[index % self.gradients.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(0, 0, 0),
    title: Color::Rgb(0, 255, 0),
    gradients: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    left_highlight: Color::Rgb(0, 255, 0),
    right_highlight: Color::Rgb(255, 0, 0),
    status_bg: Color::Rgb(50, 50, 70), // Dark strip below the white canvas
    status_fg: Color::Rgb(205, 214, 244),
    key: Color::Rgb(108, 112, 134),
    sorting: Color::Rgb(250, 179, 135),
    idle: Color::Rgb(137, 180, 250),
    finished: Color::Rgb(166, 227, 161),
    rejected: Color::Rgb(243, 139, 168),
};

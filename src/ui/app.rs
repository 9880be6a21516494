//! Main TUI application state and logic

use crate::config::DrawConfig;
use crate::driver::{SortDriver, Tick};
use crate::sort::{max_steps, Algorithm, Direction};
use crate::ui::panes::{self, StatusRenderData};
use crate::visual::Canvas;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const MIN_TICK: Duration = Duration::from_millis(1);
const MAX_TICK: Duration = Duration::from_secs(1);
const IDLE_POLL: Duration = Duration::from_millis(50);

/// How the status message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Sorting,
    Finished,
    Rejected,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Owns the list and the active sort session
    pub driver: SortDriver,

    /// Immutable palette and padding passed to every pane
    pub config: DrawConfig,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_kind: StatusKind,

    /// Time between two sort steps
    pub tick_interval: Duration,

    /// Last time a step was taken
    pub last_tick: Instant,
}

impl App {
    /// Create a new app around an idle driver
    pub fn new(driver: SortDriver, config: DrawConfig, tick_interval: Duration) -> Self {
        App {
            driver,
            config,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_kind: StatusKind::Info,
            tick_interval: tick_interval.clamp(MIN_TICK, MAX_TICK),
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.driver.is_sorting() && self.last_tick.elapsed() >= self.tick_interval {
                self.advance();
                self.last_tick = Instant::now();
            }

            // Wake up in time for the next step while sorting
            let timeout = if self.driver.is_sorting() {
                self.tick_interval.saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        frame.render_widget(
            Block::new().style(Style::default().bg(self.config.theme.bg)),
            size,
        );

        // Header (title + two control lines), bars, status bar
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_header(
            frame,
            chunks[0],
            self.driver.algorithm(),
            self.driver.direction(),
            &self.config,
        );

        let bar_area = chunks[1];
        self.driver
            .visual_mut()
            .resize(Canvas::new(bar_area.width, bar_area.height));
        let highlight = self.driver.highlight(&self.config.theme);
        panes::render_bars(
            frame,
            bar_area,
            self.driver.visual(),
            &highlight,
            &self.config,
        );

        panes::render_status_bar(
            frame,
            chunks[2],
            StatusRenderData {
                message: &self.status_message,
                kind: self.status_kind,
                steps: self.driver.steps(),
                max_steps: max_steps(self.driver.values().len()),
                is_sorting: self.driver.is_sorting(),
            },
            &self.config,
        );
    }

    /// Take one sort step and report completion
    fn advance(&mut self) {
        match self.driver.tick() {
            Tick::Idle | Tick::Stepped(_) => {}
            Tick::Finished { steps } => {
                self.set_status(StatusKind::Finished, format!("Sorted in {} step(s)", steps));
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => match self.driver.reset() {
                Ok(()) => self.set_status(StatusKind::Info, "List reset".to_string()),
                Err(e) => self.reject(e),
            },
            KeyCode::Char(' ') => match self.driver.start() {
                Ok(()) => {
                    // First step lands on the next loop iteration
                    self.last_tick = Instant::now()
                        .checked_sub(self.tick_interval)
                        .unwrap_or_else(Instant::now);
                    self.set_status(StatusKind::Sorting, "Sorting...".to_string());
                }
                Err(e) => self.reject(e),
            },
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.apply_direction(Direction::Ascending);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.apply_direction(Direction::Descending);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.apply_algorithm(Algorithm::Insertion);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.apply_algorithm(Algorithm::Bubble);
            }
            KeyCode::Char('f') | KeyCode::Char('F') => match self.driver.finish() {
                Some(steps) => {
                    self.set_status(StatusKind::Finished, format!("Sorted in {} step(s)", steps));
                }
                None => self.set_status(StatusKind::Info, "Nothing to finish".to_string()),
            },
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.tick_interval = (self.tick_interval / 2).max(MIN_TICK);
                self.report_speed();
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.tick_interval = (self.tick_interval * 2).min(MAX_TICK);
                self.report_speed();
            }
            _ => {}
        }
    }

    fn apply_direction(&mut self, direction: Direction) {
        match self.driver.set_direction(direction) {
            Ok(()) => self.set_status(StatusKind::Info, format!("{} order", direction)),
            Err(e) => self.reject(e),
        }
    }

    fn apply_algorithm(&mut self, algorithm: Algorithm) {
        match self.driver.select_algorithm(algorithm) {
            Ok(()) => self.set_status(StatusKind::Info, format!("{} selected", algorithm)),
            Err(e) => self.reject(e),
        }
    }

    fn report_speed(&mut self) {
        debug!(interval_ms = self.tick_interval.as_millis() as u64, "tick interval changed");
        let kind = if self.driver.is_sorting() {
            StatusKind::Sorting
        } else {
            StatusKind::Info
        };
        self.set_status(kind, format!("Step every {} ms", self.tick_interval.as_millis()));
    }

    fn reject(&mut self, error: impl std::fmt::Display) {
        self.set_status(StatusKind::Rejected, format!("Ignored: {}", error));
    }

    fn set_status(&mut self, kind: StatusKind, message: String) {
        self.status_kind = kind;
        self.status_message = message;
    }
}

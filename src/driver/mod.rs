//! Sort session state machine
//!
//! [`SortDriver`] owns the list, the chosen settings and at most one active
//! [`SortSession`]. The render loop calls [`SortDriver::tick`] once per frame:
//!
//! ```text
//! Idle --start--> Stepping --steps exhausted--> Idle
//!   ^                |
//!   +----reset-------+   (reset is accepted in every phase)
//! ```
//!
//! While stepping, every input except reset is rejected with
//! [`DriverError::SortInProgress`] and leaves the state untouched.

pub mod session;

pub use session::SortSession;

use crate::config::ListConfig;
use crate::errors::DriverError;
use crate::sort::{Algorithm, Direction, Step};
use crate::ui::theme::Theme;
use crate::visual::{generate_starting_list, Canvas, Padding, VisualState};
use rand::rngs::StdRng;
use ratatui::style::Color;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

/// Whether a sort is currently running
#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Stepping(SortSession),
}

/// Outcome of one frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing to advance
    Idle,
    /// One swap or shift was applied
    Stepped(Step),
    /// The active sort ran out of steps and the driver returned to idle
    Finished { steps: usize },
}

/// Drives the visualization: list generation, settings and the active session
#[derive(Debug)]
pub struct SortDriver {
    visual: VisualState,
    list: ListConfig,
    rng: StdRng,
    algorithm: Algorithm,
    direction: Direction,
    phase: Phase,
    /// Step count of the most recently completed sort
    last_completed: Option<usize>,
}

impl SortDriver {
    /// Create an idle driver holding a fresh random list
    pub fn new(list: ListConfig, padding: Padding, mut rng: StdRng) -> Result<Self, DriverError> {
        let values =
            generate_starting_list(&mut rng, list.count(), list.min_val(), list.max_val());
        let visual = VisualState::new(values, Canvas::new(0, 0), padding)?;

        Ok(SortDriver {
            visual,
            list,
            rng,
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            phase: Phase::Idle,
            last_completed: None,
        })
    }

    /// Discard any active sort and generate a new random list
    pub fn reset(&mut self) -> Result<(), DriverError> {
        let values = generate_starting_list(
            &mut self.rng,
            self.list.count(),
            self.list.min_val(),
            self.list.max_val(),
        );
        self.load(values)
    }

    /// Discard any active sort and show `values` instead
    pub fn load(&mut self, values: Vec<i64>) -> Result<(), DriverError> {
        self.visual.set_list(values)?;
        if let Phase::Stepping(session) = &self.phase {
            info!(steps = session.steps(), "sort abandoned by reset");
        }
        self.phase = Phase::Idle;
        self.last_completed = None;
        debug!(
            len = self.visual.values().len(),
            min = self.visual.min_val(),
            max = self.visual.max_val(),
            "list loaded"
        );
        Ok(())
    }

    /// Begin sorting the current list with the current settings
    pub fn start(&mut self) -> Result<(), DriverError> {
        self.ensure_idle("start a new sort")?;
        info!(
            algorithm = %self.algorithm,
            direction = %self.direction,
            len = self.visual.values().len(),
            "sort started"
        );
        self.phase = Phase::Stepping(SortSession::new(self.algorithm, self.direction));
        self.last_completed = None;
        Ok(())
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<(), DriverError> {
        self.ensure_idle("change direction")?;
        self.direction = direction;
        Ok(())
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), DriverError> {
        self.ensure_idle("change algorithm")?;
        self.algorithm = algorithm;
        Ok(())
    }

    fn ensure_idle(&self, action: &'static str) -> Result<(), DriverError> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::Stepping(_) => {
                debug!(action, "input ignored while sorting");
                Err(DriverError::SortInProgress { action })
            }
        }
    }

    /// Advance the active sort by one step, if any
    pub fn tick(&mut self) -> Tick {
        let Phase::Stepping(session) = &mut self.phase else {
            return Tick::Idle;
        };

        if let Some(step) = session.advance(self.visual.values_mut()) {
            trace!(left = step.left, right = step.right, "step");
            return Tick::Stepped(step);
        }

        let steps = session.steps();
        self.complete(steps);
        Tick::Finished { steps }
    }

    /// Run the active sort to completion at once.
    ///
    /// Returns the total step count, or `None` when idle.
    pub fn finish(&mut self) -> Option<usize> {
        let Phase::Stepping(session) = &mut self.phase else {
            return None;
        };
        session.drain(self.visual.values_mut());
        let steps = session.steps();
        self.complete(steps);
        Some(steps)
    }

    fn complete(&mut self, steps: usize) {
        info!(steps, "sort finished");
        self.phase = Phase::Idle;
        self.last_completed = Some(steps);
    }

    /// Colors for the indices touched by the latest step; empty when idle
    pub fn highlight(&self, theme: &Theme) -> FxHashMap<usize, Color> {
        let mut map = FxHashMap::default();
        if let Phase::Stepping(session) = &self.phase {
            if let Some(step) = session.last_step() {
                map.insert(step.left, theme.left_highlight);
                map.insert(step.right, theme.right_highlight);
            }
        }
        map
    }

    // ========== Getter methods for UI ==========

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    /// Mutable access for canvas resizes
    pub fn visual_mut(&mut self) -> &mut VisualState {
        &mut self.visual
    }

    pub fn values(&self) -> &[i64] {
        self.visual.values()
    }

    pub fn is_sorting(&self) -> bool {
        matches!(self.phase, Phase::Stepping(_))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steps taken by the active sort, or by the last completed one
    pub fn steps(&self) -> usize {
        match &self.phase {
            Phase::Stepping(session) => session.steps(),
            Phase::Idle => self.last_completed.unwrap_or(0),
        }
    }

    /// Step count of the last sort that ran to completion since the list was loaded
    pub fn last_completed(&self) -> Option<usize> {
        self.last_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn driver() -> SortDriver {
        SortDriver::new(
            ListConfig::new(8, 0, 20).unwrap(),
            Padding { side: 2, top: 1 },
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_idle_with_configured_list() {
        let driver = driver();
        assert!(!driver.is_sorting());
        assert_eq!(driver.values().len(), 8);
        assert!(driver.values().iter().all(|v| (0..=20).contains(v)));
        assert_eq!(driver.algorithm(), Algorithm::Bubble);
        assert_eq!(driver.direction(), Direction::Ascending);
    }

    #[test]
    fn test_tick_while_idle() {
        let mut driver = driver();
        assert_eq!(driver.tick(), Tick::Idle);
    }

    #[test]
    fn test_full_cycle_returns_to_idle() {
        let mut driver = driver();
        driver.load(vec![5, 3, 1]).unwrap();
        driver.start().unwrap();

        assert_eq!(driver.tick(), Tick::Stepped(Step::at(0)));
        assert_eq!(driver.tick(), Tick::Stepped(Step::at(1)));
        assert_eq!(driver.tick(), Tick::Stepped(Step::at(0)));
        assert_eq!(driver.tick(), Tick::Finished { steps: 3 });
        assert!(!driver.is_sorting());
        assert_eq!(driver.values(), &[1, 3, 5]);
        assert_eq!(driver.last_completed(), Some(3));
        assert_eq!(driver.tick(), Tick::Idle);
    }

    #[test]
    fn test_settings_rejected_while_sorting() {
        let mut driver = driver();
        driver.load(vec![3, 2, 1]).unwrap();
        driver.start().unwrap();

        assert_eq!(
            driver.set_direction(Direction::Descending),
            Err(DriverError::SortInProgress {
                action: "change direction"
            })
        );
        assert!(driver.select_algorithm(Algorithm::Insertion).is_err());
        assert!(driver.start().is_err());
        assert_eq!(driver.direction(), Direction::Ascending);
        assert_eq!(driver.algorithm(), Algorithm::Bubble);
    }

    #[test]
    fn test_highlight_tracks_last_step() {
        let mut driver = driver();
        let theme = Theme::default();
        driver.load(vec![2, 1, 3]).unwrap();
        assert!(driver.highlight(&theme).is_empty());

        driver.start().unwrap();
        assert!(driver.highlight(&theme).is_empty());

        driver.tick();
        let map = driver.highlight(&theme);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&0], theme.left_highlight);
        assert_eq!(map[&1], theme.right_highlight);

        assert_eq!(driver.tick(), Tick::Finished { steps: 1 });
        assert!(driver.highlight(&theme).is_empty());
    }

    #[test]
    fn test_finish_drains_session() {
        let mut driver = driver();
        driver.load(vec![4, 3, 2, 1]).unwrap();
        assert_eq!(driver.finish(), None);

        driver.start().unwrap();
        driver.tick();
        assert_eq!(driver.finish(), Some(6));
        assert_eq!(driver.values(), &[1, 2, 3, 4]);
        assert!(!driver.is_sorting());
    }

    #[test]
    fn test_reset_discards_session() {
        let mut driver = driver();
        driver.load(vec![9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
        driver.start().unwrap();
        driver.tick();
        driver.tick();

        driver.reset().unwrap();
        assert!(!driver.is_sorting());
        assert_eq!(driver.steps(), 0);
        assert_eq!(driver.values().len(), 8);
        assert_eq!(driver.tick(), Tick::Idle);
    }
}

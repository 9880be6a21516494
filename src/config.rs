//! Command-line options and the immutable draw configuration
//!
//! [`Args`] is parsed once in `main` and validated into a [`ListConfig`] (what
//! lists to generate), a [`DrawConfig`] (how to draw them) and the initial
//! sort settings. Nothing here changes after startup.

use crate::errors::ConfigError;
use crate::sort::{Algorithm, Direction};
use crate::ui::theme::Theme;
use crate::visual::Padding;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "sortty")]
#[command(about = "Watch bubble sort and insertion sort rearrange a list, one swap per frame")]
#[command(version)]
#[command(next_line_help = true)]
pub struct Args {
    #[arg(long, short = 'n', default_value_t = 50, help = "Number of bars to sort")]
    pub count: usize,

    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Smallest random value"
    )]
    pub min: i64,

    #[arg(
        long,
        default_value_t = 100,
        allow_negative_numbers = true,
        help = "Largest random value"
    )]
    pub max: i64,

    #[arg(long, default_value_t = 60, help = "Sort steps per second")]
    pub fps: u32,

    #[arg(long, help = "Seed the random generator for reproducible lists")]
    pub seed: Option<u64>,

    #[arg(
        long,
        value_enum,
        default_value_t = Algorithm::Bubble,
        help = "Algorithm selected at startup"
    )]
    pub algorithm: Algorithm,

    #[arg(long, help = "Start in descending order")]
    pub descending: bool,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to this file for debugging"
    )]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Check ranges and split the options into the pieces the app consumes
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let list = ListConfig::new(self.count, self.min, self.max)?;
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        Ok(Settings {
            list,
            seed: self.seed,
            algorithm: self.algorithm,
            direction: if self.descending {
                Direction::Descending
            } else {
                Direction::Ascending
            },
            tick: Duration::from_secs(1) / self.fps,
        })
    }
}

/// Validated startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub list: ListConfig,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub direction: Direction,
    /// Time between two sort steps
    pub tick: Duration,
}

/// Shape of the random lists generated on reset.
///
/// Only built through [`ListConfig::new`] (or `Default`), so `len >= 1` and
/// `min_val <= max_val` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    len: usize,
    min_val: i64,
    max_val: i64,
}

impl ListConfig {
    pub fn new(len: usize, min_val: i64, max_val: i64) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if min_val > max_val {
            return Err(ConfigError::InvertedRange {
                min: min_val,
                max: max_val,
            });
        }
        Ok(ListConfig {
            len,
            min_val,
            max_val,
        })
    }

    /// Number of values in each generated list
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn min_val(&self) -> i64 {
        self.min_val
    }

    pub fn max_val(&self) -> i64 {
        self.max_val
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            len: 50,
            min_val: 0,
            max_val: 100,
        }
    }
}

/// Everything the renderer needs besides the list itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    pub theme: Theme,
    pub padding: Padding,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            theme: Theme::default(),
            padding: Padding { side: 2, top: 1 },
        }
    }
}

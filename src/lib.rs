//! # Introduction
//!
//! sortty animates bubble sort and insertion sort in the terminal. The list is
//! drawn as bars; every frame tick the active sort performs exactly one swap
//! or shift and the two touched bars are highlighted.
//!
//! ## Pipeline
//!
//! ```text
//! Args → Settings → SortDriver (VisualState + SortSession) → TUI
//! ```
//!
//! 1. [`config`] — command-line options and the immutable draw configuration.
//! 2. [`visual`] — the list, its value range and the bar layout.
//! 3. [`sort`] — resumable sorting algorithms, one step per call.
//! 4. [`driver`] — the idle/stepping state machine the render loop ticks.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Keys
//!
//! `r` reset, space start, `a`/`d` ascending/descending, `i`/`b` insertion or
//! bubble sort, `f` finish instantly, `+`/`-` speed, `q` quit. Only reset is
//! honoured while a sort is running.

pub mod config;
pub mod driver;
pub mod errors;
pub mod logging;
pub mod sort;
pub mod ui;
pub mod visual;

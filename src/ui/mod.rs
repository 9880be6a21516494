//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, frame loop, keyboard dispatch
//! - **[`panes`]** — stateless render functions for the header, bars and status bar
//! - **[`theme`]** — color palette carried inside [`DrawConfig`]
//!
//! The entry point for consumers is [`App`]: construct it with a [`SortDriver`] and
//! call [`App::run`] to start the event loop.
//!
//! [`DrawConfig`]: crate::config::DrawConfig
//! [`SortDriver`]: crate::driver::SortDriver
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

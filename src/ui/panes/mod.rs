//! TUI pane rendering modules
//!
//! - [`header`]: algorithm/direction title and control hints
//! - [`bars`]: the list drawn as colored bars
//! - [`status`]: status bar with step counter, message and state indicator
//!
//! Each pane exports a stateless `render_*` function taking the immutable
//! [`DrawConfig`](crate::config::DrawConfig) explicitly.

pub mod bars;
pub mod header;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars;
pub use header::render_header;
pub use status::{render_status_bar, StatusRenderData};

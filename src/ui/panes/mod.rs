//! TUI pane rendering modules
//!
//! - [`canvas`]: the fractal itself, drawn with braille line segments
//! - [`info`]: grammar details of the active model and render statistics
//! - [`status`]: status bar with keybindings and selection state
//!
//! Each pane module exports a stateless `render_*` function; all state lives
//! in [`App`](crate::ui::app::App).

pub mod canvas;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use canvas::{render_canvas_pane, viewport_for};
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};

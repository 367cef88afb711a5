//! Turtle-graphics interpretation of drawing patterns
//!
//! - [`command`]: symbol → [`Command`] table
//! - [`cursor`]: [`CursorState`] value type and the [`BranchStack`]
//! - [`interpreter`]: the [`Turtle`] walker and [`interpret`]
//!
//! Each call to [`interpret`] owns its cursor and stack; nothing is shared
//! between calls.

pub mod command;
pub mod cursor;
pub mod interpreter;

pub use command::Command;
pub use cursor::{BranchStack, CursorState};
pub use interpreter::{interpret, LineSegment, Turtle};

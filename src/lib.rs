//! # Introduction
//!
//! fractty expands L-system grammars into drawing patterns and walks them
//! with a turtle to produce line segments, which a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) draws as braille art.
//!
//! ## Pipeline
//!
//! ```text
//! GrammarModel → generate → pattern → interpret → LineSegments → canvas
//! ```
//!
//! 1. [`lsystem`] — grammar models and iterative substitution.
//! 2. [`turtle`] — stack-based turtle interpretation of a pattern.
//! 3. [`bounded`] — the wrap/clamp numeric type behind the heading, the
//!    angle step, and the model selection.
//! 4. [`scene`] — maps a model onto a canvas and runs the two steps above.
//! 5. [`catalog`] — YAML model catalog, including the built-in fractals.
//! 6. [`cli`] — argument parsing and the non-interactive commands.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Drawing symbols
//!
//! `F` draw forward, `f` move forward, `-`/`+` turn by the angle step,
//! `|` turn around, `[`/`]` save/restore the cursor. Every other symbol is
//! ignored by the turtle.

pub mod bounded;
pub mod catalog;
pub mod cli;
pub mod lsystem;
pub mod scene;
pub mod turtle;
pub mod ui;

//! L-system grammars and pattern generation
//!
//! - [`model`]: [`GrammarModel`] and its validating builder
//! - [`generator`]: iterative substitution from axiom to drawing pattern
//! - [`errors`]: [`LSystemError`], shared with the turtle interpreter
//!
//! # Generation
//!
//! ```text
//! axiom ──mapping──▶ ... ──mapping──▶ pattern ──final_mapping──▶ drawing pattern
//!         (iterations passes)                   (once, if non-empty)
//! ```
//!
//! Generation is a pure function of the model; nothing is cached between calls.

pub mod errors;
pub mod generator;
pub mod model;

pub use errors::{InvalidReason, LSystemError};
pub use generator::{expand, generate};
pub use model::{GrammarModel, GrammarModelBuilder, Point, RuleSet};

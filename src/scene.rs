//! Per-redraw pipeline: model → pattern → segments in canvas coordinates
//!
//! The [`Viewport`] maps a model's normalized starting position onto the
//! canvas and derives the segment length from the canvas height. [`Scene`]
//! runs generation and interpretation once for a given model and angle step.
//! Nothing here is cached; hosts decide when a new scene is needed.

use crate::lsystem::errors::LSystemError;
use crate::lsystem::generator::generate;
use crate::lsystem::model::{GrammarModel, Point};
use crate::turtle::cursor::CursorState;
use crate::turtle::interpreter::{interpret, LineSegment};
use tracing::debug;

/// Drawable canvas area, Y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Blank border kept on every side
    pub margin: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Viewport {
            width,
            height,
            margin,
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.margin).max(0.0)
    }

    /// The model's starting cursor, scaled into this viewport
    pub fn initial_state(&self, model: &GrammarModel) -> CursorState {
        let start = model.initial_position();
        CursorState::new(
            Point::new(
                self.inner_width() * start.x + self.margin,
                self.inner_height() * start.y + self.margin,
            ),
            model.initial_angle(),
        )
    }

    /// Length of one `F` step for `model`
    pub fn segment_length(&self, model: &GrammarModel) -> f64 {
        model.segment_length(self.inner_height())
    }
}

/// The rendered result of one model at one angle step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub pattern_len: usize,
    pub segments: Vec<LineSegment>,
}

impl Scene {
    /// Generate and interpret `model` inside `viewport`
    pub fn render(
        model: &GrammarModel,
        angle_step: f64,
        viewport: &Viewport,
    ) -> Result<Scene, LSystemError> {
        let pattern = generate(model);
        let segments = interpret(
            &pattern,
            viewport.initial_state(model),
            viewport.segment_length(model),
            angle_step,
        )?;

        debug!(
            model = model.name(),
            angle_step,
            pattern_len = pattern.len(),
            segments = segments.len(),
            "rendered scene"
        );

        Ok(Scene {
            pattern_len: pattern.len(),
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_scaled_with_margin() {
        let model = GrammarModel::builder("Weed")
            .segments(3.0)
            .initial_position(0.5, 1.0)
            .initial_angle(90.0)
            .build()
            .unwrap();
        let viewport = Viewport::new(120.0, 80.0, 10.0);

        let state = viewport.initial_state(&model);
        assert_eq!(state.position, Point::new(60.0, 70.0));
        assert_eq!(state.heading(), 90.0);
    }

    #[test]
    fn test_segment_length_uses_inner_height() {
        let model = GrammarModel::builder("Koch")
            .segments(3.0)
            .iterations(2)
            .build()
            .unwrap();
        let viewport = Viewport::new(500.0, 110.0, 10.0);
        assert_eq!(viewport.segment_length(&model), 10.0);
    }
}

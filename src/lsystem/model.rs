//! Immutable description of a single fractal
//!
//! A [`GrammarModel`] bundles the rewrite rules with everything needed to
//! place and scale the resulting drawing. Models are assembled through
//! [`GrammarModelBuilder`], which validates the numeric fields once so the
//! generator and the turtle never see an unusable model.

use super::errors::{InvalidReason, LSystemError};
use rustc_hash::FxHashMap;

/// Rewrite rules: each key is replaced by its string on every pass
pub type RuleSet = FxHashMap<char, String>;

/// A point in canvas (or normalized) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One fractal definition
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarModel {
    name: String,
    mapping: RuleSet,
    final_mapping: RuleSet,
    iterations: u32,
    initial_value: String,
    initial_angle: f64,
    initial_position: Point,
    default_angle_step: f64,
    segments: f64,
}

impl GrammarModel {
    /// Start building a model with the reference defaults
    pub fn builder(name: impl Into<String>) -> GrammarModelBuilder {
        GrammarModelBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules applied on every iteration
    pub fn mapping(&self) -> &RuleSet {
        &self.mapping
    }

    /// Rules applied once, after the last iteration
    pub fn final_mapping(&self) -> &RuleSet {
        &self.final_mapping
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The axiom the first iteration rewrites
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    /// Starting heading in degrees (0 points along +X)
    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    /// Starting position in the unit square, `(0, 0)` at the top-left
    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    /// Angle step the host switches to when this model becomes active
    pub fn default_angle_step(&self) -> f64 {
        self.default_angle_step
    }

    /// Per-iteration shrink factor of the segment length
    pub fn segments(&self) -> f64 {
        self.segments
    }

    /// Length of one `F` step when the whole drawing spans `extent`
    ///
    /// Computed as `extent / segments^iterations`, so deeper models draw
    /// proportionally shorter lines.
    pub fn segment_length(&self, extent: f64) -> f64 {
        extent / self.segments.powf(f64::from(self.iterations))
    }
}

/// Fluent construction for [`GrammarModel`]
///
/// Unset fields keep the reference defaults: four iterations, axiom `"F"`,
/// heading 90°, start at the bottom centre `(0.5, 1.0)`. `segments` has no
/// usable default and must be set before [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct GrammarModelBuilder {
    model: GrammarModel,
}

impl GrammarModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GrammarModelBuilder {
            model: GrammarModel {
                name: name.into(),
                mapping: RuleSet::default(),
                final_mapping: RuleSet::default(),
                iterations: 4,
                initial_value: String::from("F"),
                initial_angle: 90.0,
                initial_position: Point::new(0.5, 1.0),
                default_angle_step: 0.0,
                segments: 0.0,
            },
        }
    }

    pub fn mapping(mut self, from: char, to: impl Into<String>) -> Self {
        self.model.mapping.insert(from, to.into());
        self
    }

    pub fn final_mapping(mut self, from: char, to: impl Into<String>) -> Self {
        self.model.final_mapping.insert(from, to.into());
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.model.iterations = iterations;
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.model.initial_value = value.into();
        self
    }

    pub fn initial_angle(mut self, degrees: f64) -> Self {
        self.model.initial_angle = degrees;
        self
    }

    pub fn initial_position(mut self, x: f64, y: f64) -> Self {
        self.model.initial_position = Point::new(x, y);
        self
    }

    pub fn default_angle_step(mut self, degrees: f64) -> Self {
        self.model.default_angle_step = degrees;
        self
    }

    pub fn segments(mut self, segments: f64) -> Self {
        self.model.segments = segments;
        self
    }

    /// Validate and freeze the model
    pub fn build(self) -> Result<GrammarModel, LSystemError> {
        let model = self.model;

        let finite_fields = [
            ("segments", model.segments),
            ("initial_angle", model.initial_angle),
            ("initial_position.x", model.initial_position.x),
            ("initial_position.y", model.initial_position.y),
            ("angle_step", model.default_angle_step),
        ];
        if let Some(&(field, _)) = finite_fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LSystemError::invalid_model(
                model.name,
                InvalidReason::NonFinite(field),
            ));
        }

        if model.segments <= 0.0 {
            let segments = model.segments;
            return Err(LSystemError::invalid_model(
                model.name,
                InvalidReason::NonPositiveSegments(segments),
            ));
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let model = GrammarModel::builder("Weed")
            .segments(3.0)
            .default_angle_step(25.0)
            .mapping('F', "F[-F]F[+F]F")
            .build()
            .unwrap();

        assert_eq!(model.name(), "Weed");
        assert_eq!(model.iterations(), 4);
        assert_eq!(model.initial_value(), "F");
        assert_eq!(model.initial_angle(), 90.0);
        assert_eq!(model.initial_position(), Point::new(0.5, 1.0));
        assert_eq!(model.default_angle_step(), 25.0);
        assert!(model.final_mapping().is_empty());
        assert_eq!(model.mapping().get(&'F').map(String::as_str), Some("F[-F]F[+F]F"));
    }

    #[test]
    fn test_missing_segments_is_rejected() {
        let err = GrammarModel::builder("Broken").build().unwrap_err();
        assert_eq!(
            err,
            LSystemError::InvalidModel {
                model: "Broken".to_string(),
                reason: InvalidReason::NonPositiveSegments(0.0),
            }
        );
    }

    #[test]
    fn test_negative_segments_is_rejected() {
        let err = GrammarModel::builder("Broken")
            .segments(-2.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LSystemError::InvalidModel {
                reason: InvalidReason::NonPositiveSegments(_),
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_angle_is_rejected() {
        let err = GrammarModel::builder("Broken")
            .segments(2.0)
            .initial_angle(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LSystemError::InvalidModel {
                reason: InvalidReason::NonFinite("initial_angle"),
                ..
            }
        ));
    }

    #[test]
    fn test_segment_length_scales_with_iterations() {
        let model = GrammarModel::builder("Koch")
            .segments(3.0)
            .iterations(2)
            .build()
            .unwrap();
        assert_eq!(model.segment_length(90.0), 10.0);

        let flat = GrammarModel::builder("Flat")
            .segments(3.0)
            .iterations(0)
            .build()
            .unwrap();
        assert_eq!(flat.segment_length(90.0), 90.0);
    }
}

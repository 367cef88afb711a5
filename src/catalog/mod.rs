//! Fractal catalog loading
//!
//! A catalog is a YAML list of [`ModelRecord`]s. Each record is converted
//! into a validated [`GrammarModel`] on load, so a catalog that loads
//! successfully only contains usable models. The built-in catalog is
//! embedded from `assets/catalog.yaml`.

use crate::lsystem::errors::{InvalidReason, LSystemError};
use crate::lsystem::model::GrammarModel;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.yaml");

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Model(#[from] LSystemError),

    #[error("Catalog contains no models")]
    Empty,
}

fn default_iterations() -> i64 {
    4
}

fn default_initial_value() -> String {
    String::from("F")
}

fn default_initial_angle() -> f64 {
    90.0
}

fn default_initial_position() -> (f64, f64) {
    (0.5, 1.0)
}

/// One catalog entry as written in YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelRecord {
    pub name: String,
    #[serde(default)]
    pub mapping: FxHashMap<char, String>,
    #[serde(default)]
    pub final_mapping: FxHashMap<char, String>,
    /// Signed so a negative count is reported as an invalid model rather
    /// than a parse error
    #[serde(default = "default_iterations")]
    pub iterations: i64,
    #[serde(default = "default_initial_value")]
    pub initial_value: String,
    #[serde(default = "default_initial_angle")]
    pub initial_angle: f64,
    #[serde(default = "default_initial_position")]
    pub initial_position: (f64, f64),
    #[serde(default)]
    pub angle_step: f64,
    pub segments: f64,
}

impl ModelRecord {
    /// Validate the record and build the model it describes
    pub fn into_model(self) -> Result<GrammarModel, LSystemError> {
        let iterations = u32::try_from(self.iterations).map_err(|_| {
            LSystemError::invalid_model(
                self.name.clone(),
                InvalidReason::InvalidIterations(self.iterations),
            )
        })?;

        let (x, y) = self.initial_position;
        let mut builder = GrammarModel::builder(self.name)
            .iterations(iterations)
            .initial_value(self.initial_value)
            .initial_angle(self.initial_angle)
            .initial_position(x, y)
            .default_angle_step(self.angle_step)
            .segments(self.segments);

        for (from, to) in self.mapping {
            builder = builder.mapping(from, to);
        }
        for (from, to) in self.final_mapping {
            builder = builder.final_mapping(from, to);
        }

        builder.build()
    }
}

/// An ordered, non-empty list of models
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<GrammarModel>,
}

impl Catalog {
    /// Wrap already-built models
    pub fn new(models: Vec<GrammarModel>) -> Result<Self, CatalogError> {
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Catalog { models })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from YAML text
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let records: Vec<ModelRecord> = serde_yaml::from_str(source)?;
        let models = records
            .into_iter()
            .map(ModelRecord::into_model)
            .collect::<Result<Vec<_>, _>>()?;

        for model in &models {
            debug!(
                model = model.name(),
                iterations = model.iterations(),
                rules = model.mapping().len(),
                "loaded model"
            );
        }

        Self::new(models)
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&source)?;
        info!(path = %path.display(), models = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// First model whose name matches, ignoring case
    pub fn find(&self, name: &str) -> Option<(usize, &GrammarModel)> {
        self.models
            .iter()
            .enumerate()
            .find(|(_, model)| model.name().eq_ignore_ascii_case(name))
    }

    pub fn get(&self, index: usize) -> Option<&GrammarModel> {
        self.models.get(index)
    }

    /// Model at `index`, or the last model when `index` is past the end
    pub fn model(&self, index: usize) -> &GrammarModel {
        // Non-empty by construction
        &self.models[index.min(self.models.len() - 1)]
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrammarModel> {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let catalog = Catalog::from_yaml_str(
            r#"
- name: Weed
  angle_step: 25.0
  segments: 3.0
  mapping:
    "F": "F[-F]F[+F]F"
"#,
        )
        .unwrap();

        let model = catalog.get(0).unwrap();
        assert_eq!(model.iterations(), 4);
        assert_eq!(model.initial_value(), "F");
        assert_eq!(model.initial_angle(), 90.0);
        assert_eq!(model.initial_position().x, 0.5);
        assert_eq!(model.initial_position().y, 1.0);
    }

    #[test]
    fn test_negative_iterations_is_invalid_model() {
        let err = Catalog::from_yaml_str(
            r#"
- name: Backwards
  iterations: -1
  segments: 2.0
"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Model(LSystemError::InvalidModel {
                reason: InvalidReason::InvalidIterations(-1),
                ..
            })
        ));
    }

    #[test]
    fn test_zero_segments_is_invalid_model() {
        let err = Catalog::from_yaml_str("- name: Flat\n  segments: 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Model(LSystemError::InvalidModel {
                reason: InvalidReason::NonPositiveSegments(_),
                ..
            })
        ));
    }

    #[test]
    fn test_missing_segments_is_parse_error() {
        let err = Catalog::from_yaml_str("- name: Nameless\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let err = Catalog::from_yaml_str("[]").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = Catalog::builtin().unwrap();
        let (index, model) = catalog.find("dragon").unwrap();
        assert_eq!(model.name(), "Dragon");
        assert_eq!(catalog.get(index), Some(model));
        assert!(catalog.find("no such fractal").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}

//! Non-interactive commands
//!
//! `list`, `generate` and `trace` print to any [`Write`] sink so they can be
//! driven from tests as well as from `main`. The interactive `view` command
//! lives in [`crate::ui`].

pub mod args;

pub use args::{Command, FracttyArgs};

use crate::bounded::BoundedValue;
use crate::catalog::{Catalog, CatalogError};
use crate::lsystem::errors::LSystemError;
use crate::lsystem::generator::generate;
use crate::lsystem::model::GrammarModel;
use crate::scene::{Scene, Viewport};
use crate::ui::app::{ANGLE_STEP_MAX, ANGLE_STEP_MIN};
use std::io::{self, Write};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No model named '{0}' in the catalog")]
    UnknownModel(String),

    #[error("Angle must be a finite number of degrees, got {0}")]
    InvalidAngle(f64),

    #[error("Extent must be a positive finite number, got {0}")]
    InvalidExtent(f64),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    LSystem(#[from] LSystemError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Load the catalog named on the command line, or the built-in one
pub fn load_catalog(args: &FracttyArgs) -> Result<Catalog, CatalogError> {
    match &args.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

/// Look a model up by name
pub fn resolve_model<'a>(catalog: &'a Catalog, name: &str) -> Result<(usize, &'a GrammarModel), CliError> {
    catalog
        .find(name)
        .ok_or_else(|| CliError::UnknownModel(name.to_string()))
}

/// `list`: one line per model
pub fn list_models(catalog: &Catalog, out: &mut impl Write) -> Result<(), CliError> {
    for (index, model) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{:>2}  {:<16} iterations={} angle={}°",
            index,
            model.name(),
            model.iterations(),
            model.default_angle_step()
        )?;
    }
    Ok(())
}

/// `generate`: the expanded pattern on one line
pub fn print_pattern(model: &GrammarModel, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", generate(model))?;
    Ok(())
}

/// Angle step for `trace`, held to the same range as the viewer
fn trace_angle_step(model: &GrammarModel, requested: Option<f64>) -> Result<f64, CliError> {
    let angle_step = requested.unwrap_or_else(|| model.default_angle_step());
    if !angle_step.is_finite() {
        return Err(CliError::InvalidAngle(angle_step));
    }
    Ok(BoundedValue::clamped(ANGLE_STEP_MIN, ANGLE_STEP_MAX, angle_step).get())
}

/// `trace`: every segment in a square `extent` × `extent` area
///
/// The angle step is clamped to the viewer's range; a non-finite angle or
/// an extent that is not a positive finite number is rejected.
pub fn print_segments(
    model: &GrammarModel,
    angle_step: Option<f64>,
    extent: f64,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if !(extent.is_finite() && extent > 0.0) {
        return Err(CliError::InvalidExtent(extent));
    }
    let angle_step = trace_angle_step(model, angle_step)?;
    let viewport = Viewport::new(extent, extent, 0.0);
    let scene = Scene::render(model, angle_step, &viewport)?;

    for segment in &scene.segments {
        writeln!(
            out,
            "{:.3} {:.3} {:.3} {:.3}",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        )?;
    }
    Ok(())
}

/// Run a non-interactive command against `catalog`
pub fn run_command(command: &Command, catalog: &Catalog, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::View { .. } => Ok(()),
        Command::List => list_models(catalog, out),
        Command::Generate { model } => {
            let (_, model) = resolve_model(catalog, model)?;
            print_pattern(model, out)
        }
        Command::Trace {
            model,
            angle,
            extent,
        } => {
            let (_, model) = resolve_model(catalog, model)?;
            print_segments(model, *angle, *extent, out)
        }
    }
}

//! Command-line arguments and subcommands, declared with clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "fractty",
    version,
    about = "Explore L-system fractals in the terminal."
)]
pub struct FracttyArgs {
    /// Load models from this YAML catalog instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write log output to this file (filter with FRACTTY_LOG).
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Wrap model selection around the ends of the catalog.
    #[arg(long, global = true)]
    pub wrap: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive viewer (the default).
    View {
        /// Name of the model to show first.
        #[arg(short, long)]
        model: Option<String>,
    },
    /// List the models in the catalog.
    List,
    /// Print the fully expanded drawing pattern of a model.
    Generate {
        /// Model name (case-insensitive).
        model: String,
    },
    /// Print the line segments of a model, one `x1 y1 x2 y2` per line.
    Trace {
        /// Model name (case-insensitive).
        model: String,
        /// Turn angle in degrees; defaults to the model's own angle step.
        #[arg(long)]
        angle: Option<f64>,
        /// Width and height of the square drawing area.
        #[arg(long, default_value_t = 1000.0)]
        extent: f64,
    },
}

impl FracttyArgs {
    /// Whether the chosen command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::View { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_flag_is_global() {
        let args =
            FracttyArgs::try_parse_from(["fractty", "view", "--model", "Dragon", "--wrap"]).unwrap();
        assert!(args.wrap);
        assert!(args.is_interactive());
        assert!(matches!(
            args.command,
            Some(Command::View { model: Some(ref name) }) if name == "Dragon"
        ));

        let args = FracttyArgs::try_parse_from(["fractty", "--wrap"]).unwrap();
        assert!(args.wrap);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_wrap_defaults_off() {
        let args = FracttyArgs::try_parse_from(["fractty", "list"]).unwrap();
        assert!(!args.wrap);
        assert!(!args.is_interactive());
    }

    #[test]
    fn test_trace_accepts_negative_extent_value() {
        // Rejected later by the command, not by the parser
        let args = FracttyArgs::try_parse_from(["fractty", "trace", "koch", "--extent=-81"]).unwrap();
        assert!(matches!(args.command, Some(Command::Trace { extent, .. }) if extent == -81.0));
    }
}

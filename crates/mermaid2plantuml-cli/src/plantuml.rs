//! PlantUML process runner
//!
//! Turns a `.puml` file into an image by invoking the external `plantuml`
//! program as `<program> -t<format> <file>`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info};

/// Program name looked up on `PATH` when none is configured
pub const DEFAULT_PROGRAM: &str = "plantuml";

/// Extension of intermediate PlantUML files
pub const PUML_EXTENSION: &str = "puml";

/// Errors from the image generation step
#[derive(Error, Debug)]
pub enum PlantUmlError {
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported output format: {0} (expected png, svg or pdf)")]
    UnsupportedFormat(String),

    #[error("PlantUML is not available as '{program}'; check that Java or Docker is installed")]
    NotInstalled {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("PlantUML ('{program}') exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Image formats PlantUML is asked to produce
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// PlantUML command-line switch selecting this format
    pub fn flag(&self) -> String {
        format!("-t{}", self.as_str())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PlantUmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(PlantUmlError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Where the `.puml` file goes: next to `output` when given, otherwise
/// next to `input`, keeping the file stem.
pub fn resolve_puml_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output.unwrap_or(input).with_extension(PUML_EXTENSION)
}

/// Image PlantUML writes for `puml` in `format`
pub fn image_path(puml: &Path, format: OutputFormat) -> PathBuf {
    puml.with_extension(format.as_str())
}

/// Runs the external PlantUML program
#[derive(Debug, Clone)]
pub struct PlantUmlExecutor {
    program: String,
}

impl PlantUmlExecutor {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn set_program(&mut self, program: impl Into<String>) {
        self.program = program.into();
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The command that renders `puml`; stdout and stderr are inherited.
    pub fn command(&self, puml: &Path, format: OutputFormat) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(format.flag()).arg(puml);
        command
    }

    /// Render `puml` to an image and return the image path.
    ///
    /// Checks run in order: the file exists, the format is supported, the
    /// program can be started, the program exits successfully.
    pub fn generate_image(&self, puml: &Path, format: &str) -> Result<PathBuf, PlantUmlError> {
        if !puml.exists() {
            return Err(PlantUmlError::InputNotFound(puml.to_path_buf()));
        }
        let format: OutputFormat = format.parse()?;

        debug!(program = %self.program, puml = %puml.display(), %format, "Running PlantUML");
        let status = self
            .command(puml, format)
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => PlantUmlError::NotInstalled {
                    program: self.program.clone(),
                    source,
                },
                _ => PlantUmlError::Io(source),
            })?;

        if !status.success() {
            return Err(PlantUmlError::Failed {
                program: self.program.clone(),
                status,
            });
        }

        let image = image_path(puml, format);
        info!(image = %image.display(), "Generated image");
        Ok(image)
    }
}

impl Default for PlantUmlExecutor {
    fn default() -> Self {
        Self::new()
    }
}
